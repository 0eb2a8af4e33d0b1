use cannamap_core::gateways::geocode::GeoCodingGateway;
use cannamap_entities::geo::MapPoint;
use geocoding::Openstreetmap;

use crate::forward::resolve_first;

/// Forward geocoding with the OpenStreetMap Nominatim service.
pub struct Nominatim {
    osm: Openstreetmap,
}

impl Nominatim {
    pub fn new(endpoint: Option<String>) -> Self {
        let osm = match endpoint {
            Some(endpoint) => {
                log::info!("Use Nominatim endpoint {endpoint}");
                Openstreetmap::new_with_endpoint(endpoint)
            }
            None => Openstreetmap::new(),
        };
        Self { osm }
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        resolve_first(&self.osm, "Nominatim", addr)
    }
}
