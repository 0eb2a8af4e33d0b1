use cannamap_core::gateways::geocode::GeoCodingGateway;
use cannamap_entities::geo::MapPoint;
use geocoding::Opencage;

use crate::forward::resolve_first;

/// Forward geocoding with the OpenCage API.
///
/// Without an API key no address can be resolved.
pub struct OpenCage {
    oc: Option<Opencage<'static>>,
}

impl OpenCage {
    pub fn new(api_key: Option<String>) -> Self {
        if api_key.is_none() {
            log::warn!("No OpenCage API key found");
        }
        Self {
            oc: api_key.map(Opencage::new),
        }
    }
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        let oc = self.oc.as_ref()?;
        resolve_first(oc, "OpenCage", addr)
    }
}
