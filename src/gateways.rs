use cannamap_core::gateways::geocode::GeoCodingGateway;
use cannamap_gateways::{nominatim::Nominatim, opencage::OpenCage};

use crate::config::GeocodingGateway;

pub fn geocoding_gateway(cfg: &GeocodingGateway) -> Box<dyn GeoCodingGateway> {
    match cfg {
        GeocodingGateway::Nominatim { endpoint } => {
            log::info!("Use Nominatim geocoding gateway");
            Box::new(Nominatim::new(endpoint.clone()))
        }
        GeocodingGateway::OpenCage { api_key } => {
            log::info!("Use OpenCage geocoding gateway");
            Box::new(OpenCage::new(api_key.clone()))
        }
    }
}
