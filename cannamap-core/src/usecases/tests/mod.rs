use super::prelude::*;
use std::{cell::RefCell, collections::HashMap};

pub use cannamap_entities::builders::*;

#[derive(Default)]
pub struct MockGeoCoder {
    pub known: HashMap<String, MapPoint>,
    pub requests: RefCell<Vec<String>>,
}

impl MockGeoCoder {
    pub fn with(mut self, addr: &str, lat: f64, lng: f64) -> Self {
        self.known
            .insert(addr.to_string(), MapPoint::from_lat_lng_deg(lat, lng));
        self
    }
}

impl GeoCodingGateway for MockGeoCoder {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        self.requests.borrow_mut().push(addr.to_string());
        self.known.get(addr).copied()
    }
}

pub fn record(name: &str, category: &str, status: &str, lat: f64, lng: f64) -> RegistryRecord {
    RegistryRecord::build()
        .name(name)
        .address(&format!("{name} Street, Boston"))
        .category(category)
        .status(status)
        .lat_lng(lat, lng)
        .finish()
}

pub fn boston_registry() -> Vec<RegistryRecord> {
    vec![
        record("Ascend", "Retailer", "Active", 42.3647, -71.0542),
        record("Pure Oasis", "Retailer", "Active", 42.3001, -71.0620),
        record("Core Growth", "Cultivator", "Pending", 42.3389, -71.0709),
        record("Seed Lab", "", "Active", 42.3480, -71.0820),
        record("Green Path", "Delivery", "Expired", 42.2830, -71.1290),
        record("Leaf Labs", "Cultivator", "Active", 42.3510, -71.0600),
    ]
}
