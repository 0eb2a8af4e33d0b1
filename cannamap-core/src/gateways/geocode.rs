use cannamap_entities::geo::MapPoint;

pub trait GeoCodingGateway {
    /// Resolve a free-text address.
    ///
    /// Returns `None` if the address could not be found.
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint>;
}

impl<G> GeoCodingGateway for &G
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        (**self).resolve_address_lat_lng(addr)
    }
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
        (**self).resolve_address_lat_lng(addr)
    }
}
