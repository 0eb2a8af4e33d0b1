use cannamap_entities::geo::MapPoint;
use geocoding::Forward;

/// Forward geocoding that takes the first result.
///
/// Provider errors are logged and treated like unknown addresses.
pub(crate) fn resolve_first<F>(provider: &F, provider_name: &str, addr: &str) -> Option<MapPoint>
where
    F: Forward<f64>,
{
    match provider.forward(addr) {
        Ok(points) => {
            let Some(point) = points.first() else {
                log::debug!("{provider_name}: no match for address '{addr}'");
                return None;
            };
            log::debug!("{provider_name}: resolved address location '{addr}': {point:?}");
            let pos = MapPoint::try_from_lat_lng_deg(point.y(), point.x());
            if pos.is_none() {
                log::warn!("{provider_name}: invalid location of address '{addr}': {point:?}");
            }
            pos
        }
        Err(err) => {
            log::warn!("{provider_name}: failed to resolve address location '{addr}': {err}");
            None
        }
    }
}
