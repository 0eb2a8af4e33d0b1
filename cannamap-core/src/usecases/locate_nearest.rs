use super::prelude::*;

/// Resolve a free-text address and find the nearest registry record.
pub fn locate_nearest<'a, G>(
    geocoder: &G,
    address: &str,
    records: &'a [RegistryRecord],
) -> Result<NearestLocation<'a>>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::AddressNotFound(address.to_string()));
    }
    let Some(pos) = geocoder.resolve_address_lat_lng(address) else {
        log::info!("Address '{address}' could not be resolved");
        return Err(Error::AddressNotFound(address.to_string()));
    };
    log::debug!("Resolved address '{address}': {pos}");
    find_nearest(pos, records)
}
