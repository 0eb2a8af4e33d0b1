use cannamap_entities::{geo::*, registry::*};

use crate::usecases::Error;

/// Mean earth radius used by the haversine formula.
pub const EARTH_RADIUS: Distance = Distance::from_kilometers(6_371.0);

/// Calculate the great-circle distance on the surface
/// of the earth with the haversine formula.
/// Reference: https://en.wikipedia.org/wiki/Haversine_formula
///
/// The coordinates are not validated.
pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
    let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
    let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

    let dlat = lat2_rad - lat1_rad;
    let dlng = lng2_rad - lng1_rad;

    let dlat_sin = (dlat / 2.0).sin();
    let dlng_sin = (dlng / 2.0).sin();

    let h = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Distance::from_kilometers(EARTH_RADIUS.to_kilometers() * c)
}

/// The result of a nearest-location lookup.
///
/// `distances[i]` is the distance between the reference point
/// and the `i`-th candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestLocation<'a> {
    pub index: usize,
    pub record: &'a RegistryRecord,
    pub distance: Distance,
    pub distances: Vec<Distance>,
}

/// Find the candidate with the minimum distance to `reference`.
///
/// On ties the first candidate wins.
pub fn find_nearest(
    reference: MapPoint,
    candidates: &[RegistryRecord],
) -> Result<NearestLocation<'_>, Error> {
    let distances: Vec<_> = candidates
        .iter()
        .map(|c| distance(reference, c.pos))
        .collect();
    let (index, distance) = distances
        .iter()
        .copied()
        .enumerate()
        .fold(None, |nearest: Option<(usize, Distance)>, (i, d)| match nearest {
            Some((_, min)) if d < min => Some((i, d)),
            None => Some((i, d)),
            _ => nearest,
        })
        .ok_or(Error::EmptyInput)?;
    log::debug!(
        "Nearest of {} candidates to {reference}: #{index} ({distance})",
        candidates.len()
    );
    Ok(NearestLocation {
        index,
        record: &candidates[index],
        distance,
        distances,
    })
}
