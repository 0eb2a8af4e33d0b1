use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    /// Unchecked: out-of-range values are kept as they are.
    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        Self(deg.into())
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        Some(Self::from_deg(deg)).filter(|lat| lat.is_valid())
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub fn is_valid(self) -> bool {
        (Self::DEG_MIN..=Self::DEG_MAX).contains(&self.0)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    /// Unchecked: out-of-range values are kept as they are.
    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        Self(deg.into())
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        Some(Self::from_deg(deg)).filter(|lng| lng.is_valid())
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical location given in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, MapPointParseError> {
        let lat_deg = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Latitude(lat_deg_str.to_string()))?;
        let lng_deg = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Longitude(lng_deg_str.to_string()))?;
        let lat = LatCoord::try_from_deg(lat_deg)
            .ok_or_else(|| MapPointParseError::Latitude(lat_deg_str.to_string()))?;
        let lng = LngCoord::try_from_deg(lng_deg)
            .ok_or_else(|| MapPointParseError::Longitude(lng_deg_str.to_string()))?;
        Ok(Self::new(lat, lng))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapPointParseError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(String),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(String),
    #[error("Failed to parse map point: {0}")]
    Format(String),
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(MapPointParseError::Format(s.to_string()))
        }
    }
}

/// Distance on the surface of the earth in kilometers.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_kilometers(km: f64) -> Self {
        Self(km)
    }

    pub const fn to_kilometers(self) -> f64 {
        self.0
    }

    pub fn to_meters(self) -> f64 {
        self.0 * 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} km", self.0)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn latitude() {
        assert_eq!(-90.0, LatCoord::min().to_deg());
        assert_eq!(90.0, LatCoord::max().to_deg());
        assert_eq!(LatCoord::min(), LatCoord::from_deg(-90));
        assert_eq!(LatCoord::max(), LatCoord::from_deg(90));
        assert_eq!(None, LatCoord::try_from_deg(-90.000001));
        assert_eq!(None, LatCoord::try_from_deg(90.000001));
        assert!(!LatCoord::from_deg(f64::NAN).is_valid());
    }

    #[test]
    fn longitude() {
        assert_eq!(-180.0, LngCoord::min().to_deg());
        assert_eq!(180.0, LngCoord::max().to_deg());
        assert!(LngCoord::min().is_valid());
        assert!(LngCoord::max().is_valid());
        assert_eq!(None, LngCoord::try_from_deg(-180.000001));
        assert_eq!(None, LngCoord::try_from_deg(180.000001));
    }

    #[test]
    fn radians() {
        let (lat, lng) = MapPoint::from_lat_lng_deg(90.0, -180.0).to_lat_lng_rad();
        assert!((lat - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((lng + std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn parse_map_point() {
        let pt: MapPoint = "42.36,-71.06".parse().unwrap();
        assert_eq!(pt, MapPoint::from_lat_lng_deg(42.36, -71.06));
        let pt: MapPoint = " 42.36 , -71.06 ".parse().unwrap();
        assert_eq!(pt.to_lat_lng_deg(), (42.36, -71.06));
        assert_eq!(
            Err(MapPointParseError::Latitude("91".into())),
            "91,0".parse::<MapPoint>()
        );
        assert_eq!(
            Err(MapPointParseError::Longitude("x".into())),
            "0,x".parse::<MapPoint>()
        );
        assert!(matches!(
            "1,2,3".parse::<MapPoint>(),
            Err(MapPointParseError::Format(_))
        ));
    }

    #[test]
    fn display_map_point() {
        assert_eq!("42.36,-71.06", MapPoint::from_lat_lng_deg(42.36, -71.06).to_string());
    }

    #[test]
    fn compare_distances() {
        assert!(Distance::from_kilometers(1.0) < Distance::from_kilometers(1.5));
        assert!(Distance::from_kilometers(1e9) < Distance::infinite());
        assert_eq!(1_500.0, Distance::from_kilometers(1.5).to_meters());
        assert!(!Distance::from_kilometers(-1.0).is_valid());
        assert_eq!("1.23 km", Distance::from_kilometers(1.2345).to_string());
    }
}
