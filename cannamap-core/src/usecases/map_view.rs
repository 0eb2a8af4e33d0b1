use super::prelude::*;

pub const DEFAULT_ZOOM: u8 = 11;

/// Tooltip template with the placeholders `{name}` and `{address}`.
pub const TOOLTIP_TEMPLATE: &str = "Registry Name: {name}\nRegistry Address: {address}";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: MapPoint,
    pub zoom: u8,
    pub pitch: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Large circles for all registry locations.
    Registry,
    /// Small dots on top of the registry circles.
    RegistryDots,
    /// The location that is closest to the user.
    Nearest,
}

impl LayerKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Registry => "registry",
            Self::RegistryDots => "registry-dots",
            Self::Nearest => "nearest",
        }
    }

    /// RGB
    pub const fn color(self) -> [u8; 3] {
        match self {
            Self::Registry => [0, 0, 255],
            Self::RegistryDots => [255, 0, 255],
            Self::Nearest => [0, 255, 0],
        }
    }

    /// Circle radius in meters.
    pub const fn radius(self) -> u32 {
        match self {
            Self::Registry => 100,
            Self::RegistryDots => 20,
            Self::Nearest => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapLayer<'a> {
    pub kind: LayerKind,
    pub records: Vec<&'a RegistryRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView<'a> {
    pub view_state: ViewState,
    pub layers: Vec<MapLayer<'a>>,
}

pub fn render_tooltip(record: &RegistryRecord) -> String {
    TOOLTIP_TEMPLATE
        .replace("{name}", &record.name)
        .replace("{address}", &record.address)
}

/// Mean latitude and longitude of all records.
pub fn center_of(records: &[RegistryRecord]) -> Option<MapPoint> {
    if records.is_empty() {
        return None;
    }
    let n = records.len() as f64;
    let (lat_sum, lng_sum) = records.iter().fold((0.0, 0.0), |(lat, lng), r| {
        let (r_lat, r_lng) = r.pos.to_lat_lng_deg();
        (lat + r_lat, lng + r_lng)
    });
    Some(MapPoint::from_lat_lng_deg(lat_sum / n, lng_sum / n))
}

/// Arrange the registry records as map layers.
///
/// The nearest location gets an additional highlight layer.
pub fn map_view<'a>(
    records: &'a [RegistryRecord],
    nearest: Option<&NearestLocation<'a>>,
    zoom: u8,
) -> Result<MapView<'a>> {
    let center = center_of(records).ok_or(Error::EmptyInput)?;
    let view_state = ViewState {
        center,
        zoom,
        pitch: 0,
    };
    let mut layers = vec![
        MapLayer {
            kind: LayerKind::Registry,
            records: records.iter().collect(),
        },
        MapLayer {
            kind: LayerKind::RegistryDots,
            records: records.iter().collect(),
        },
    ];
    if let Some(nearest) = nearest {
        layers.push(MapLayer {
            kind: LayerKind::Nearest,
            records: vec![nearest.record],
        });
    }
    Ok(MapView { view_state, layers })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};

    #[test]
    fn center_is_mean_position() {
        let records = vec![
            record("a", "", "", 10.0, -20.0),
            record("b", "", "", 20.0, -10.0),
            record("c", "", "", 30.0, 0.0),
        ];
        let center = center_of(&records).unwrap();
        let (lat, lng) = center.to_lat_lng_deg();
        assert!((lat - 20.0).abs() < 1e-9);
        assert!((lng + 10.0).abs() < 1e-9);
        assert_eq!(None, center_of(&[]));
    }

    #[test]
    fn base_layers_without_nearest_location() {
        let registry = boston_registry();
        let view = map_view(&registry, None, DEFAULT_ZOOM).unwrap();
        assert_eq!(11, view.view_state.zoom);
        assert_eq!(0, view.view_state.pitch);
        let kinds: Vec<_> = view.layers.iter().map(|l| l.kind).collect();
        assert_eq!(vec![LayerKind::Registry, LayerKind::RegistryDots], kinds);
        assert!(view.layers.iter().all(|l| l.records.len() == registry.len()));
    }

    #[test]
    fn highlight_nearest_location() {
        let registry = boston_registry();
        let nearest = find_nearest(MapPoint::from_lat_lng_deg(42.2830, -71.1290), &registry).unwrap();
        let view = map_view(&registry, Some(&nearest), 13).unwrap();
        assert_eq!(13, view.view_state.zoom);
        assert_eq!(3, view.layers.len());
        let highlight = &view.layers[2];
        assert_eq!(LayerKind::Nearest, highlight.kind);
        assert_eq!(vec![&registry[4]], highlight.records);
        assert_eq!([0, 255, 0], highlight.kind.color());
        assert_eq!(500, highlight.kind.radius());
    }

    #[test]
    fn empty_map() {
        assert!(matches!(map_view(&[], None, DEFAULT_ZOOM), Err(Error::EmptyInput)));
    }

    #[test]
    fn tooltip_with_name_and_address() {
        let r = RegistryRecord::build()
            .name("Ascend")
            .address("1 Main St")
            .finish();
        assert_eq!(
            "Registry Name: Ascend\nRegistry Address: 1 Main St",
            render_tooltip(&r)
        );
    }
}
