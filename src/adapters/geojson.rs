//! GeoJSON representation of the map layers for external map renderers.

use cannamap_core::usecases::{self as uc, render_tooltip, MapView};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub view_state: ViewState,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub pitch: u8,
    pub map_style: String,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Geometry,
    pub properties: Properties,
}

#[derive(Debug, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct Properties {
    pub layer: &'static str,
    pub name: String,
    pub address: String,
    pub color: [u8; 3],
    pub radius: u32,
    pub tooltip: String,
}

impl FeatureCollection {
    pub fn from_map_view(view: &MapView, map_style: &str) -> Self {
        let uc::ViewState {
            center,
            zoom,
            pitch,
        } = view.view_state;
        let (latitude, longitude) = center.to_lat_lng_deg();
        let view_state = ViewState {
            latitude,
            longitude,
            zoom,
            pitch,
            map_style: map_style.to_string(),
        };
        let features = view
            .layers
            .iter()
            .flat_map(|layer| {
                layer.records.iter().map(move |r| {
                    let (lat, lng) = r.pos.to_lat_lng_deg();
                    Feature {
                        kind: "Feature",
                        geometry: Geometry {
                            kind: "Point",
                            coordinates: [lng, lat],
                        },
                        properties: Properties {
                            layer: layer.kind.name(),
                            name: r.name.clone(),
                            address: r.address.clone(),
                            color: layer.kind.color(),
                            radius: layer.kind.radius(),
                            tooltip: render_tooltip(r),
                        },
                    }
                })
            })
            .collect();
        Self {
            kind: "FeatureCollection",
            view_state,
            features,
        }
    }
}

pub fn write_map_view<W: Write>(
    writer: W,
    view: &MapView,
    map_style: &str,
) -> serde_json::Result<()> {
    let collection = FeatureCollection::from_map_view(view, map_style);
    serde_json::to_writer_pretty(writer, &collection)
}
