use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "cannamap.toml";

const ENV_NAME_REGISTRY_FILE: &str = "REGISTRY_FILE";
const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";
const ENV_NAME_NOMINATIM_ENDPOINT: &str = "NOMINATIM_ENDPOINT";

const DEFAULT_MAP_ZOOM: u8 = 11;
const MAX_MAP_ZOOM: u8 = 22;

#[derive(Debug)]
pub struct Config {
    pub registry: Registry,
    pub map: Map,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_from(|name| env::var(name).ok());
        Ok(cfg)
    }

    /// Apply the settings of environment variables.
    pub fn override_from<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = var(ENV_NAME_REGISTRY_FILE) {
            self.registry.file = file.into();
        }
        match &mut self.geocoding.gateway {
            GeocodingGateway::Nominatim { endpoint } => {
                if let Some(ep) = var(ENV_NAME_NOMINATIM_ENDPOINT) {
                    *endpoint = Some(ep);
                }
            }
            GeocodingGateway::OpenCage { api_key } => {
                if let Some(key) = var(ENV_NAME_OPENCAGE_API_KEY) {
                    *api_key = Some(key);
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct Registry {
    /// CSV file with the registry records
    pub file: PathBuf,
}

#[derive(Debug)]
pub struct Map {
    pub zoom: u8,
    pub style: String,
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: GeocodingGateway,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    Nominatim { endpoint: Option<String> },
    OpenCage { api_key: Option<String> },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            registry,
            map,
            geocoding,
            gateway,
        } = from;

        let raw::Registry { file } = registry.unwrap_or_default();
        let registry = Registry { file };

        let raw::Map { zoom, style } = map.unwrap_or_default();
        let zoom = zoom.unwrap_or(DEFAULT_MAP_ZOOM);
        if zoom > MAX_MAP_ZOOM {
            return Err(anyhow!("Invalid map zoom level {zoom} (max. {MAX_MAP_ZOOM})"));
        }
        let style = style
            .or_else(|| raw::Map::default().style)
            .unwrap_or_default();
        let map = Map { zoom, style };

        let raw::Gateway {
            nominatim,
            opencage,
        } = gateway.unwrap_or_default();
        let gw_name = geocoding
            .unwrap_or_default()
            .gateway
            .unwrap_or(raw::GeocodingGateway::Nominatim);
        let gateway = match gw_name {
            raw::GeocodingGateway::Nominatim => {
                let raw::Nominatim { endpoint } = nominatim.unwrap_or_default();
                GeocodingGateway::Nominatim { endpoint }
            }
            raw::GeocodingGateway::Opencage => {
                let api_key = opencage.map(|oc| oc.api_key);
                GeocodingGateway::OpenCage { api_key }
            }
        };
        let geocoding = Geocoding { gateway };

        Ok(Self {
            registry,
            map,
            geocoding,
        })
    }
}
