use anyhow::Result;
use cannamap_core::{
    entities::RegistryRecord,
    gateways::geocode::GeoCodingGateway,
    usecases::{self as uc, Error as UcError},
};
use itertools::Itertools;
use std::{
    fs::File,
    io::{BufRead, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};
use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::{
    adapters::{chart, geojson},
    config,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum Action {
    #[strum(to_string = "Find the closest cannabis location")]
    FindNearest,
    #[strum(to_string = "Check the distribution of app_license_status")]
    LicenseStatus,
    #[strum(to_string = "Check the distribution of app_license_category")]
    LicenseCategory,
    #[strum(to_string = "Exit")]
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid choice '{0}'")]
pub struct InvalidChoice(String);

impl FromStr for Action {
    type Err = InvalidChoice;

    /// Accepts the number of the menu entry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        s.parse::<usize>()
            .ok()
            .and_then(|nr| nr.checked_sub(1))
            .and_then(|idx| Action::iter().nth(idx))
            .ok_or_else(|| InvalidChoice(s.to_string()))
    }
}

pub struct Dashboard<'a, G> {
    records: &'a [RegistryRecord],
    geocoder: G,
    map: &'a config::Map,
    map_file: Option<PathBuf>,
}

impl<'a, G> Dashboard<'a, G>
where
    G: GeoCodingGateway,
{
    pub fn new(
        records: &'a [RegistryRecord],
        geocoder: G,
        map: &'a config::Map,
        map_file: Option<PathBuf>,
    ) -> Self {
        Self {
            records,
            geocoder,
            map,
            map_file,
        }
    }

    /// Interactive menu loop.
    ///
    /// Returns after [`Action::Exit`] or at the end of the input.
    pub fn run<R, W>(&self, input: R, mut out: W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut lines = input.lines();
        self.show_map(&mut out, None)?;
        loop {
            writeln!(out)?;
            writeln!(out, "Choose an action:")?;
            for (i, action) in Action::iter().enumerate() {
                writeln!(out, "  {}) {action}", i + 1)?;
            }
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next().transpose()? else {
                log::debug!("End of input");
                return Ok(());
            };
            let action = match line.parse::<Action>() {
                Ok(action) => action,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    continue;
                }
            };
            log::debug!("Selected action: {action:?}");
            match action {
                Action::FindNearest => {
                    write!(out, "Enter Your Address: ")?;
                    out.flush()?;
                    let address = lines.next().transpose()?.unwrap_or_default();
                    self.show_nearest(&mut out, &address)?;
                }
                Action::LicenseStatus => {
                    self.show_license_status(&mut out, None)?;
                    let dist = uc::license_status_distribution(self.records);
                    write!(
                        out,
                        "Select an APP license status ({}): ",
                        dist.labels().iter().join(", ")
                    )?;
                    out.flush()?;
                    let selected = lines.next().transpose()?.unwrap_or_default();
                    let selected = selected.trim();
                    if !selected.is_empty() {
                        writeln!(
                            out,
                            "Number of businesses with {selected}: {}",
                            dist.count_of(selected)
                        )?;
                    }
                }
                Action::LicenseCategory => {
                    let dist = uc::license_category_distribution(self.records);
                    write!(
                        out,
                        "Select license categories, separated by ';' ({}): ",
                        dist.labels().iter().join("; ")
                    )?;
                    out.flush()?;
                    let selected = lines.next().transpose()?.unwrap_or_default();
                    let selected = parse_selection(&selected);
                    self.show_license_categories(&mut out, &selected)?;
                }
                Action::Exit => {
                    writeln!(out, "Thank you for visiting!")?;
                    return Ok(());
                }
            }
        }
    }

    pub fn show_nearest<W: Write>(&self, out: &mut W, address: &str) -> Result<bool> {
        let nearest = match uc::locate_nearest(&self.geocoder, address, self.records) {
            Ok(nearest) => nearest,
            Err(UcError::AddressNotFound(addr)) => {
                log::warn!("Unable to resolve address '{addr}'");
                writeln!(out, "Please enter a valid address.")?;
                return Ok(false);
            }
            Err(err) => return Err(err.into()),
        };
        writeln!(out, "Closest Location to {}:", address.trim())?;
        writeln!(out, "Registry Name: {}", nearest.record.name)?;
        writeln!(out, "Registry Address: {}", nearest.record.address)?;
        writeln!(out, "Distance: {}", nearest.distance)?;
        if self.map_file.is_some() {
            writeln!(out, "The closest location will be displayed in green in the map")?;
        }
        self.show_map(out, Some(&nearest))?;
        Ok(true)
    }

    pub fn show_license_status<W: Write>(
        &self,
        out: &mut W,
        selected: Option<&str>,
    ) -> Result<()> {
        let dist = uc::license_status_distribution(self.records);
        writeln!(out, "{}", chart::bar_chart("Bar Chart: APP License Status", &dist))?;
        writeln!(out, "{}", chart::pie_chart("Pie Chart: APP License Status", &dist))?;
        if let Some(selected) = selected {
            writeln!(
                out,
                "Number of businesses with {selected}: {}",
                dist.count_of(selected)
            )?;
        }
        Ok(())
    }

    /// All categories are shown if nothing is selected.
    pub fn show_license_categories<W: Write>(
        &self,
        out: &mut W,
        selected: &[String],
    ) -> Result<()> {
        let dist = uc::license_category_distribution(self.records);
        let dist = if selected.is_empty() {
            dist
        } else {
            dist.select(selected)
        };
        writeln!(out, "{}", chart::bar_chart("Bar Chart: License Categories", &dist))?;
        let labels: Vec<&str> = if selected.is_empty() {
            dist.labels().iter().map(String::as_str).collect()
        } else {
            selected.iter().map(String::as_str).collect()
        };
        for label in labels {
            writeln!(
                out,
                "Number of businesses with {label}: {}",
                dist.count_of(label)
            )?;
        }
        Ok(())
    }

    fn show_map<W: Write>(
        &self,
        out: &mut W,
        nearest: Option<&uc::NearestLocation>,
    ) -> Result<()> {
        let Some(path) = &self.map_file else {
            return Ok(());
        };
        let view = uc::map_view(self.records, nearest, self.map.zoom)?;
        let file = File::create(path)?;
        geojson::write_map_view(BufWriter::new(file), &view, &self.map.style)?;
        log::info!("Map layers written to {}", path.display());
        writeln!(
            out,
            "The Map of Cannabis Registries in Boston: {} locations ({})",
            self.records.len(),
            path.display()
        )?;
        Ok(())
    }
}

/// Split a list of values separated by `;`.
pub fn parse_selection(s: &str) -> Vec<String> {
    s.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cannamap_core::entities::MapPoint;
    use cannamap_entities::builders::*;

    struct FixedGeoCoder;

    impl GeoCodingGateway for FixedGeoCoder {
        fn resolve_address_lat_lng(&self, addr: &str) -> Option<MapPoint> {
            (addr == "City Hall").then(|| MapPoint::from_lat_lng_deg(42.3604, -71.0580))
        }
    }

    fn record(name: &str, category: &str, status: &str, lat: f64, lng: f64) -> RegistryRecord {
        RegistryRecord::build()
            .name(name)
            .address(&format!("{name} Street"))
            .category(category)
            .status(status)
            .lat_lng(lat, lng)
            .finish()
    }

    fn registry() -> Vec<RegistryRecord> {
        vec![
            record("Ascend", "Retailer", "Active", 42.3647, -71.0542),
            record("Core Growth", "Cultivator", "Pending", 42.3389, -71.0709),
            record("Seed Lab", " ", "Active", 42.3480, -71.0820),
        ]
    }

    fn map_config() -> config::Map {
        config::Map {
            zoom: 11,
            style: "mapbox://styles/mapbox/outdoors-v11".into(),
        }
    }

    fn run(input: &str) -> String {
        let records = registry();
        let map = map_config();
        let dashboard = Dashboard::new(&records, FixedGeoCoder, &map, None);
        let mut out = Vec::new();
        dashboard.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_actions() {
        assert_eq!(Ok(Action::FindNearest), "1".parse::<Action>());
        assert_eq!(Ok(Action::LicenseStatus), " 2 ".parse::<Action>());
        assert_eq!(Ok(Action::LicenseCategory), "3".parse::<Action>());
        assert_eq!(Ok(Action::Exit), "4".parse::<Action>());
        assert_eq!(Err(InvalidChoice("0".into())), "0".parse::<Action>());
        assert_eq!(Err(InvalidChoice("5".into())), "5".parse::<Action>());
        assert_eq!(Err(InvalidChoice("exit".into())), "exit".parse::<Action>());
    }

    #[test]
    fn menu_labels() {
        assert_eq!(
            "Find the closest cannabis location",
            Action::FindNearest.to_string()
        );
        assert_eq!(4, Action::iter().count());
    }

    #[test]
    fn find_nearest_location() {
        let out = run("1\nCity Hall\n4\n");
        assert!(out.contains("Closest Location to City Hall:"));
        assert!(out.contains("Registry Name: Ascend"));
        assert!(out.contains("Registry Address: Ascend Street"));
        assert!(out.ends_with("Thank you for visiting!\n"));
    }

    #[test]
    fn warn_about_unknown_address() {
        let out = run("1\nAtlantis\n4\n");
        assert!(out.contains("Please enter a valid address."));
        assert!(!out.contains("Closest Location"));
        assert!(out.contains("Thank you for visiting!"));
    }

    #[test]
    fn license_status_with_selection() {
        let out = run("2\nActive\n4\n");
        assert!(out.contains("Bar Chart: APP License Status"));
        assert!(out.contains("(Active, Pending)"));
        assert!(out.contains("Number of businesses with Active: 2"));
        assert!(out.contains(" 66.7%  Active"));
    }

    #[test]
    fn license_categories_with_selection() {
        let out = run("3\nN/A; Retailer; Delivery\n4\n");
        assert!(out.contains("(Retailer; Cultivator; N/A)"));
        assert!(out.contains("Number of businesses with N/A: 1"));
        assert!(out.contains("Number of businesses with Retailer: 1"));
        assert!(out.contains("Number of businesses with Delivery: 0"));
        assert!(!out.contains("Number of businesses with Cultivator"));
    }

    #[test]
    fn invalid_choice_and_end_of_input() {
        let out = run("9\n");
        assert!(out.contains("Invalid choice '9'"));
        assert!(!out.contains("Thank you for visiting!"));
    }

    #[test]
    fn write_map_file() {
        let records = registry();
        let map = map_config();
        let path =
            std::env::temp_dir().join(format!("cannamap-test-{}.geojson", std::process::id()));
        let dashboard = Dashboard::new(&records, FixedGeoCoder, &map, Some(path.clone()));
        let mut out = Vec::new();
        assert!(dashboard.show_nearest(&mut out, "City Hall").unwrap());
        let json: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();
        let features = json["features"].as_array().unwrap();
        assert_eq!(7, features.len());
        assert_eq!("Ascend", features[6]["properties"]["name"]);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("displayed in green"));
    }

    #[test]
    fn split_selection() {
        assert_eq!(vec!["a", "b c"], parse_selection(" a ;; b c ;"));
        assert!(parse_selection("  ").is_empty());
    }
}
