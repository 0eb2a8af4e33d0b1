use anyhow::{Context, Result};
use cannamap_core::entities::{MapPoint, RegistryRecord};
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

#[rustfmt::skip]
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    pub app_business_name          : String,
    pub app_license_category       : Option<String>,
    pub app_license_status         : Option<String>,
    pub equity_program_designation : Option<String>,
    pub facility_address           : Option<String>,
    pub facility_zip_code          : Option<String>,
    pub longitude                  : Option<String>,
    pub latitude                   : Option<String>,
}

impl CsvRecord {
    fn pos(&self) -> Option<MapPoint> {
        let lat = self.latitude.as_deref()?.trim().parse::<f64>().ok()?;
        let lng = self.longitude.as_deref()?.trim().parse::<f64>().ok()?;
        MapPoint::try_from_lat_lng_deg(lat, lng)
    }

    /// Records without a valid position are rejected.
    pub fn into_registry_record(self) -> Option<RegistryRecord> {
        let pos = self.pos()?;
        let CsvRecord {
            app_business_name,
            app_license_category,
            app_license_status,
            equity_program_designation,
            facility_address,
            facility_zip_code,
            ..
        } = self;
        Some(RegistryRecord {
            name: app_business_name,
            address: facility_address.unwrap_or_default(),
            category: app_license_category.unwrap_or_default(),
            status: app_license_status.unwrap_or_default(),
            equity_program_designation: non_empty(equity_program_designation),
            zip_code: non_empty(facility_zip_code),
            pos,
        })
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

pub fn read_registry<R: Read>(reader: R) -> Result<Vec<RegistryRecord>> {
    let mut rdr = ::csv::Reader::from_reader(reader);
    let mut records = vec![];
    for (i, row) in rdr.deserialize::<CsvRecord>().enumerate() {
        // header is line 1
        let line = i + 2;
        let row = row.with_context(|| format!("Invalid registry record in line {line}"))?;
        let name = row.app_business_name.clone();
        match row.into_registry_record() {
            Some(record) => records.push(record),
            None => {
                log::warn!(
                    "Skip registry record '{name}' in line {line}: missing or invalid coordinates"
                );
            }
        }
    }
    Ok(records)
}

pub fn load_registry_file<P: AsRef<Path>>(file_path: P) -> Result<Vec<RegistryRecord>> {
    let file_path = file_path.as_ref();
    log::info!("Load registry from {}", file_path.display());
    let file = File::open(file_path)
        .with_context(|| format!("Unable to open registry file {}", file_path.display()))?;
    let records = read_registry(file)?;
    log::info!("Loaded {} registry records", records.len());
    Ok(records)
}
