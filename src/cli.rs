use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::{
    fs::File,
    io::{self, BufWriter},
    path::PathBuf,
};

use crate::{
    adapters::{csv, geojson},
    config::Config,
    dashboard::{parse_selection, Dashboard},
    gateways,
};
use cannamap_core::usecases as uc;

#[derive(Parser)]
#[command(name = "cannamap", version, about = "Map and statistics of the cannabis registry")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file with the registry records (overrides the configuration)
    #[arg(long, value_name = "FILE")]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive menu (default)
    Dashboard {
        /// Write the map layers as GeoJSON into this file
        #[arg(long, value_name = "FILE")]
        map_out: Option<PathBuf>,
    },
    /// Find the registry location that is closest to an address
    Nearest {
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,
    },
    /// Distribution of the license states
    Status {
        /// Print the number of businesses with this status
        #[arg(long)]
        select: Option<String>,
    },
    /// Distribution of the license categories
    Category {
        /// Only show these categories (repeatable or separated by ';')
        #[arg(long, value_delimiter = ';')]
        select: Vec<String>,
    },
    /// Write the map layers as GeoJSON
    Map {
        /// Highlight the location that is closest to this address
        #[arg(long)]
        nearest: Option<String>,
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(file) = args.registry {
        cfg.registry.file = file;
    }
    log::debug!("{cfg:?}");

    let records = csv::load_registry_file(&cfg.registry.file)?;
    if records.is_empty() {
        bail!("No registry records found in {}", cfg.registry.file.display());
    }

    let command = args
        .command
        .unwrap_or(Command::Dashboard { map_out: None });

    let geocoder = gateways::geocoding_gateway(&cfg.geocoding.gateway);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Dashboard { map_out } => {
            let dashboard = Dashboard::new(&records, geocoder, &cfg.map, map_out);
            dashboard.run(io::stdin().lock(), out)?;
        }
        Command::Nearest { address } => {
            let address = address.join(" ");
            let dashboard = Dashboard::new(&records, geocoder, &cfg.map, None);
            if !dashboard.show_nearest(&mut out, &address)? {
                bail!("Unable to resolve address '{address}'");
            }
        }
        Command::Status { select } => {
            let dashboard = Dashboard::new(&records, geocoder, &cfg.map, None);
            dashboard.show_license_status(&mut out, select.as_deref())?;
        }
        Command::Category { select } => {
            let selected = parse_selection(&select.join(";"));
            let dashboard = Dashboard::new(&records, geocoder, &cfg.map, None);
            dashboard.show_license_categories(&mut out, &selected)?;
        }
        Command::Map { nearest, out: path } => {
            let nearest = match nearest {
                Some(address) => Some(uc::locate_nearest(&geocoder, &address, &records)?),
                None => None,
            };
            let view = uc::map_view(&records, nearest.as_ref(), cfg.map.zoom)?;
            let file = File::create(&path)?;
            geojson::write_map_view(BufWriter::new(file), &view, &cfg.map.style)?;
            log::info!("Map layers written to {}", path.display());
        }
    }
    Ok(())
}
