//! Command-line front end for encoding and decoding DIGIPINs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use digipin::{
    CsvDecodeConfig, CsvDigipinConfig, DigipinCell, GeometryFormat, csv_decode_digipin,
    csv_to_digipin_csv,
};

#[derive(Parser, Debug)]
#[command(name = "digipin")]
#[command(about = "Encode and decode DIGIPIN geocodes")]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a latitude/longitude pair to a DIGIPIN
    #[command(allow_negative_numbers = true)]
    Encode {
        /// Latitude in decimal degrees
        lat: f64,
        /// Longitude in decimal degrees
        lon: f64,
        /// Print the cell as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a DIGIPIN (with or without separators) to latitude/longitude
    Decode {
        code: String,
        /// Print the cell as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert CSV files in bulk
    #[command(subcommand)]
    Csv(CsvCommand),
}

#[derive(Subcommand, Debug)]
enum CsvCommand {
    /// Add a DIGIPIN column to a CSV of locations
    Encode {
        input: PathBuf,
        output: PathBuf,
        /// Column holding WKT or GeoJSON geometry (instead of lon/lat columns)
        #[arg(long)]
        geometry_column: Option<String>,
        #[arg(long, default_value = "longitude")]
        lon_column: String,
        #[arg(long, default_value = "latitude")]
        lat_column: String,
        /// Columns to drop from the output
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,
        /// Also write each cell's polygon
        #[arg(long, value_enum)]
        cell_geometry: Option<GeometryArg>,
        /// Skip rows that cannot be encoded
        #[arg(long)]
        skip_invalid: bool,
    },
    /// Add latitude/longitude columns to a CSV of DIGIPINs
    Decode {
        input: PathBuf,
        output: PathBuf,
        #[arg(long, default_value = "digipin")]
        code_column: String,
        /// Skip rows that cannot be decoded
        #[arg(long)]
        skip_invalid: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GeometryArg {
    /// Well-Known Text
    Wkt,
    /// GeoJSON geometry object
    Geojson,
}

impl From<GeometryArg> for GeometryFormat {
    fn from(arg: GeometryArg) -> Self {
        match arg {
            GeometryArg::Wkt => GeometryFormat::Wkt,
            GeometryArg::Geojson => GeometryFormat::GeoJson,
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_cell(cell: &DigipinCell, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cell)?);
    } else {
        println!("DIGIPIN: {}", cell.code);
        println!("Latitude: {}", cell.latitude());
        println!("Longitude: {}", cell.longitude());
        println!("Google Maps: {}", cell.maps_url());
    }
    Ok(())
}

fn run_csv(command: CsvCommand) -> Result<()> {
    let summary = match command {
        CsvCommand::Encode {
            input,
            output,
            geometry_column,
            lon_column,
            lat_column,
            exclude,
            cell_geometry,
            skip_invalid,
        } => {
            let mut config = match geometry_column {
                Some(column) => CsvDigipinConfig::new(column),
                None => CsvDigipinConfig::from_coords(lon_column, lat_column),
            }
            .exclude(exclude)
            .skip_invalid(skip_invalid);
            if let Some(format) = cell_geometry {
                config = config.with_cell_geometry(format.into());
            }
            debug!(?config, "csv encode");

            csv_to_digipin_csv(&input, &output, &config)
                .with_context(|| format!("failed to encode {}", input.display()))?
        }
        CsvCommand::Decode {
            input,
            output,
            code_column,
            skip_invalid,
        } => {
            let config = CsvDecodeConfig::new(code_column).skip_invalid(skip_invalid);
            debug!(?config, "csv decode");

            csv_decode_digipin(&input, &output, &config)
                .with_context(|| format!("failed to decode {}", input.display()))?
        }
    };

    println!(
        "{} rows read, {} written, {} skipped",
        summary.rows_read, summary.rows_written, summary.rows_skipped
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Encode { lat, lon, json } => {
            info!(lat, lon, "encoding");
            let cell = DigipinCell::from_lat_lon(lat, lon)?;
            if json {
                print_cell(&cell, true)?;
            } else {
                println!("{}", cell.code);
            }
        }
        Command::Decode { code, json } => {
            info!(%code, "decoding");
            let cell = DigipinCell::from_code(&code)?;
            print_cell(&cell, json)?;
        }
        Command::Csv(command) => run_csv(command)?,
    }

    Ok(())
}
