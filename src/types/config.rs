//! Configuration structures for the room allocator
//!
//! This module contains the booking configuration structure, its command line
//! arguments, and the validation logic that guards the building shape and
//! request limits.

use super::OutputFormat;
use crate::facility::{FloorPlan, FloorPlanError};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Reference request limits
pub mod limits {
    /// Largest number of rooms a single request may ask for
    pub const MAX_ROOMS_PER_REQUEST: usize = 5;

    /// Probability used by the "randomize occupancy" action
    pub const RANDOM_OCCUPANCY_PROBABILITY: f64 = 0.3;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "room-block-allocator",
    version = "0.1.0",
    about = "Room Block Allocator - books tightly clustered groups of rooms",
    long_about = "Books blocks of rooms from a fixed building inventory. Rooms on one floor are preferred; when no floor has enough free rooms, the cheapest cluster across floors is chosen instead.

EXAMPLES:
    # Book three rooms, then two more, in the reference building
    room-block-allocator --book 3 --book 2

    # Start from a randomly occupied building (reproducible)
    room-block-allocator --randomize --seed 42 --book 4

    # Read requests from stdin
    room-block-allocator --interactive

    # Generate configuration template
    room-block-allocator --print-config > my-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of floors in the building
    #[arg(long, help = "Number of floors in the building")]
    pub total_floors: Option<u32>,

    /// Rooms on every floor below the top floor
    #[arg(long, help = "Rooms per floor (all floors except the top floor)")]
    pub rooms_per_floor: Option<u32>,

    /// Rooms on the top floor
    #[arg(
        long,
        help = "Rooms on the top floor",
        long_help = "Rooms on the top floor. Must be smaller than --rooms-per-floor when the building has more than one floor. Default: 7"
    )]
    pub top_floor_rooms: Option<u32>,

    /// Largest number of rooms a single request may ask for
    #[arg(long, help = "Maximum rooms per booking request")]
    pub max_rooms_per_request: Option<usize>,

    /// Probability used when randomizing occupancy (0.0-1.0)
    #[arg(long, help = "Random occupancy probability (0.0-1.0)")]
    pub occupancy_probability: Option<f64>,

    /// Output format
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for confirmations and the room grid. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Random seed for reproducible occupancy
    #[arg(long, help = "Random seed for reproducible occupancy")]
    pub seed: Option<u64>,

    /// Booking requests to run, in order
    #[arg(
        short,
        long = "book",
        value_name = "ROOMS",
        allow_negative_numbers = true,
        help = "Book this many rooms (repeatable)"
    )]
    pub book: Vec<i64>,

    /// Randomize occupancy before booking
    #[arg(long, help = "Randomize occupancy before running any requests")]
    pub randomize: bool,

    /// Read commands from stdin
    #[arg(short, long, help = "Read booking commands from stdin")]
    pub interactive: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without booking
    #[arg(long, help = "Validate configuration without running any requests")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,

    /// Directory for daily rolling JSON log files
    #[arg(long, value_name = "DIR", help = "Also write JSON logs to daily files in this directory")]
    pub log_dir: Option<String>,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of floors in the building
    pub total_floors: Option<u32>,
    /// Rooms on every floor below the top floor
    pub rooms_per_floor: Option<u32>,
    /// Rooms on the top floor
    pub top_floor_rooms: Option<u32>,
    /// Largest number of rooms a single request may ask for
    pub max_rooms_per_request: Option<usize>,
    /// Probability used when randomizing occupancy
    pub random_occupancy_probability: Option<f64>,
    /// Output format
    pub output_format: Option<String>,
    /// Random seed
    pub seed: Option<u64>,
}

/// Booking configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfig {
    /// Number of floors in the building
    pub total_floors: u32,

    /// Rooms on every floor below the top floor
    pub rooms_per_floor: u32,

    /// Rooms on the top floor
    pub top_floor_rooms: u32,

    /// Largest number of rooms a single request may ask for
    pub max_rooms_per_request: usize,

    /// Probability used when randomizing occupancy (0.0-1.0)
    pub random_occupancy_probability: f64,

    /// Output format
    pub output_format: String,

    /// Random seed for reproducible occupancy
    pub seed: Option<u64>,
}

/// Errors raised while reading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The path does not exist
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// The file exists but could not be read
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[source] io::Error),

    /// The configuration could not be written
    #[error("Failed to write configuration file: {0}")]
    WriteError(#[source] io::Error),

    /// The file is not valid JSON for `ConfigFile`
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Only `.json` files are understood
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for booking configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// The building shape is invalid
    #[error("Invalid building layout: {0}")]
    InvalidFloorPlan(#[from] FloorPlanError),

    /// The per-request maximum is zero
    #[error("Maximum rooms per request must be greater than 0, got {0}")]
    InvalidRequestLimit(usize),

    /// Percentage value is out of range
    #[error("Invalid percentage for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidPercentage {
        /// Name of the field with invalid percentage
        field: String,
        /// The invalid percentage value
        value: f64,
    },

    /// Output format is not recognised
    #[error("{0}")]
    InvalidOutputFormat(String),
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            total_floors: crate::facility::REFERENCE_FLOORS,
            rooms_per_floor: crate::facility::REFERENCE_ROOMS_PER_FLOOR,
            top_floor_rooms: crate::facility::REFERENCE_TOP_FLOOR_ROOMS,
            max_rooms_per_request: limits::MAX_ROOMS_PER_REQUEST,
            random_occupancy_probability: limits::RANDOM_OCCUPANCY_PROBABILITY,
            output_format: "text".to_string(),
            seed: None,
        }
    }
}

impl From<&CliArgs> for ConfigFile {
    /// The command line flags that were given, as a partial layer
    fn from(args: &CliArgs) -> Self {
        Self {
            total_floors: args.total_floors,
            rooms_per_floor: args.rooms_per_floor,
            top_floor_rooms: args.top_floor_rooms,
            max_rooms_per_request: args.max_rooms_per_request,
            random_occupancy_probability: args.occupancy_probability,
            output_format: args.output_format.clone(),
            seed: args.seed,
        }
    }
}

impl BookingConfig {
    /// Layer defaults, the `--config` file and the command line flags, in that order
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let base = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.overlay(ConfigFile::from(&args)))
    }

    /// Load a JSON configuration file on top of the defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {}
            Some(ext) => return Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => return Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::ReadError(e),
        })?;
        let layer: ConfigFile = serde_json::from_str(&content)?;
        Ok(Self::default().overlay(layer))
    }

    /// Replace every value that `layer` sets
    pub fn overlay(self, layer: ConfigFile) -> Self {
        Self {
            total_floors: layer.total_floors.unwrap_or(self.total_floors),
            rooms_per_floor: layer.rooms_per_floor.unwrap_or(self.rooms_per_floor),
            top_floor_rooms: layer.top_floor_rooms.unwrap_or(self.top_floor_rooms),
            max_rooms_per_request: layer.max_rooms_per_request.unwrap_or(self.max_rooms_per_request),
            random_occupancy_probability: layer
                .random_occupancy_probability
                .unwrap_or(self.random_occupancy_probability),
            output_format: layer.output_format.unwrap_or(self.output_format),
            seed: layer.seed.or(self.seed),
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.floor_plan()?;

        if self.max_rooms_per_request == 0 {
            return Err(ConfigValidationError::InvalidRequestLimit(self.max_rooms_per_request));
        }

        if !(0.0..=1.0).contains(&self.random_occupancy_probability) {
            return Err(ConfigValidationError::InvalidPercentage {
                field: "random_occupancy_probability".to_string(),
                value: self.random_occupancy_probability,
            });
        }

        self.get_output_format().map_err(ConfigValidationError::InvalidOutputFormat)?;

        Ok(())
    }

    /// Build the floor plan described by this configuration
    pub fn floor_plan(&self) -> Result<FloorPlan, FloorPlanError> {
        FloorPlan::tiered(self.total_floors, self.rooms_per_floor, self.top_floor_rooms)
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}
