// Room Block Allocator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/room-block-allocator --book 3 --book 2
// ```
//
// Or interactively against a randomly occupied building:
//
// ```console
// $ ./target/release/room-block-allocator --randomize --seed 42 --interactive
// ```

use anyhow::{Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use room_block_allocator::booking::{BookingCoordinator, BookingResult, LoggingConfig};
use room_block_allocator::display::render_grid;
use room_block_allocator::types::config::CliArgs;
use room_block_allocator::types::{BookingConfig, OutputFormat};
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        match BookingConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let mut logging = LoggingConfig::from_flags(args.verbose, args.debug);
    if let Some(dir) = &args.log_dir {
        logging = logging.with_file_logging(dir, "room-block-allocator");
    }
    let logging_result = logging.init();

    let _logging_guard = match logging_result {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    info!("Starting Room Block Allocator");

    // Load configuration from CLI arguments and optional config file
    let config = match BookingConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        eprintln!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no requests will be executed.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run(&args, &config) {
        error!("Allocator failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Build the coordinator, run the requested actions and print the final building
fn run(args: &CliArgs, config: &BookingConfig) -> Result<()> {
    let format = config.get_output_format().map_err(anyhow::Error::msg)?;
    let mut coordinator =
        BookingCoordinator::from_config(config).context("Failed to build the room inventory")?;

    let mut rng = match config.seed {
        Some(seed) => {
            info!("Using deterministic seed: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.randomize {
        randomize(&mut coordinator, config, &mut rng, format, &mut out)?;
    }

    for &n in &args.book {
        let result = coordinator.book(n);
        report(&result, format, &mut out)?;
    }

    if args.interactive {
        let stdin = io::stdin();
        run_interactive(&mut coordinator, config, &mut rng, format, stdin.lock(), &mut out)?;
    } else {
        show(&coordinator, format, &mut out)?;
    }

    eprintln!("Summary: {}", coordinator.statistics());
    Ok(())
}

/// Read one command per line until `quit` or end of input
fn run_interactive<R: BufRead, W: Write>(
    coordinator: &mut BookingCoordinator,
    config: &BookingConfig,
    rng: &mut StdRng,
    format: OutputFormat,
    input: R,
    out: &mut W,
) -> Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "Welcome! Enter number of rooms to book.")?;
        writeln!(out, "Commands: <rooms>, random, reset, show, stats, quit")?;
    }

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        match line.trim().to_lowercase().as_str() {
            "quit" | "exit" => break,
            "random" => randomize(coordinator, config, rng, format, out)?,
            "reset" => {
                coordinator.reset();
                message(out, format, "reset", "System reset.")?;
            }
            "show" => show(coordinator, format, out)?,
            "stats" => match format {
                OutputFormat::Text => writeln!(out, "{}", coordinator.statistics())?,
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string(coordinator.statistics())?)?
                }
            },
            _ => {
                let result = coordinator.book_input(&line);
                report(&result, format, out)?;
            }
        }
    }
    Ok(())
}

fn randomize<W: Write>(
    coordinator: &mut BookingCoordinator,
    config: &BookingConfig,
    rng: &mut StdRng,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    coordinator
        .apply_random_occupancy(config.random_occupancy_probability, rng)
        .context("Failed to randomize occupancy")?;
    message(out, format, "random", "Generated random occupancy.")
}

fn message<W: Write>(out: &mut W, format: OutputFormat, action: &str, text: &str) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", text)?,
        OutputFormat::Json => writeln!(out, "{}", json!({ "action": action, "message": text }))?,
    }
    Ok(())
}

/// Print the outcome of one booking call
fn report<W: Write>(result: &BookingResult, format: OutputFormat, out: &mut W) -> Result<()> {
    match (format, result) {
        (OutputFormat::Text, Ok(confirmation)) => writeln!(out, "{}", confirmation)?,
        (OutputFormat::Text, Err(e)) => writeln!(out, "{}", e)?,
        (OutputFormat::Json, Ok(confirmation)) => writeln!(
            out,
            "{}",
            json!({ "status": "booked", "message": confirmation.message(), "confirmation": confirmation })
        )?,
        (OutputFormat::Json, Err(e)) => writeln!(
            out,
            "{}",
            json!({ "status": "rejected", "category": e.category(), "message": e.to_string() })
        )?,
    }
    Ok(())
}

fn show<W: Write>(coordinator: &BookingCoordinator, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", render_grid(coordinator.inventory()))?,
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(coordinator.inventory())?)?
        }
    }
    Ok(())
}

/// Print configuration summary
fn print_configuration_summary(config: &BookingConfig) {
    eprintln!("Configuration:");
    eprintln!("  Floors: {}", config.total_floors);
    eprintln!("  Rooms per Floor: {}", config.rooms_per_floor);
    eprintln!("  Top Floor Rooms: {}", config.top_floor_rooms);
    eprintln!("  Max Rooms per Request: {}", config.max_rooms_per_request);
    eprintln!(
        "  Random Occupancy: {:.0}%",
        config.random_occupancy_probability * 100.0
    );
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Ok(plan) = config.floor_plan() {
        eprintln!("  Total Rooms: {}", plan.total_rooms());
    }
    eprintln!();
}
