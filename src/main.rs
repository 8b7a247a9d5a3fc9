// Campus Access Register - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/campus-access-register
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/campus-access-register --student-cutoff 09:00 --verbose
// ```

use anyhow::{anyhow, Context, Result};
use campus_access_register::session::{CampusSession, LoggingConfig};
use campus_access_register::types::config::CliArgs;
use campus_access_register::types::RegisterConfig;
use campus_access_register::RegisterConsole;
use clap::Parser;
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let json = RegisterConfig::default()
            .print_json()
            .context("Failed to serialize default configuration")?;
        println!("{}", json);
        return Ok(());
    }

    // Initialize logging based on CLI flags
    let _logging = LoggingConfig::from_cli_args(&args)
        .init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    info!("Starting Campus Access Register");

    let dry_run = args.dry_run;
    let config = RegisterConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    info!("Configuration loaded and validated successfully");

    if dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the register will not be started.");
        print_configuration_summary(&config);
        return Ok(());
    }

    print_startup_banner(&config);

    let session = CampusSession::from_config(&config).context("Failed to create session")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = RegisterConsole::new(session, stdin.lock(), stdout.lock());
    console.run().context("Console I/O failed")?;

    let (session, _) = console.into_parts();
    eprintln!();
    eprintln!("{}", session.statistics());

    info!("Campus Access Register finished");
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &RegisterConfig) {
    eprintln!("Campus Access Register");
    eprintln!("======================");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &RegisterConfig) {
    eprintln!("Configuration:");
    eprintln!("  Student Late After: {}", config.student_cutoff);
    eprintln!("  Staff Late After: {}", config.staff_cutoff);
    eprintln!("  Visitors From: {}", config.visitor_opening);
    eprintln!("  Max Invalid Attempts: {}", config.max_invalid_attempts);
    eprintln!("  Subjects per Student: {} - {}", config.min_marks, config.max_marks);
    eprintln!();
}
