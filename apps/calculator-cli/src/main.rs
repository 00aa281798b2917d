//! Calculator CLI
//!
//! Thin host around the `calculator` module: loads layered configuration,
//! initializes logging and evaluates one operation per invocation.
//!
//! # Usage
//!
//! ```bash
//! calc add 2 3
//! calc div -9 3
//! calc --json eval 8 / 2
//! calc --config calc.yaml check
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod logging;
mod output;


use std::path::PathBuf;

use anyhow::{Result, bail};
use calculator::{CalculatorApi, Operation};
use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;

/// Four-function calculator
#[derive(Parser)]
#[command(name = "calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON (overrides config)
    #[arg(long, global = true)]
    json: bool,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add B to A
    Add(Operands),
    /// Subtract B from A
    #[command(alias = "sub")]
    Subtract(Operands),
    /// Multiply A by B
    #[command(alias = "mul")]
    Multiply(Operands),
    /// Divide A by B; fails when B is zero
    #[command(alias = "div")]
    Divide(Operands),
    /// Evaluate `A OP B`, where OP is a name or one of + - * /
    Eval {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_hyphen_values = true)]
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    /// Validate configuration and exit
    Check,
}

#[derive(Args)]
struct Operands {
    #[arg(allow_negative_numbers = true)]
    a: f64,
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.json);

    logging::init_logging(&config.logging, cli.verbose);
    tracing::debug!(config = ?cli.config, "configuration loaded");

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let Some(command) = cli.command else {
        bail!("no command given; run `calc --help` for usage");
    };

    let (op, a, b) = match command {
        Commands::Add(Operands { a, b }) => (Operation::Add, a, b),
        Commands::Subtract(Operands { a, b }) => (Operation::Subtract, a, b),
        Commands::Multiply(Operands { a, b }) => (Operation::Multiply, a, b),
        Commands::Divide(Operands { a, b }) => (Operation::Divide, a, b),
        Commands::Eval { a, op, b } => (op, a, b),
        Commands::Check => return check_config(&config),
    };

    run(&*calculator::local_client(), &config, op, a, b)
}

fn run(client: &dyn CalculatorApi, config: &AppConfig, op: Operation, a: f64, b: f64) -> Result<()> {
    let calc = client.calculate(op, a, b)?;
    tracing::info!(operation = %op, a, b, result = calc.result, "calculation complete");
    println!("{}", output::render(&calc, &config.output)?);
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_json()?);
    Ok(())
}
