//! Floor Planner CLI
//!
//! Usage:
//!   floor-planner synth --title <T> --width <W> --length <L> [--storeys <N>]
//!   floor-planner layout [OPTIONS] [FILE]
//!   floor-planner plan --title <T> --width <W> --length <L> [--storeys <N>]
//!
//! Set RUST_LOG=debug to see packing details on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use log::debug;

use floor_planner::program::ProgramError;
use floor_planner::{
    generate_plan, plan_with_lint, synthesize, to_json, LayoutConfig, PlanError, PlanOptions,
};

#[derive(Parser)]
#[command(name = "floor-planner")]
#[command(about = "Room program synthesis and floor-plan layout")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize a room program from lot dimensions
    Synth(LotArgs),

    /// Lay out a room program (JSON) into a floor plan (JSON)
    Layout {
        /// Program file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Layout configuration file (TOML format)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Reject programs that violate their preconditions
        #[arg(long)]
        validate: bool,

        /// Report geometric defects of the plan on stderr
        #[arg(short, long)]
        lint: bool,
    },

    /// Synthesize a program and lay it out in one step
    Plan(LotArgs),
}

#[derive(Args)]
struct LotArgs {
    /// Project title
    #[arg(short, long, default_value = "Untitled")]
    title: String,

    /// Lot width in meters
    #[arg(short, long)]
    width: f64,

    /// Lot length in meters
    #[arg(short = 'L', long)]
    length: f64,

    /// Number of storeys
    #[arg(short, long, default_value_t = 1)]
    storeys: u32,
}

impl LotArgs {
    /// The synthesizer assumes positive dimensions; check them here
    fn check(&self) -> Result<(), ProgramError> {
        if !(self.width > 0.0 && self.length > 0.0) {
            return Err(ProgramError::InvalidLot {
                width: self.width,
                length: self.length,
            });
        }
        if self.storeys == 0 {
            return Err(ProgramError::NoStoreys);
        }
        Ok(())
    }
}

fn main() {
    // Initialize logger - defaults to RUST_LOG if set, otherwise WARN
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Synth(lot) => lot
            .check()
            .map_err(PlanError::from)
            .and_then(|_| to_json(&synthesize(&lot.title, lot.width, lot.length, lot.storeys))),
        Command::Plan(lot) => lot
            .check()
            .map_err(PlanError::from)
            .and_then(|_| to_json(&generate_plan(&lot.title, lot.width, lot.length, lot.storeys))),
        Command::Layout {
            input,
            config,
            validate,
            lint,
        } => run_layout(input, config, validate, lint),
    };

    match result {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_layout(
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    validate: bool,
    lint: bool,
) -> Result<String, PlanError> {
    let layout = match &config {
        Some(path) => {
            debug!("loading layout config from {}", path.display());
            LayoutConfig::from_file(path)?
        }
        None => LayoutConfig::default(),
    };

    let (source, filename) = match &input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                process::exit(1);
            }
            (buffer, "<stdin>".to_string())
        }
    };

    let options = PlanOptions::new()
        .with_layout(layout)
        .with_validate(validate)
        .with_lint(lint);

    match plan_with_lint(&source, &options) {
        Ok((plan, warnings)) => {
            for warning in &warnings {
                eprintln!("warning: {}", warning);
            }
            to_json(&plan)
        }
        Err(PlanError::Program(e)) => {
            eprintln!("{}", e.format(&source, &filename));
            process::exit(1);
        }
        Err(e) => Err(e),
    }
}
