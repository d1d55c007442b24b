//! CLI frontend for the ALEA resolution engine.

mod commands;

use std::path::PathBuf;
use std::process;

use alea_mechanics::{AleaEngine, EngineConfig, StatusInputs, ThresholdInputs};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::{Context, Format};

#[derive(Parser)]
#[command(
    name = "alea",
    about = "ALEA dice checks with degrees of success",
    version,
    propagate_version = true
)]
struct Cli {
    /// Threshold table file (CSV or JSON); the standard table if omitted
    #[arg(long, global = true, env = "ALEA_TABLE")]
    table: Option<PathBuf>,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true, env = "ALEA_SEED")]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll an ALEA check (d100 with open rolls)
    Roll {
        /// Threshold value (TV); leave at 0 to derive it or skip classification
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        tv: i64,

        /// Level of difficulty (LD): -60..60 in steps of 20, -3..3, or a name like "hard"
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        ld: String,

        /// Base characteristic, used when no TV is given
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        characteristic: i64,

        /// Skill value, used when no TV is given
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        skill: i64,

        /// Specialization: 0 none, 1 specialized (+20), 2 master (+30)
        #[arg(long, default_value_t = 0)]
        specialization: u8,

        /// Wound level
        #[arg(long, default_value_t = 0)]
        wounds: u8,

        /// Fatigue level
        #[arg(long, default_value_t = 0)]
        fatigue: u8,

        /// Stun level
        #[arg(long, default_value_t = 0)]
        stun: u8,

        /// Lucky number: a first roll equal to it is a critical success
        #[arg(long)]
        lucky: Option<u32>,

        /// Show every success level and where the roll landed
        #[arg(short = 'l', long)]
        verbose_levels: bool,
    },

    /// Roll an ALEA99 check (two lowest of several d10)
    Roll99 {
        /// Number of d10 to roll (2-5)
        #[arg(short, long)]
        dice: u32,

        /// Threshold value (0-99)
        #[arg(long)]
        tv: i64,

        /// Level of difficulty, added to the threshold
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        ld: String,
    },

    /// Classify a final roll against a threshold without rolling
    Classify {
        /// The final roll
        #[arg(allow_negative_numbers = true)]
        final_roll: i64,

        /// The threshold value
        threshold: i64,
    },

    /// List the success levels of the loaded table
    Levels,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "alea=debug,alea_mechanics=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("ALEA_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_context(cli: &Cli) -> Result<Context, String> {
    let mut config = EngineConfig::default();
    if let Some(path) = &cli.table {
        config = config.with_table_path(path);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let engine = AleaEngine::from_config(&config).map_err(|e| e.to_string())?;
    debug!(levels = engine.table().len(), seed = ?config.seed, "engine ready");
    Ok(Context {
        engine,
        rng: config.rng(),
        format: if cli.json { Format::Json } else { Format::Text },
    })
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = build_context(&cli).and_then(|mut ctx| match cli.command {
        Commands::Roll {
            tv,
            ld,
            characteristic,
            skill,
            specialization,
            wounds,
            fatigue,
            stun,
            lucky,
            verbose_levels,
        } => {
            let threshold = ThresholdInputs {
                threshold: tv,
                characteristic,
                skill,
                specialization,
            };
            let status = StatusInputs {
                wounds,
                fatigue,
                stun,
            };
            commands::roll::run(&mut ctx, threshold, &ld, status, lucky, verbose_levels)
        }
        Commands::Roll99 { dice, tv, ld } => commands::roll99::run(&mut ctx, dice, tv, &ld),
        Commands::Classify {
            final_roll,
            threshold,
        } => commands::classify::run(&ctx, final_roll, threshold),
        Commands::Levels => commands::levels::run(&ctx),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
