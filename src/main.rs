//! Main CLI application for the colony simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, Settings},
    game_of_life::create_example_boards,
    run_simulation,
    utils::{BoardFormatter, ColorOutput},
    ExitReason,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Game of Life colony simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the colony animation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Board file to seed from (overrides config)
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Seed a random colony (overrides config)
        #[arg(short, long)]
        random: bool,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Age at which cells stop getting older (overrides config)
        #[arg(short, long)]
        max_age: Option<u8>,

        /// Skip the welcome banner
        #[arg(long)]
        no_welcome: bool,

        /// Print settings before and the final colony after the run
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and board files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            board,
            random,
            interval_ms,
            max_age,
            no_welcome,
            verbose,
        } => {
            let overrides = CliOverrides {
                board_file: board,
                random,
                tick_interval_ms: interval_ms,
                max_age,
            };
            run_command(config, overrides, no_welcome, verbose)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    no_welcome: bool,
    verbose: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Max age: {}", settings.simulation.max_age);
        println!("  Tick interval: {} ms", settings.simulation.tick_interval_ms);
        match &settings.input.board_file {
            Some(path) => println!("  Board file: {}", path.display()),
            None => println!("  Seed: random colony"),
        }
        println!();
    }

    if !no_welcome {
        welcome()?;
    }

    let outcome = run_simulation(settings)?;

    println!();
    match outcome.reason {
        ExitReason::Stable => {
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Colony has been stable since generation {}.",
                    outcome.generations
                ))
            );
        }
        ExitReason::Cancelled => {
            println!(
                "{}",
                ColorOutput::info(&format!(
                    "Simulation cancelled after {} generations.",
                    outcome.generations
                ))
            );
        }
    }

    if verbose {
        println!("\nFinal colony (cell ages):");
        print!("{}", BoardFormatter::format_ages(&outcome.final_board));
    }

    Ok(())
}

/// Introduce the user to the simulation and its rules.
fn welcome() -> Result<()> {
    println!("Welcome to the Game of Life, a simulation of the lifecycle of a bacteria colony.");
    println!("Cells live and die by the following rules:");
    println!();
    println!("\tA cell with 1 or fewer neighbors dies of loneliness");
    println!("\tLocations with 2 neighbors remain stable");
    println!("\tLocations with 3 neighbors will spontaneously create life");
    println!("\tLocations with 4 or more neighbors die of overcrowding");
    println!();
    println!("In the animation, new cells are dark and fade to gray as they age.");
    println!("Click anywhere (or press q) to stop the animation.");
    println!();
    prompt_enter("Hit [enter] to continue....   ")
}

fn prompt_enter(prompt: &str) -> Result<()> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let boards_dir = directory.join("boards");
    create_example_boards(&boards_dir).context("Failed to create example boards")?;
    println!("Created example boards in: {}", boards_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Run a random colony: cargo run -- run --random");
    println!("2. Or seed from a board: cargo run -- run --board boards/bar.txt");

    Ok(())
}
