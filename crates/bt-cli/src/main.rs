//! bt CLI - behavior tree runner.
//!
//! - `bt run` - build the demo tree and run it to completion or budget
//! - `bt` (no args) - print usage

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use bt::{Action, Condition, Negation, Sequence, TickStatus, TreeConfig, TreeManager};

#[derive(Parser)]
#[command(name = "bt")]
#[command(about = "Behavior tree runner", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo tree
    Run {
        /// Tree config file (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured tick budget
        #[arg(long)]
        max_ticks: Option<u32>,

        /// Steps needed to arrive
        #[arg(long, default_value_t = 5)]
        goal: u32,

        /// Steps the walker can take before it is drained
        #[arg(long, default_value_t = 10)]
        energy: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Some(Commands::Run {
            config,
            max_ticks,
            goal,
            energy,
        }) => run_demo(config, max_ticks, goal, energy),
        None => {
            println!("bt - Behavior Tree Runner");
            println!();
            println!("Usage: bt <COMMAND>");
            println!();
            println!("Commands:");
            println!("  run       Run the demo tree");
            println!();
            println!("Run 'bt --help' for more information.");
            Ok(())
        }
    }
}

fn run_demo(
    config_path: Option<PathBuf>,
    max_ticks: Option<u32>,
    goal: u32,
    energy: u32,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => TreeConfig::load(path)?,
        None => TreeConfig::default(),
    };
    if let Some(max_ticks) = max_ticks {
        config.max_ticks = max_ticks;
    }
    tracing::info!(max_ticks = config.max_ticks, goal, energy, "Starting demo tree");

    let mut tree = TreeManager::with_config(config);
    build_walker(&mut tree, goal, energy)?;

    let status = tree.run_configured()?;
    let position = tree.blackboard().get_as::<u32>("position")?;

    println!("Result: {status}");
    if let Some(summary) = tree.last_run() {
        println!("Ticks: {}", summary.ticks);
        if summary.budget_exhausted {
            println!("Tick budget exhausted");
        }
    }
    println!("Position: {position}/{goal}");

    if status != TickStatus::Success {
        std::process::exit(1);
    }
    Ok(())
}

/// Walks one step per activation until `position` reaches `goal`, as long as
/// there is energy left.
fn build_walker(tree: &mut TreeManager, goal: u32, energy: u32) -> Result<()> {
    let bb = tree.blackboard_mut();
    bb.set("position", 0u32);
    bb.set("energy", energy);
    bb.set("goal", goal);

    let drained = tree.make_node(Condition::new("drained", |bb| {
        bb.get_as::<u32>("energy").map_or(true, |energy| energy == 0)
    }))?;
    let has_energy = tree.make_node(Negation::new("has_energy", drained))?;
    let step = tree.make_node(Action::new("step", |bb| {
        let (Ok(position), Ok(energy)) = (bb.get_as::<u32>("position"), bb.get_as::<u32>("energy"))
        else {
            return TickStatus::Failure;
        };
        bb.set("position", position + 1);
        bb.set("energy", energy.saturating_sub(1));
        tracing::debug!(position = position + 1, "step");
        TickStatus::Success
    }))?;
    let arrived = tree.make_node(Condition::new("arrived", |bb| {
        matches!(
            (bb.get_as::<u32>("position"), bb.get_as::<u32>("goal")),
            (Ok(position), Ok(goal)) if position >= goal
        )
    }))?;
    tree.make_node(Sequence::new("walk", vec![has_energy, step, arrived]))?;
    Ok(())
}
