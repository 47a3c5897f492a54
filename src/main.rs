use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use mars_rover::simulation::{CommandCenter, RoverOutcome, RoverSpec, Scenario};

#[derive(Parser)]
#[command(name = "mars_rover")]
#[command(about = "Drive rovers across a plateau from L/R/M instructions")]
struct Cli {
    /// Upper-right corner of the plateau
    #[arg(long, num_args = 2, value_names = ["MAX_X", "MAX_Y"], default_values_t = [5, 5], allow_negative_numbers = true)]
    plateau: Vec<i32>,

    /// A rover as "X Y HEADING COMMANDS", e.g. "1 2 N LMLMLMLMM" (repeatable)
    #[arg(long = "rover", value_name = "SPEC")]
    rovers: Vec<RoverSpec>,

    /// Generate this many random rovers instead of reading --rover
    #[arg(long, conflicts_with = "rovers")]
    random: Option<usize>,

    /// Instruction length for random rovers
    #[arg(long, default_value = "10")]
    commands_len: usize,

    /// Seed for reproducible random rovers
    #[arg(long)]
    seed: Option<u64>,

    /// Print an ASCII map of the plateau after the run
    #[arg(long)]
    map: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (max_x, max_y) = (cli.plateau[0], cli.plateau[1]);

    let scenario = if let Some(count) = cli.random {
        Scenario::random(max_x, max_y, count, cli.commands_len, cli.seed)?
    } else if cli.rovers.is_empty() {
        info!("No rovers given, running the demo rovers on a {}x{} plateau", max_x, max_y);
        Scenario {
            max_x,
            max_y,
            ..Scenario::demo()
        }
    } else {
        Scenario {
            max_x,
            max_y,
            rovers: cli.rovers,
        }
    };

    let mut center = CommandCenter::new();
    let outcomes = scenario.run(&mut center)?;

    for (spec, outcome) in scenario.rovers.iter().zip(&outcomes) {
        match outcome {
            RoverOutcome::Completed { report, .. } => println!("{}", report),
            RoverOutcome::Stopped { id, error } => {
                let report = center.rover(*id)?.report();
                println!("{} ! {}", report, error);
            }
            RoverOutcome::NotDeployed { error } => {
                println!("- ! {} {} {}: {}", spec.x, spec.y, spec.heading, error);
            }
        }
    }

    info!("=== Final State ===\n{}", center.summary());
    if let Some(capacity) = center.capacity_estimate() {
        info!("Plateau capacity: {} rovers", capacity);
    }

    if cli.map {
        let plateau = center
            .active_plateau()
            .context("No plateau was set up")?;
        println!("{}", center.draw_map(plateau)?);
    }

    Ok(())
}
