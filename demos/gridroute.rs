//! Build a solvable obstacle grid, search it, and print the result.
//!
//! Run: cargo run --bin gridroute -- --seed 42 --obstacles 10

use std::io::Write;

use clap::Parser;
use gridroute_core::{MAX_SIZE, Point};
use gridroute_gen::{PlannerConfig, plan};
use gridroute_demos::{parse_point, render, summary};

/// Shortest obstacle-avoiding route on a random square grid.
#[derive(Parser, Debug)]
#[command(name = "gridroute", version, about)]
struct CliArgs {
    /// Side length of the square grid.
    #[arg(
        long,
        default_value_t = 7,
        value_parser = clap::value_parser!(i32).range(1..=MAX_SIZE as i64)
    )]
    size: i32,
    /// Number of random obstacles.
    #[arg(long, default_value_t = 10)]
    obstacles: usize,
    /// Start cell as X,Y. Defaults to the top-left corner.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    start: Option<Point>,
    /// Goal cell as X,Y. Defaults to the bottom-right corner.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    goal: Option<Point>,
    /// Seed for obstacle placement.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Maximum generate-and-check attempts before giving up.
    #[arg(long = "max-attempts", default_value_t = 1000)]
    max_attempts: usize,
    /// Print the plan as JSON instead of a text grid.
    #[arg(long)]
    json: bool,
}

impl CliArgs {
    fn into_config(self) -> PlannerConfig {
        let corner = self.size - 1;
        PlannerConfig {
            size: self.size,
            obstacles: self.obstacles,
            start: self.start.unwrap_or(Point::ZERO),
            goal: self.goal.unwrap_or(Point::new(corner, corner)),
            seed: self.seed,
            max_attempts: self.max_attempts,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = CliArgs::parse();
    let json = args.json;
    let config = args.into_config();
    log::info!(
        "size {} obstacles {} start {} goal {} seed {}",
        config.size,
        config.obstacles,
        config.start,
        config.goal,
        config.seed
    );

    let plan = match plan(&config) {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("{e}");
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render(&plan.grid, &plan.outcome));
        println!("{}", summary(&plan.outcome));
    }
    Ok(())
}
