use clap::Parser;
use gridplan::search::{
    environment::{FrozenLake, GridDescription},
    validate, Endpoint, Plan, Scenario, Task,
};
use std::{error::Error, path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[command(version)]
/// Replay a plan on a frozen lake and check that it reaches the goal.
struct Cli {
    #[arg(help = "The map file")]
    map: PathBuf,
    #[arg(help = "The plan file to validate")]
    plan: PathBuf,
    #[arg(help = "The start cell [default: the S cell]", long = "start", id = "START")]
    start: Option<Endpoint>,
    #[arg(help = "The goal cell [default: the G cell]", long = "goal", id = "GOAL")]
    goal: Option<Endpoint>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("invalid plan: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let env = FrozenLake::new(GridDescription::from_path(&cli.map)?);
    let task = Task::resolve(
        &env,
        cli.start.unwrap_or_default(),
        cli.goal.unwrap_or_default(),
    )?;
    let plan = Plan::from_path(&cli.plan)?;
    validate(&plan, &task)?;

    println!("Plan is valid");
    println!("Plan length: {}", plan.len());
    for scenario in [Scenario::Uniform, Scenario::Anisotropic] {
        println!("Plan cost (scenario {}): {}", scenario, plan.cost(scenario));
    }
    Ok(())
}
