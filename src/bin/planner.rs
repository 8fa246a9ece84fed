use clap::Parser;
use gridplan::{
    config::{MapSource, PlannerConfig},
    search::{
        validate, Endpoint, HeuristicName, Scenario, SearchEngineName, SearchOptions,
        SearchReport, SearchResult, Task, Verbosity,
    },
};
use std::{error::Error, path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Search a frozen lake for a path from the start to the goal.
///
/// Values given on the command line override those of the config file.
struct Cli {
    #[arg(help = "The map file, one row of S/F/H/G cells per line")]
    map: Option<PathBuf>,
    #[arg(help = "The TOML config file", short = 'c', long = "config", id = "CONFIG")]
    config: Option<PathBuf>,
    #[arg(help = "The output plan file", short = 'o', long = "output", id = "OUTPUT")]
    plan: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The search engine to use [default: random]",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    search_engine_name: Option<SearchEngineName>,
    #[arg(
        help = "The cost scenario: 1 for uniform costs, 2 for vertical moves \
        costing ten times as much as horizontal ones [default: 1]",
        short = 's',
        long = "scenario",
        id = "SCENARIO",
        value_parser = parse_scenario
    )]
    scenario: Option<Scenario>,
    #[arg(
        value_enum,
        help = "The heuristic used by A* [default: manhattan]",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<HeuristicName>,
    #[arg(
        help = "The depth limit of depth-limited search [default: 1000]",
        short = 'l',
        long = "limit",
        id = "LIMIT"
    )]
    limit: Option<usize>,
    #[arg(
        help = "The step cap of the random walk [default: 10000]",
        long = "max-steps",
        id = "MAX_STEPS"
    )]
    max_steps: Option<usize>,
    #[arg(
        help = "The seed of the random walk and of random maps",
        long = "seed",
        id = "SEED"
    )]
    seed: Option<u64>,
    #[arg(
        help = "The start cell, as a state id or \"row,col\" [default: the S cell]",
        long = "start",
        id = "START"
    )]
    start: Option<Endpoint>,
    #[arg(
        help = "The goal cell, as a state id or \"row,col\" [default: the G cell]",
        long = "goal",
        id = "GOAL"
    )]
    goal: Option<Endpoint>,
    #[arg(help = "Print the report as JSON", long = "json")]
    json: bool,
    #[arg(
        value_enum,
        help = "The verbosity level [default: normal]",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY"
    )]
    verbosity: Option<Verbosity>,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

fn parse_scenario(text: &str) -> Result<Scenario, String> {
    let value: u8 = text.parse().map_err(|e| format!("{e}"))?;
    Scenario::try_from(value).map_err(|e| e.to_string())
}

const DEFAULT_LIMIT: usize = 1000;

impl Cli {
    fn into_config(self) -> Result<(PlannerConfig, Option<PathBuf>, bool), Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_path(path)?,
            None => PlannerConfig {
                search: SearchOptions {
                    limit: DEFAULT_LIMIT,
                    ..Default::default()
                },
                ..Default::default()
            },
        };

        if let Some(path) = self.map {
            config.map = MapSource::File { path };
        }
        if let Some(seed) = self.seed {
            config.search.seed = Some(seed);
            if let MapSource::Random { seed: map_seed, .. } = &mut config.map {
                map_seed.get_or_insert(seed);
            }
        }
        if let Some(engine) = self.search_engine_name {
            config.engine = engine;
        }
        if let Some(scenario) = self.scenario {
            config.search.scenario = scenario;
        }
        if let Some(heuristic) = self.heuristic_name {
            config.search.heuristic = heuristic;
        }
        if let Some(limit) = self.limit {
            config.search.limit = limit;
        }
        if let Some(max_steps) = self.max_steps {
            config.search.max_steps = max_steps;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(goal) = self.goal {
            config.goal = goal;
        }
        if let Some(verbosity) = self.verbosity {
            config.verbosity = verbosity;
        }
        Ok((config, self.plan, self.json))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let colour = cli.colour;
    let (config, plan_path, json) = match cli.into_config() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let level: tracing::Level = config.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match plan(&config, plan_path, json) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether a plan was found.
fn plan(
    config: &PlannerConfig,
    plan_path: Option<PathBuf>,
    json: bool,
) -> Result<bool, Box<dyn Error>> {
    let env = config.environment()?;
    info!(map = %format!("\n{}", env.description()));

    let (result, statistics) = config
        .engine
        .search(&env, config.start, config.goal, &config.search)?;
    let report = SearchReport::new(config.engine, config.search.scenario, &result, &statistics);

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
        println!(
            "Search time: {}",
            humantime::format_duration(statistics.search_duration())
        );
    }

    match result {
        SearchResult::Success(plan) => {
            info!("validating plan");
            let task = Task::resolve(&env, config.start, config.goal)?;
            validate(&plan, &task)?;
            info!("plan is valid");
            info!(plan_length = plan.len());

            if !json {
                println!("Plan found:");
                println!("{}", plan);
            }
            if let Some(path) = plan_path {
                std::fs::write(&path, format!("{}\n", plan))?;
                info!(path = %path.display(), "plan written");
            }
            Ok(true)
        }
        result => {
            info!("no plan found");
            if !json {
                println!("No plan found: {:?}", result);
            }
            Ok(false)
        }
    }
}
