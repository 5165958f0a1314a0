#![deny(clippy::all)]

//! Plan paths through Pacman style maze layouts.
//!
//! Each problem name maps to a runner which builds the search problem
//! for a layout, resolves the requested heuristic and hands both to the
//! chosen [Strategy].

use clap::{value_t, App, Arg, ArgMatches};

use lazy_static::lazy_static;
use log::warn;
use thiserror::Error;

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};

use geometry::coord2d::{Layout, LayoutError, ParsePointError, Point};
use searcher::{SearchOptions, Strategy};

pub mod problems;

pub use problems::{HeuristicName, Report, StepCost};

type Error = anyhow::Error;
type Runner = Box<dyn (Fn(&Layout, &Config) -> Result<Report, Error>) + Send + Sync + 'static>;

lazy_static! {
    static ref PROBLEMS: HashMap<&'static str, Runner> = {
        let mut p: HashMap<&'static str, Runner> = HashMap::new();
        p.insert("position", Box::new(problems::position::run));
        p.insert("corners", Box::new(problems::corners::run));
        p.insert("food", Box::new(problems::food::run));
        p
    };
}

/// Names of every known problem, sorted.
pub fn problem_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = PROBLEMS.keys().cloned().collect();
    names.sort();
    names
}

/// Everything needed to run one search, collected from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Layout file name, `-` for standard input.
    pub layout: String,
    pub problem: String,
    pub strategy: Strategy,
    pub heuristic: HeuristicName,
    pub goal: Option<Point>,
    pub cost: StepCost,
    pub options: SearchOptions,
}

impl Config {
    pub fn new(layout: &str, problem: &str) -> Result<Self, PacsearchError> {
        if !PROBLEMS.contains_key(problem) {
            return Err(PacsearchError::UnknownProblem(problem.to_string()));
        }

        Ok(Self {
            layout: layout.to_string(),
            problem: problem.to_string(),
            strategy: Strategy::BreadthFirst,
            heuristic: HeuristicName::Null,
            goal: None,
            cost: StepCost::Uniform,
            options: SearchOptions::default(),
        })
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let mut config = Config::new(
            matches.value_of("layout").unwrap_or("-"),
            matches.value_of("problem").unwrap_or("position"),
        )?;

        config.strategy = matches.value_of("strategy").unwrap_or("bfs").parse()?;
        config.heuristic = matches.value_of("heuristic").unwrap_or("null").parse()?;
        config.cost = matches.value_of("cost").unwrap_or("uniform").parse()?;

        if let Some(goal) = matches.value_of("goal") {
            config.goal = Some(goal.parse::<Point>().map_err(PacsearchError::from)?);
        }

        if matches.is_present("limit") {
            config.options = config
                .options
                .with_limit(value_t!(matches, "limit", usize)?);
        }

        Ok(config)
    }
}

/// The command line interface.
pub fn app() -> App<'static, 'static> {
    App::new("pacsearch")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Search for paths through maze layouts")
        .arg(
            Arg::with_name("layout")
                .value_name("LAYOUT")
                .help("Layout file, or '-' to read standard input")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("problem")
                .short("p")
                .long("problem")
                .value_name("NAME")
                .help("Search problem: position, corners or food")
                .env("PACSEARCH_PROBLEM")
                .default_value("position")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .short("s")
                .long("strategy")
                .value_name("NAME")
                .help("Search strategy: dfs, bfs, ucs or astar")
                .env("PACSEARCH_STRATEGY")
                .default_value("bfs")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("H")
                .long("heuristic")
                .value_name("NAME")
                .help("Heuristic for astar: null, manhattan, euclidean, corners or food")
                .default_value("null")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .value_name("X,Y")
                .help("Goal square for the position problem")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("cost")
                .short("c")
                .long("cost")
                .value_name("NAME")
                .help("Step cost for the position problem: uniform, east or west")
                .default_value("uniform")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .short("l")
                .long("limit")
                .value_name("N")
                .help("Give up after expanding N states")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more detail, repeat for even more"),
        )
}

type BoxedRead = Box<dyn Read + 'static>;

/// Read and parse a layout from a file, or from standard input for `-`.
pub fn read_layout(filename: &str) -> Result<Layout, Error> {
    let mut reader: BoxedRead = match filename {
        "-" => Box::new(io::stdin()),
        path => {
            let f = File::open(path)
                .map_err(|e| PacsearchError::InputNotFound(path.to_string(), e))?;
            Box::new(f)
        }
    };

    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let layout = text.parse::<Layout>().map_err(PacsearchError::from)?;
    Ok(layout)
}

/// Run the configured search on a layout.
pub fn run(config: &Config, layout: &Layout) -> Result<Report, Error> {
    let runner = PROBLEMS
        .get(config.problem.as_str())
        .ok_or_else(|| PacsearchError::UnknownProblem(config.problem.clone()))?;

    if !config.strategy.is_informed() && config.heuristic != HeuristicName::Null {
        warn!(
            "The {} heuristic is ignored by {}",
            config.heuristic, config.strategy
        );
    }
    if config.problem != "position" {
        if config.goal.is_some() {
            warn!("A goal is ignored by the {} problem", config.problem);
        }
        if config.cost != StepCost::Uniform {
            warn!("Step costs are ignored by the {} problem", config.problem);
        }
    }

    runner(layout, config)
}

#[derive(Debug, Error)]
pub enum PacsearchError {
    #[error("Unknown problem: {0}")]
    UnknownProblem(String),

    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("Unknown step cost: {0}")]
    UnknownCost(String),

    #[error("The {heuristic} heuristic does not apply to the {problem} problem")]
    HeuristicNotApplicable {
        heuristic: HeuristicName,
        problem: &'static str,
    },

    #[error("Layout has {0} food dots, choose a goal with --goal")]
    AmbiguousGoal(usize),

    #[error("Goal {0} is not an open square")]
    InvalidGoal(Point),

    #[error("Invalid goal")]
    InvalidPoint(#[from] ParsePointError),

    #[error("Invalid layout")]
    InvalidLayout(#[from] LayoutError),

    #[error("Input not found: {0}")]
    InputNotFound(String, #[source] io::Error),
}
