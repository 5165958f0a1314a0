//! Find a path to one particular square.

use std::str::FromStr;

use anyhow::Error;
use log::{info, warn};

use geometry::coord2d::{Direction, Layout, Map, Point};
use searcher::algorithm::basic::bfs;
use searcher::{Heuristic, NullHeuristic, SearchProblem, Successor};

use super::{walk, HeuristicName, Report};
use crate::{Config, PacsearchError};

/// The cost of stepping onto a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCost {
    /// Every step costs one.
    Uniform,

    /// Squares to the west are expensive: `0.5^x`.
    StayEast,

    /// Squares to the east are expensive: `2^x`.
    StayWest,
}

impl StepCost {
    pub fn cost(self, square: Point) -> f64 {
        match self {
            StepCost::Uniform => 1.0,
            StepCost::StayEast => 0.5_f64.powi(square.x),
            StepCost::StayWest => 2.0_f64.powi(square.x),
        }
    }
}

impl Default for StepCost {
    fn default() -> Self {
        StepCost::Uniform
    }
}

impl FromStr for StepCost {
    type Err = PacsearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(StepCost::Uniform),
            "east" | "stayeast" => Ok(StepCost::StayEast),
            "west" | "staywest" => Ok(StepCost::StayWest),
            _ => Err(PacsearchError::UnknownCost(s.to_string())),
        }
    }
}

/// Walk from the start square to a single goal square.
#[derive(Debug, Clone)]
pub struct PositionSearchProblem<'l> {
    layout: &'l Layout,
    start: Point,
    goal: Point,
    step_cost: StepCost,
}

impl<'l> PositionSearchProblem<'l> {
    /// The goal is the only food dot in the layout.
    pub fn new(layout: &'l Layout) -> Result<Self, PacsearchError> {
        let mut food = layout.food().iter();
        match (food.next(), food.next()) {
            (Some(goal), None) => Self::with_goal(layout, *goal),
            _ => Err(PacsearchError::AmbiguousGoal(layout.food().len())),
        }
    }

    pub fn with_goal(layout: &'l Layout, goal: Point) -> Result<Self, PacsearchError> {
        if layout.is_wall(goal) {
            return Err(PacsearchError::InvalidGoal(goal));
        }

        Ok(Self {
            layout,
            start: layout.start(),
            goal,
            step_cost: StepCost::default(),
        })
    }

    /// Start somewhere other than the layout's start square.
    pub fn starting_at(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    pub fn with_step_cost(mut self, step_cost: StepCost) -> Self {
        self.step_cost = step_cost;
        self
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn layout(&self) -> &'l Layout {
        self.layout
    }
}

impl<'l> SearchProblem for PositionSearchProblem<'l> {
    type State = Point;
    type Action = Direction;
    type Cost = f64;

    fn start_state(&self) -> Self::State {
        self.start
    }

    fn is_goal_state(&self, state: &Self::State) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<Point, Direction, f64>> {
        self.layout
            .legal_moves(*state)
            .into_iter()
            .map(|(next, direction)| Successor::new(next, direction, self.step_cost.cost(next)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost {
        match walk(self.layout, self.start, actions) {
            Some(path) => path.into_iter().map(|p| self.step_cost.cost(p)).sum(),
            None => std::f64::MAX,
        }
    }
}

/// Manhattan distance from the state to the goal.
pub fn manhattan_heuristic(state: &Point, problem: &PositionSearchProblem<'_>) -> f64 {
    f64::from(state.manhattan_distance(problem.goal()))
}

/// Straight line distance from the state to the goal.
pub fn euclidean_heuristic(state: &Point, problem: &PositionSearchProblem<'_>) -> f64 {
    state.euclidean_distance(problem.goal())
}

/// Number of steps between two squares of a layout, found with a
/// breadth first search. `None` if either square is a wall or there
/// is no way through.
pub fn maze_distance(layout: &Layout, origin: Point, destination: Point) -> Option<u32> {
    if layout.is_wall(origin) {
        return None;
    }

    let problem = PositionSearchProblem::with_goal(layout, destination)
        .ok()?
        .starting_at(origin);

    bfs::build(&problem)
        .run()
        .ok()
        .map(|solution| solution.actions.len() as u32)
}

pub(crate) fn run(layout: &Layout, config: &Config) -> Result<Report, Error> {
    let problem = match config.goal {
        Some(goal) => PositionSearchProblem::with_goal(layout, goal)?,
        None => PositionSearchProblem::new(layout)?,
    }
    .with_step_cost(config.cost);

    if !layout.food().contains(&problem.goal()) {
        warn!("Goal {} does not hold any food", problem.goal());
    }
    info!(
        "Searching for a path from {} to {}",
        problem.start_state(),
        problem.goal()
    );

    let heuristic: Box<dyn Heuristic<PositionSearchProblem>> = match config.heuristic {
        HeuristicName::Null => Box::new(NullHeuristic),
        HeuristicName::Manhattan => Box::new(manhattan_heuristic),
        HeuristicName::Euclidean => Box::new(euclidean_heuristic),
        other => {
            return Err(PacsearchError::HeuristicNotApplicable {
                heuristic: other,
                problem: "position",
            }
            .into())
        }
    };

    let solution = config
        .strategy
        .solve(&problem, heuristic.as_ref(), &config.options)?;
    Ok(Report::new(&problem, &solution))
}
