//! Choosing a search algorithm at runtime.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::algorithm::{astar, basic, ucs, SearchOptions, Solution};
use crate::errors::Result;
use crate::traits::{Heuristic, SearchProblem};

/// The four graph search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

const STRATEGIES: [Strategy; 4] = [
    Strategy::DepthFirst,
    Strategy::BreadthFirst,
    Strategy::UniformCost,
    Strategy::AStar,
];

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        STRATEGIES.iter().cloned()
    }

    /// The abbreviated name, as accepted by [FromStr].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::AStar => "astar",
        }
    }

    /// Does this strategy make any use of a heuristic?
    pub fn is_informed(self) -> bool {
        self == Strategy::AStar
    }

    /// Run this strategy on a problem.
    ///
    /// The heuristic is only consulted by [Strategy::AStar].
    pub fn solve<P, H>(
        self,
        problem: &P,
        heuristic: &H,
        options: &SearchOptions,
    ) -> Result<Solution<P::Action>>
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        match self {
            Strategy::DepthFirst => basic::dfs::build(problem).with_options(options).run(),
            Strategy::BreadthFirst => basic::bfs::build(problem).with_options(options).run(),
            Strategy::UniformCost => ucs::build(problem).with_options(options).run(),
            Strategy::AStar => astar::build(problem, heuristic)
                .with_options(options)
                .run(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error when parsing a strategy name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown search strategy: {0}")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "dfs" | "depthfirst" | "depthfirstsearch" => Ok(Strategy::DepthFirst),
            "bfs" | "breadthfirst" | "breadthfirstsearch" => Ok(Strategy::BreadthFirst),
            "ucs" | "uniformcost" | "uniformcostsearch" | "dijkstra" => {
                Ok(Strategy::UniformCost)
            }
            "astar" | "astarsearch" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
