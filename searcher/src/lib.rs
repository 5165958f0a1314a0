//! Generalized graph search algorithms over abstract search problems.
//!
//! To use these search algorithms, implement the trait [SearchProblem],
//! which describes a start state, a goal test, the successors of a state
//! and the cost of a sequence of actions. Then hand the problem to one of
//! [depth_first_search], [breadth_first_search], [uniform_cost_search] or
//! [astar_search], each of which returns the actions leading from the
//! start state to a goal, or an empty path when there is none.
//!
//! For step limits and search statistics, pick a [Strategy] and call
//! [Strategy::solve], or build a searcher from the modules in [algorithm].

pub mod algorithm;
mod errors;
pub mod graph;
mod strategy;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::null_heuristic;
pub use traits::Cost;
pub use traits::Heuristic;
pub use traits::NullHeuristic;
pub use traits::SearchProblem;
pub use traits::Successor;

pub use algorithm::astar::astar_search;
pub use algorithm::basic::breadth_first_search;
pub use algorithm::basic::depth_first_search;
pub use algorithm::ucs::uniform_cost_search;
pub use algorithm::{SearchOptions, SearchStats, Solution};

pub use algorithm::astar::astar_search as astar;
pub use algorithm::basic::breadth_first_search as bfs;
pub use algorithm::basic::depth_first_search as dfs;
pub use algorithm::ucs::uniform_cost_search as ucs;
