//! Uniform cost search, Dijkstra's algorithm on an implicit graph.

use num_traits::Zero;

use super::priority::PriorityQueue;
use super::{Node, Prioritizer, SearchAlgorithm};
use crate::traits::SearchProblem;

/// Ranks nodes by the total cost of the actions which reach them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCost;

impl<P> Prioritizer<P> for PathCost
where
    P: SearchProblem,
{
    type Value = P::Cost;

    fn origin(&self) -> Self::Value {
        P::Cost::zero()
    }

    fn priority(&mut self, problem: &P, _state: &P::State, actions: &[P::Action]) -> Self::Value {
        problem.cost_of_actions(actions)
    }
}

/// A priority queue to always search the next cheapest path.
pub type UniformCostQueue<P> = PriorityQueue<
    Node<<P as SearchProblem>::State, <P as SearchProblem>::Action>,
    <P as SearchProblem>::Cost,
>;

/// Search algorithm which expands the cheapest known path first.
pub type UniformCostSearcher<'p, P> = SearchAlgorithm<'p, P, UniformCostQueue<P>, PathCost>;

/// Build a uniform cost searcher.
pub fn build<P>(problem: &P) -> UniformCostSearcher<'_, P>
where
    P: SearchProblem,
{
    SearchAlgorithm::new(problem, PathCost)
}

/// Search the node of least total cost first.
///
/// Uniform cost search behaves like a breadth first search, but always
/// expands the cheapest path even when steps have varying costs. With
/// non-negative step costs the returned path is the cheapest one. Returns
/// an empty path when no goal can be reached.
pub fn uniform_cost_search<P>(problem: &P) -> Vec<P::Action>
where
    P: SearchProblem,
{
    build(problem).run().map(|s| s.actions).unwrap_or_default()
}
