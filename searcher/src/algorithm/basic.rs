//! Uninformed searches, ordered only by the discipline of their frontier.

pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;

use super::Prioritizer;
use crate::traits::SearchProblem;

/// Frontier order is the queue discipline alone, so every
/// node gets the same (empty) priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unprioritized;

impl<P> Prioritizer<P> for Unprioritized
where
    P: SearchProblem,
{
    type Value = ();

    fn origin(&self) -> Self::Value {}

    fn priority(
        &mut self,
        _problem: &P,
        _state: &P::State,
        _actions: &[P::Action],
    ) -> Self::Value {
    }
}

pub mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use super::Unprioritized;
    use crate::algorithm::{Node, SearchAlgorithm, SearchQueue};
    use crate::traits::SearchProblem;

    /// First in, first out.
    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<S>,
    }

    impl<S> SearchQueue for BreadthQueue<S> {
        type Candidate = S;
        type Priority = ();

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate, _priority: Self::Priority) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    pub type BreadthFirstSearcher<'p, P> = SearchAlgorithm<
        'p,
        P,
        BreadthQueue<Node<<P as SearchProblem>::State, <P as SearchProblem>::Action>>,
        Unprioritized,
    >;

    /// Build a breadth-first searcher.
    pub fn build<P>(problem: &P) -> BreadthFirstSearcher<'_, P>
    where
        P: SearchProblem,
    {
        SearchAlgorithm::new(problem, Unprioritized)
    }

    /// Search the shallowest nodes in the search tree first.
    ///
    /// When every step costs the same, the returned path has the fewest
    /// actions of any path to a goal. Returns an empty path when no goal
    /// can be reached.
    pub fn breadth_first_search<P>(problem: &P) -> Vec<P::Action>
    where
        P: SearchProblem,
    {
        build(problem).run().map(|s| s.actions).unwrap_or_default()
    }
}

pub mod dfs {
    use std::default::Default;

    use super::Unprioritized;
    use crate::algorithm::{Node, SearchAlgorithm, SearchQueue};
    use crate::traits::SearchProblem;

    /// Last in, first out.
    #[derive(Debug)]
    pub struct DepthQueue<S> {
        stack: Vec<S>,
    }

    impl<S> Default for DepthQueue<S> {
        fn default() -> Self {
            DepthQueue { stack: Vec::new() }
        }
    }

    impl<S> SearchQueue for DepthQueue<S> {
        type Candidate = S;
        type Priority = ();

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.stack.pop()
        }

        fn push(&mut self, item: Self::Candidate, _priority: Self::Priority) {
            self.stack.push(item);
        }

        fn len(&self) -> usize {
            self.stack.len()
        }
    }

    pub type DepthFirstSearcher<'p, P> = SearchAlgorithm<
        'p,
        P,
        DepthQueue<Node<<P as SearchProblem>::State, <P as SearchProblem>::Action>>,
        Unprioritized,
    >;

    /// Build a depth-first searcher.
    pub fn build<P>(problem: &P) -> DepthFirstSearcher<'_, P>
    where
        P: SearchProblem,
    {
        SearchAlgorithm::new(problem, Unprioritized)
    }

    /// Search the deepest nodes in the search tree first.
    ///
    /// The last successor produced by [SearchProblem::successors] is
    /// explored first. Returns an empty path when no goal can be reached.
    pub fn depth_first_search<P>(problem: &P) -> Vec<P::Action>
    where
        P: SearchProblem,
    {
        build(problem).run().map(|s| s.actions).unwrap_or_default()
    }
}
