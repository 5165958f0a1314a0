//! Provides the building blocks for search algorithms

use std::default::Default;

use log::{debug, trace};

use self::visited::Visited;
use crate::errors::{Result, SearchError};
use crate::traits::SearchProblem;

pub mod astar;
pub mod basic;
pub mod priority;
pub mod ucs;
mod visited;

/// Trait used to implement the frontier of nodes waiting to be
/// checked for completion.
pub trait SearchQueue {
    type Candidate;
    type Priority;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate, priority: Self::Priority);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decides the priority a node is pushed onto the frontier with.
pub trait Prioritizer<P>
where
    P: SearchProblem,
{
    type Value;

    /// Priority of the node holding the start state.
    fn origin(&self) -> Self::Value;

    /// Priority of a node reaching `state` through `actions`.
    fn priority(&mut self, problem: &P, state: &P::State, actions: &[P::Action]) -> Self::Value;
}

/// A frontier entry: a state, and the actions taken from the
/// start state to reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S, A> {
    pub state: S,
    pub actions: Vec<A>,
}

impl<S, A> Node<S, A>
where
    A: Clone,
{
    fn origin(state: S) -> Self {
        Self {
            state,
            actions: Vec::new(),
        }
    }

    fn child(&self, state: S, action: A) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend_from_slice(&self.actions);
        actions.push(action);
        Self { state, actions }
    }
}

/// Options which adjust how a search runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of states to expand before giving up.
    pub limit: Option<usize>,
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// Nodes pushed onto the frontier, including the origin.
    pub pushed: usize,
    /// Nodes popped for a state which was already visited.
    pub stale: usize,
    /// Largest size the frontier reached.
    pub high_water: usize,
}

/// A successful search: the plan, and what it took to find it.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A> {
    pub actions: Vec<A>,
    pub stats: SearchStats,
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

/// Implementation of graph search, using generic components.
///
/// Uses a generic queue (Q) and a generic prioritizer (R) to provide
/// a single foundation for every search strategy. States are marked
/// visited when they are popped, and a visited state is never expanded
/// again, even if a cheaper path to it turns up later.
#[derive(Debug)]
pub struct SearchAlgorithm<'p, P, Q, R>
where
    P: SearchProblem,
    Q: SearchQueue<Candidate = Node<P::State, P::Action>, Priority = R::Value> + Default,
    R: Prioritizer<P>,
{
    problem: &'p P,
    visited: Visited<P::State>,
    queue: Q,
    prioritizer: R,
    counter: Option<StepLimit>,
    stats: SearchStats,
}

impl<'p, P, Q, R> SearchAlgorithm<'p, P, Q, R>
where
    P: SearchProblem,
    Q: SearchQueue<Candidate = Node<P::State, P::Action>, Priority = R::Value> + Default,
    R: Prioritizer<P>,
{
    pub(crate) fn new(problem: &'p P, prioritizer: R) -> Self {
        let mut sr = SearchAlgorithm {
            problem,
            visited: Visited::default(),
            queue: Q::default(),
            prioritizer,
            counter: None,
            stats: SearchStats::default(),
        };
        let origin = sr.prioritizer.origin();
        sr.queue.push(Node::origin(problem.start_state()), origin);
        sr.stats.pushed = 1;
        sr.stats.high_water = 1;
        sr
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When more than this many states have been expanded,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.counter = Some(StepLimit::new(limit))
    }

    /// Apply a set of search options.
    pub fn with_options(mut self, options: &SearchOptions) -> Self {
        if let Some(limit) = options.limit {
            self.set_limit(limit);
        }
        self
    }

    fn expand(&mut self, node: &Node<P::State, P::Action>) -> Result<()> {
        self.counter
            .as_mut()
            .map(|c| c.increment())
            .unwrap_or(Ok(()))?;

        trace!(
            "expanding {:?} at depth {}",
            node.state,
            node.actions.len()
        );

        for successor in self.problem.successors(&node.state) {
            let child = node.child(successor.state, successor.action);
            let priority = self
                .prioritizer
                .priority(self.problem, &child.state, &child.actions);
            self.queue.push(child, priority);
            self.stats.pushed += 1;
        }

        self.stats.expanded += 1;
        if self.queue.len() > self.stats.high_water {
            self.stats.high_water = self.queue.len();
        }
        Ok(())
    }

    /// Run the search to completion.
    ///
    /// Returns [SearchError::NoResultFound] when the frontier empties
    /// without reaching a goal.
    pub fn run(mut self) -> Result<Solution<P::Action>> {
        while let Some(node) = self.queue.pop() {
            // Stale entries stay in the frontier, and are dropped here.
            if !self.visited.insert(node.state.clone()) {
                self.stats.stale += 1;
                continue;
            }

            if self.problem.is_goal_state(&node.state) {
                debug!(
                    "goal {:?} reached in {} actions, {:?}",
                    node.state,
                    node.actions.len(),
                    self.stats
                );
                return Ok(Solution {
                    actions: node.actions,
                    stats: self.stats,
                });
            }

            self.expand(&node)?;

            if self.stats.expanded % 10_000 == 0 {
                debug!(
                    "Q{} V{} E{} S{}",
                    self.queue.len(),
                    self.visited.len(),
                    self.stats.expanded,
                    self.stats.stale
                );
            }
        }

        debug!("frontier exhausted, {:?}", self.stats);
        Err(SearchError::NoResultFound)
    }
}
