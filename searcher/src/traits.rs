use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Bounded, Zero};

/// Numeric path costs.
///
/// Anything with a zero, an upper bound, addition and a partial order
/// works, so both integer and floating point costs are accepted.
pub trait Cost: Copy + Debug + PartialOrd + Zero + Bounded {}

impl<T> Cost for T where T: Copy + Debug + PartialOrd + Zero + Bounded {}

/// A single transition out of a search state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A, C> {
    /// The state reached by taking `action`.
    pub state: S,
    /// The action required to get there.
    pub action: A,
    /// The incremental cost of taking `action`.
    pub cost: C,
}

impl<S, A, C> Successor<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A, C> From<(S, A, C)> for Successor<S, A, C> {
    fn from(triple: (S, A, C)) -> Self {
        Successor::new(triple.0, triple.1, triple.2)
    }
}

/// Provides an interface for conducting searches.
///
/// The search algorithms never look inside states or actions. They only
/// compare states for equality and set membership, and build sequences of
/// actions which are handed back to [SearchProblem::cost_of_actions].
pub trait SearchProblem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone + PartialEq;
    type Cost: Cost;

    /// The state the search starts from.
    fn start_state(&self) -> Self::State;

    /// Returns true if and only if `state` is a valid goal state.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Produces every transition out of `state`.
    ///
    /// The order is significant: depth-first and breadth-first searches
    /// break ties by it.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Vec<Successor<Self::State, Self::Action, Self::Cost>>;

    /// Total cost of a sequence of actions taken from the start state.
    ///
    /// A sequence which is not legal from the start state should cost
    /// `Self::Cost::max_value()`. Such a path is ranked last by uniform
    /// cost and A* searches, and no estimate is added to it. Successors
    /// of one state should carry distinct actions, or [SearchProblem::replay]
    /// can't tell them apart.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost;

    /// Follow `actions` from the start state.
    ///
    /// Each action is matched against the first successor carrying it.
    /// Returns the state reached and the summed step cost, or `None` when
    /// some action can't be taken.
    fn replay(&self, actions: &[Self::Action]) -> Option<(Self::State, Self::Cost)> {
        let mut state = self.start_state();
        let mut cost = Self::Cost::zero();

        for action in actions {
            let next = self
                .successors(&state)
                .into_iter()
                .find(|s| &s.action == action)?;
            state = next.state;
            cost = cost + next.cost;
        }

        Some((state, cost))
    }
}

/// An interface for estimating the remaining cost to a goal.
///
/// For A* to be optimal the estimate must never exceed the true
/// remaining cost, and since visited states are never reopened it
/// must also be consistent.
pub trait Heuristic<P>
where
    P: SearchProblem,
{
    /// Best guess of the cost from `state` to the nearest goal.
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// A heuristic which estimates zero for every state.
///
/// Admissible but uninformative: A* with this heuristic expands
/// states in the same order as uniform cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: SearchProblem,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::zero()
    }
}

/// Function form of [NullHeuristic].
pub fn null_heuristic<P>(_state: &P::State, _problem: &P) -> P::Cost
where
    P: SearchProblem,
{
    P::Cost::zero()
}
