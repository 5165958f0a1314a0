//! Explicit, directed, weighted graphs as search problems.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Bounded;

use crate::traits::{Cost, SearchProblem, Successor};

type Edges<N, A, C> = HashMap<N, Vec<Successor<N, A, C>>>;

/// A graph with labelled edges, a start node and a set of goal nodes.
///
/// Successors of a node are produced in the order their edges were
/// added to the [GraphBuilder].
#[derive(Debug, Clone)]
pub struct Graph<N, A, C>
where
    N: Eq + Hash,
{
    edges: Edges<N, A, C>,
    start: N,
    goals: HashSet<N>,
}

impl<N, A, C> Graph<N, A, C>
where
    N: Eq + Hash,
{
    pub fn contains_node(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }

    pub fn goals(&self) -> impl Iterator<Item = &N> {
        self.goals.iter()
    }

    /// Iterate through the edges leaving this node.
    pub fn edges(&self, node: &N) -> impl Iterator<Item = &Successor<N, A, C>> {
        self.edges.get(node).into_iter().flatten()
    }
}

/// Builds a [Graph] one edge at a time.
#[derive(Debug)]
pub struct GraphBuilder<N, A, C>
where
    N: Eq + Hash,
{
    graph: Graph<N, A, C>,
}

impl<N, A, C> GraphBuilder<N, A, C>
where
    N: Clone + Eq + Hash,
    A: PartialEq,
{
    /// Create a graph containing only the start node.
    pub fn new(start: N) -> Self {
        let mut edges = HashMap::new();
        edges.insert(start.clone(), Vec::new());
        Self {
            graph: Graph {
                edges,
                start,
                goals: HashSet::new(),
            },
        }
    }

    /// Add a directed edge, labelled with `action`, from `origin` to
    /// `destination`.
    pub fn edge(mut self, origin: N, action: A, destination: N, cost: C) -> Self {
        self.insert(origin, action, destination, cost);
        self
    }

    /// Add a directed edge in place.
    ///
    /// Action labels are unique per node: an edge whose action is
    /// already used by `origin` replaces the old edge, which is returned.
    pub fn insert(
        &mut self,
        origin: N,
        action: A,
        destination: N,
        cost: C,
    ) -> Option<Successor<N, A, C>> {
        self.graph
            .edges
            .entry(destination.clone())
            .or_insert_with(Vec::new);

        let successor = Successor::new(destination, action, cost);
        let edges = self.graph.edges.entry(origin).or_insert_with(Vec::new);
        match edges.iter().position(|e| e.action == successor.action) {
            Some(index) => Some(std::mem::replace(&mut edges[index], successor)),
            None => {
                edges.push(successor);
                None
            }
        }
    }

    /// Mark a node as a goal.
    pub fn goal(mut self, node: N) -> Self {
        self.graph.edges.entry(node.clone()).or_insert_with(Vec::new);
        self.graph.goals.insert(node);
        self
    }

    pub fn build(self) -> Graph<N, A, C> {
        self.graph
    }
}

impl<N, A, C> SearchProblem for Graph<N, A, C>
where
    N: Debug + Clone + Eq + Hash,
    A: Debug + Clone + PartialEq,
    C: Cost,
{
    type State = N;
    type Action = A;
    type Cost = C;

    fn start_state(&self) -> Self::State {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<N, A, C>> {
        self.edges(state).cloned().collect()
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost {
        self.replay(actions)
            .map(|(_, cost)| cost)
            .unwrap_or_else(<C as Bounded>::max_value)
    }
}
