//! Randomized checks of the search strategies against brute force
//! shortest paths on small graphs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use searcher::graph::{Graph, GraphBuilder};
use searcher::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search, NullHeuristic,
    SearchProblem,
};

type Edge = (usize, usize);
type RandomGraph = Graph<usize, Edge, u32>;

const UNREACHABLE: u32 = u32::MAX / 4;

struct Instance {
    graph: RandomGraph,
    n: usize,
    edges: Vec<(usize, usize, u32)>,
    goals: Vec<bool>,
}

fn generate(seed: u64) -> Instance {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = rng.random_range(1..12usize);
    let density = rng.random_range(0.05..0.5);

    let mut builder = GraphBuilder::new(0);
    let mut edges = Vec::new();
    for from in 0..n {
        for to in 0..n {
            if from != to && rng.random_bool(density) {
                let cost = rng.random_range(0..10u32);
                builder.insert(from, (from, to), to, cost);
                edges.push((from, to, cost));
            }
        }
    }

    let mut goals = vec![false; n];
    for (node, goal) in goals.iter_mut().enumerate() {
        if rng.random_bool(0.15) {
            *goal = true;
            builder = builder.goal(node);
        }
    }

    Instance {
        graph: builder.build(),
        n,
        edges,
        goals,
    }
}

impl Instance {
    /// Bellman-Ford from the start node.
    fn distances(&self, unit: bool) -> Vec<u32> {
        let mut dist = vec![UNREACHABLE; self.n];
        dist[0] = 0;
        for _ in 0..self.n {
            for &(from, to, cost) in &self.edges {
                let step = if unit { 1 } else { cost };
                if dist[from] != UNREACHABLE && dist[from] + step < dist[to] {
                    dist[to] = dist[from] + step;
                }
            }
        }
        dist
    }

    /// Exact remaining cost from every node to its nearest goal.
    fn remaining(&self) -> Vec<u32> {
        let mut dist: Vec<u32> = self
            .goals
            .iter()
            .map(|g| if *g { 0 } else { UNREACHABLE })
            .collect();
        for _ in 0..self.n {
            for &(from, to, cost) in &self.edges {
                if dist[to] != UNREACHABLE && dist[to] + cost < dist[from] {
                    dist[from] = dist[to] + cost;
                }
            }
        }
        dist
    }

    fn best(&self, dist: &[u32]) -> Option<u32> {
        (0..self.n)
            .filter(|&v| self.goals[v])
            .map(|v| dist[v])
            .filter(|&d| d != UNREACHABLE)
            .min()
    }

    fn check_reaches_goal(&self, path: &[Edge]) {
        let (end, _) = self.graph.replay(path).expect("path should be legal");
        assert!(self.graph.is_goal_state(&end), "{:?} is not a goal", end);
    }
}

#[test]
fn strategies_agree_with_brute_force() {
    for seed in 0..300 {
        let instance = generate(seed);
        let graph = &instance.graph;

        let hops = instance.best(&instance.distances(true));
        let cheapest = instance.best(&instance.distances(false));
        assert_eq!(hops.is_some(), cheapest.is_some());

        let dfs = depth_first_search(graph);
        let bfs = breadth_first_search(graph);
        let ucs = uniform_cost_search(graph);
        let blind = astar_search(graph, &NullHeuristic);

        let remaining = instance.remaining();
        let exact = |state: &usize, _: &RandomGraph| -> u32 { remaining[*state] };
        let informed = astar_search(graph, &exact);

        assert_eq!(ucs, blind, "seed {}", seed);

        match (hops, cheapest) {
            (Some(hops), Some(cheapest)) => {
                for path in [&dfs, &bfs, &ucs, &informed].iter() {
                    instance.check_reaches_goal(path);
                }
                assert_eq!(bfs.len() as u32, hops, "seed {}", seed);
                assert_eq!(graph.cost_of_actions(&ucs), cheapest, "seed {}", seed);
                assert_eq!(graph.cost_of_actions(&informed), cheapest, "seed {}", seed);
            }
            _ => {
                for path in [&dfs, &bfs, &ucs, &informed].iter() {
                    assert!(path.is_empty(), "seed {}", seed);
                }
            }
        }
    }
}
