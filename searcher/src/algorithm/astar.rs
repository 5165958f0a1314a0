//! A* search: uniform cost search steered by a heuristic.

use num_traits::{Bounded, Zero};

use super::ucs::UniformCostQueue;
use super::{Prioritizer, SearchAlgorithm};
use crate::traits::{Heuristic, SearchProblem};

/// Ranks nodes by path cost plus the heuristic estimate of the
/// remaining cost from the node's state.
#[derive(Debug)]
pub struct Estimated<'h, H>
where
    H: ?Sized,
{
    heuristic: &'h H,
}

impl<'h, P, H> Prioritizer<P> for Estimated<'h, H>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    type Value = P::Cost;

    fn origin(&self) -> Self::Value {
        P::Cost::zero()
    }

    /// An illegal path stays at `max_value()`, whatever the estimate.
    fn priority(&mut self, problem: &P, state: &P::State, actions: &[P::Action]) -> Self::Value {
        let cost = problem.cost_of_actions(actions);
        if cost == P::Cost::max_value() {
            return cost;
        }
        cost + self.heuristic.estimate(state, problem)
    }
}

pub type AStarSearcher<'p, 'h, P, H> =
    SearchAlgorithm<'p, P, UniformCostQueue<P>, Estimated<'h, H>>;

/// Build an A* searcher which uses `heuristic`.
pub fn build<'p, 'h, P, H>(problem: &'p P, heuristic: &'h H) -> AStarSearcher<'p, 'h, P, H>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    SearchAlgorithm::new(problem, Estimated { heuristic })
}

/// Search the node that has the lowest combined cost and heuristic first.
///
/// Pass [crate::NullHeuristic] when there is no better estimate, which
/// makes this identical to uniform cost search. The returned path is the
/// cheapest one when the heuristic is consistent. Returns an empty path
/// when no goal can be reached.
pub fn astar_search<P, H>(problem: &P, heuristic: &H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    build(problem, heuristic)
        .run()
        .map(|s| s.actions)
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    use crate::algorithm::ucs;
    use crate::graph::{Graph, GraphBuilder};
    use crate::traits::{NullHeuristic, Successor};

    type Fork = Graph<char, &'static str, u32>;

    fn fork() -> Fork {
        GraphBuilder::new('s')
            .edge('s', "left", 'l', 1)
            .edge('s', "right", 'r', 1)
            .edge('l', "on", 'm', 1)
            .edge('m', "on", 'n', 1)
            .edge('r', "goal", 'g', 1)
            .goal('g')
            .build()
    }

    fn guide(state: &char, _problem: &Fork) -> u32 {
        match state {
            'l' | 'm' | 'n' => 10,
            'r' | 's' => 1,
            _ => 0,
        }
    }

    #[test]
    fn null_heuristic_matches_uniform_cost() {
        let graph = fork();

        let astar = build(&graph, &NullHeuristic).run().unwrap();
        let ucs = ucs::build(&graph).run().unwrap();
        assert_eq!(astar, ucs);
    }

    #[test]
    fn heuristic_prunes_expansions() {
        let graph = fork();

        let informed = build(&graph, &guide).run().unwrap();
        let blind = build(&graph, &NullHeuristic).run().unwrap();

        assert_eq!(informed.actions, vec!["right", "goal"]);
        assert_eq!(blind.actions, informed.actions);
        assert_eq!(informed.stats.expanded, 2);
        assert_eq!(blind.stats.expanded, 4);
    }

    #[test]
    fn inconsistent_heuristic_is_not_reopened() {
        let graph = GraphBuilder::new('s')
            .edge('s', "sa", 'a', 1)
            .edge('s', "sb", 'b', 1)
            .edge('a', "ac", 'c', 1)
            .edge('b', "bc", 'c', 3)
            .edge('c', "cg", 'g', 1)
            .goal('g')
            .build();

        let overestimate = |state: &char, _problem: &Fork| -> u32 {
            if *state == 'a' {
                10
            } else {
                0
            }
        };

        assert_eq!(ucs::uniform_cost_search(&graph), vec!["sa", "ac", "cg"]);
        assert_eq!(astar_search(&graph, &overestimate), vec!["sb", "bc", "cg"]);
    }

    /// A toll road: every path through `x` is refused by `cost_of_actions`.
    #[derive(Debug)]
    struct Tolls;

    impl SearchProblem for Tolls {
        type State = char;
        type Action = &'static str;
        type Cost = u32;

        fn start_state(&self) -> char {
            'a'
        }

        fn is_goal_state(&self, state: &char) -> bool {
            *state == 'g'
        }

        fn successors(&self, state: &char) -> Vec<Successor<char, &'static str, u32>> {
            match state {
                'a' => vec![Successor::new('c', "go", 1)],
                'c' => vec![Successor::new('d', "x", 1)],
                'd' => vec![Successor::new('g', "y", 1)],
                _ => vec![],
            }
        }

        fn cost_of_actions(&self, actions: &[&'static str]) -> u32 {
            if actions.contains(&"x") {
                u32::max_value()
            } else {
                actions.len() as u32
            }
        }
    }

    fn toll_guide(state: &char, _problem: &Tolls) -> u32 {
        if *state == 'd' {
            1
        } else {
            0
        }
    }

    #[test]
    fn illegal_paths_do_not_overflow() {
        let solution = build(&Tolls, &toll_guide).run().unwrap();
        assert_eq!(solution.actions, vec!["go", "x", "y"]);

        let mut prioritizer = Estimated {
            heuristic: &toll_guide,
        };
        assert_eq!(
            prioritizer.priority(&Tolls, &'d', &["go", "x"]),
            u32::max_value()
        );
        assert_eq!(prioritizer.priority(&Tolls, &'c', &["go"]), 1);
    }

    #[test]
    fn repeated_action_labels() {
        let graph = GraphBuilder::new('a')
            .edge('a', "go", 'b', 1)
            .edge('a', "go", 'c', 1)
            .edge('c', "x", 'd', 1)
            .edge('d', "y", 'g', 1)
            .goal('g')
            .build();

        let guide = |state: &char, _problem: &Fork| -> u32 {
            if *state == 'd' {
                1
            } else {
                0
            }
        };

        let path = astar_search(&graph, &guide);
        assert_eq!(path, vec!["go", "x", "y"]);
        assert_eq!(graph.replay(&path), Some(('g', 3)));
        assert_eq!(ucs::uniform_cost_search(&graph), path);
    }
}
