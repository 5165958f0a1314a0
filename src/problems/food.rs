//! Eat every food dot in a layout.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use anyhow::Error;
use log::{debug, info};

use geometry::coord2d::{Direction, Layout, Map, Point};
use searcher::{Heuristic, NullHeuristic, SearchProblem, Successor};

use super::position::maze_distance;
use super::{walk, HeuristicName, Report};
use crate::{Config, PacsearchError};

/// Position, and the food dots still uneaten.
pub type FoodState = (Point, BTreeSet<Point>);

#[derive(Debug, Clone)]
pub struct FoodSearchProblem<'l> {
    layout: &'l Layout,
    start: FoodState,
}

impl<'l> FoodSearchProblem<'l> {
    pub fn new(layout: &'l Layout) -> Self {
        Self {
            layout,
            start: (layout.start(), layout.food().clone()),
        }
    }

    pub fn layout(&self) -> &'l Layout {
        self.layout
    }
}

impl<'l> SearchProblem for FoodSearchProblem<'l> {
    type State = FoodState;
    type Action = Direction;
    type Cost = u32;

    fn start_state(&self) -> Self::State {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &Self::State) -> bool {
        state.1.is_empty()
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<FoodState, Direction, u32>> {
        let (position, food) = state;

        self.layout
            .legal_moves(*position)
            .into_iter()
            .map(|(next, direction)| {
                let mut remaining = food.clone();
                remaining.remove(&next);
                Successor::new((next, remaining), direction, 1)
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost {
        match walk(self.layout, self.start.0, actions) {
            Some(path) => path.len() as u32,
            None => std::u32::MAX,
        }
    }
}

/// Maze distance to the farthest remaining food dot.
///
/// Distances are remembered between calls, so one heuristic should
/// only be used with problems on the same layout.
#[derive(Debug, Default)]
pub struct FoodHeuristic {
    distances: RefCell<HashMap<(Point, Point), Option<u32>>>,
}

impl FoodHeuristic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of square pairs measured so far.
    pub fn cached(&self) -> usize {
        self.distances.borrow().len()
    }

    fn distance(&self, layout: &Layout, a: Point, b: Point) -> Option<u32> {
        let key = if a <= b { (a, b) } else { (b, a) };

        if let Some(distance) = self.distances.borrow().get(&key) {
            return *distance;
        }

        let distance = maze_distance(layout, key.0, key.1);
        self.distances.borrow_mut().insert(key, distance);
        distance
    }
}

impl<'l> Heuristic<FoodSearchProblem<'l>> for FoodHeuristic {
    fn estimate(&self, state: &FoodState, problem: &FoodSearchProblem<'l>) -> u32 {
        let (position, food) = state;

        food.iter()
            .filter_map(|dot| self.distance(problem.layout(), *position, *dot))
            .max()
            .unwrap_or(0)
    }
}

pub(crate) fn run(layout: &Layout, config: &Config) -> Result<Report, Error> {
    let problem = FoodSearchProblem::new(layout);
    info!("Eating {} food dots", problem.start.1.len());

    let heuristic: Box<dyn Heuristic<FoodSearchProblem>> = match config.heuristic {
        HeuristicName::Null => Box::new(NullHeuristic),
        HeuristicName::Food => Box::new(FoodHeuristic::new()),
        other => {
            return Err(PacsearchError::HeuristicNotApplicable {
                heuristic: other,
                problem: "food",
            }
            .into())
        }
    };

    let solution = config
        .strategy
        .solve(&problem, heuristic.as_ref(), &config.options)?;
    debug!("Food search stats: {:?}", solution.stats);
    Ok(Report::new(&problem, &solution))
}

#[cfg(test)]
mod test {
    use super::*;

    use searcher::{astar_search, breadth_first_search, uniform_cost_search};

    fn tiny_search() -> Layout {
        include_str!("../../layouts/tinySearch.lay").parse().unwrap()
    }

    #[test]
    fn problem() {
        let layout = tiny_search();
        let problem = FoodSearchProblem::new(&layout);
        let (start, food) = problem.start_state();

        assert_eq!(start, Point::new(2, 1));
        assert_eq!(food.len(), 2);
        assert!(!problem.is_goal_state(&problem.start_state()));
        assert!(problem.is_goal_state(&(start, BTreeSet::new())));

        let successors = problem.successors(&problem.start_state());
        assert_eq!(successors.len(), 2);
        assert_eq!(successors[0].action, Direction::East);
        assert_eq!(successors[1].action, Direction::West);
        assert_eq!(successors[1].state.1.len(), 1);
    }

    #[test]
    fn optimal_plans() {
        let layout = tiny_search();
        let problem = FoodSearchProblem::new(&layout);

        assert_eq!(problem.cost_of_actions(&breadth_first_search(&problem)), 7);
        assert_eq!(problem.cost_of_actions(&uniform_cost_search(&problem)), 7);
        assert_eq!(
            problem.cost_of_actions(&astar_search(&problem, &FoodHeuristic::new())),
            7
        );
    }

    #[test]
    fn heuristic_cache() {
        let layout = tiny_search();
        let problem = FoodSearchProblem::new(&layout);
        let heuristic = FoodHeuristic::new();

        assert_eq!(heuristic.estimate(&problem.start_state(), &problem), 5);
        assert_eq!(heuristic.cached(), 2);
        assert_eq!(heuristic.estimate(&problem.start_state(), &problem), 5);
        assert_eq!(heuristic.cached(), 2);

        let done = (Point::new(1, 3), BTreeSet::new());
        assert_eq!(heuristic.estimate(&done, &problem), 0);
    }

    #[test]
    fn single_dot() {
        let layout: Layout = "%%%%\n%P.%\n%%%%".parse().unwrap();
        let problem = FoodSearchProblem::new(&layout);

        assert_eq!(breadth_first_search(&problem), vec![Direction::East]);
    }
}
