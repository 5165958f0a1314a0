//! Visit all four corners of a layout.

use anyhow::Error;
use log::{info, warn};

use geometry::coord2d::{Direction, Layout, Map, Point};
use searcher::{Heuristic, NullHeuristic, SearchProblem, Successor};

use super::{walk, HeuristicName, Report};
use crate::{Config, PacsearchError};

/// Position, and which of the corners have been visited so far.
pub type CornersState = (Point, [bool; 4]);

#[derive(Debug, Clone)]
pub struct CornersProblem<'l> {
    layout: &'l Layout,
    start: Point,
    corners: [Point; 4],
}

impl<'l> CornersProblem<'l> {
    pub fn new(layout: &'l Layout) -> Self {
        let corners = layout.corners();
        for corner in corners.iter() {
            if !layout.food().contains(corner) {
                warn!("No food in corner {}", corner);
            }
        }

        Self {
            layout,
            start: layout.start(),
            corners,
        }
    }

    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    fn mark(&self, position: Point, visited: &mut [bool; 4]) {
        for (corner, seen) in self.corners.iter().zip(visited.iter_mut()) {
            if *corner == position {
                *seen = true;
            }
        }
    }
}

impl<'l> SearchProblem for CornersProblem<'l> {
    type State = CornersState;
    type Action = Direction;
    type Cost = u32;

    fn start_state(&self) -> Self::State {
        let mut visited = [false; 4];
        self.mark(self.start, &mut visited);
        (self.start, visited)
    }

    fn is_goal_state(&self, state: &Self::State) -> bool {
        state.1.iter().all(|v| *v)
    }

    fn successors(&self, state: &Self::State) -> Vec<Successor<CornersState, Direction, u32>> {
        let (position, visited) = state;

        self.layout
            .legal_moves(*position)
            .into_iter()
            .map(|(next, direction)| {
                let mut seen = *visited;
                self.mark(next, &mut seen);
                Successor::new((next, seen), direction, 1)
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Self::Cost {
        match walk(self.layout, self.start, actions) {
            Some(path) => path.len() as u32,
            None => std::u32::MAX,
        }
    }
}

/// Distance to the farthest corner not yet visited, ignoring walls.
///
/// Every unvisited corner must still be reached, so the path is at least
/// as long as the walk to whichever is farthest away.
pub fn corners_heuristic(state: &CornersState, problem: &CornersProblem<'_>) -> u32 {
    let (position, visited) = state;

    problem
        .corners()
        .iter()
        .zip(visited.iter())
        .filter(|(_, seen)| !**seen)
        .map(|(corner, _)| position.manhattan_distance(*corner) as u32)
        .max()
        .unwrap_or(0)
}

pub(crate) fn run(layout: &Layout, config: &Config) -> Result<Report, Error> {
    let problem = CornersProblem::new(layout);
    info!("Visiting corners {:?}", problem.corners());

    let heuristic: Box<dyn Heuristic<CornersProblem>> = match config.heuristic {
        HeuristicName::Null => Box::new(NullHeuristic),
        HeuristicName::Corners => Box::new(corners_heuristic),
        other => {
            return Err(PacsearchError::HeuristicNotApplicable {
                heuristic: other,
                problem: "corners",
            }
            .into())
        }
    };

    let solution = config
        .strategy
        .solve(&problem, heuristic.as_ref(), &config.options)?;
    Ok(Report::new(&problem, &solution))
}

#[cfg(test)]
mod test {
    use super::*;

    use searcher::{astar_search, breadth_first_search, depth_first_search, uniform_cost_search};

    fn tiny_corners() -> Layout {
        include_str!("../../layouts/tinyCorners.lay").parse().unwrap()
    }

    #[test]
    fn start() {
        let layout = tiny_corners();
        let problem = CornersProblem::new(&layout);

        assert_eq!(problem.start_state(), (Point::new(4, 2), [false; 4]));
        assert!(!problem.is_goal_state(&problem.start_state()));
        assert!(problem.is_goal_state(&(Point::new(4, 2), [true; 4])));

        let successors = problem.successors(&(Point::new(2, 1), [false; 4]));
        assert_eq!(
            successors
                .iter()
                .map(|s| (s.action, s.state.1))
                .collect::<Vec<_>>(),
            vec![
                (Direction::South, [false; 4]),
                (Direction::East, [false; 4]),
                (Direction::West, [true, false, false, false]),
            ]
        );
    }

    #[test]
    fn optimal_plans() {
        let layout = tiny_corners();
        let problem = CornersProblem::new(&layout);

        let shortest = breadth_first_search(&problem);
        assert_eq!(shortest.len(), 17);
        assert_eq!(problem.cost_of_actions(&shortest), 17);

        assert_eq!(problem.cost_of_actions(&uniform_cost_search(&problem)), 17);
        assert_eq!(
            problem.cost_of_actions(&astar_search(&problem, &corners_heuristic)),
            17
        );

        let wandering = depth_first_search(&problem);
        let (end, _) = problem.replay(&wandering).unwrap();
        assert!(problem.is_goal_state(&end));
    }

    #[test]
    fn heuristic() {
        let layout = tiny_corners();
        let problem = CornersProblem::new(&layout);

        assert_eq!(corners_heuristic(&problem.start_state(), &problem), 5);
        assert_eq!(
            corners_heuristic(&(Point::new(6, 4), [true, true, true, false]), &problem),
            0
        );
        assert_eq!(
            corners_heuristic(&(Point::new(6, 4), [false, true, true, true]), &problem),
            8
        );
    }

    #[test]
    fn illegal_actions() {
        let layout = tiny_corners();
        let problem = CornersProblem::new(&layout);

        assert_eq!(problem.cost_of_actions(&[Direction::West]), 1);
        assert_eq!(
            problem.cost_of_actions(&[Direction::South, Direction::West]),
            std::u32::MAX
        );
    }
}
