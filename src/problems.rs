//! Search problems posed by an agent moving around a maze layout.

use std::fmt;
use std::str::FromStr;

use geometry::coord2d::{Direction, Layout, Point};
use searcher::{SearchProblem, Solution};

use crate::PacsearchError;

pub mod corners;
pub mod food;
pub mod position;

pub use corners::{corners_heuristic, CornersProblem};
pub use food::{FoodHeuristic, FoodSearchProblem};
pub use position::{
    euclidean_heuristic, manhattan_heuristic, maze_distance, PositionSearchProblem, StepCost,
};

/// Heuristics which can be picked by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeuristicName {
    Null,
    Manhattan,
    Euclidean,
    Corners,
    Food,
}

impl fmt::Display for HeuristicName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            HeuristicName::Null => "null",
            HeuristicName::Manhattan => "manhattan",
            HeuristicName::Euclidean => "euclidean",
            HeuristicName::Corners => "corners",
            HeuristicName::Food => "food",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for HeuristicName {
    type Err = PacsearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "null" | "none" => Ok(HeuristicName::Null),
            "manhattan" => Ok(HeuristicName::Manhattan),
            "euclidean" => Ok(HeuristicName::Euclidean),
            "corners" => Ok(HeuristicName::Corners),
            "food" => Ok(HeuristicName::Food),
            _ => Err(PacsearchError::UnknownHeuristic(s.to_string())),
        }
    }
}

/// Follow `actions` through the layout from `start`, returning every
/// square entered, or `None` if an action walks into a wall.
pub(crate) fn walk(layout: &Layout, start: Point, actions: &[Direction]) -> Option<Vec<Point>> {
    let mut position = start;
    let mut path = Vec::with_capacity(actions.len());
    for action in actions {
        position = position.step(*action);
        if layout.is_wall(position) {
            return None;
        }
        path.push(position);
    }
    Some(path)
}

/// The outcome of one search, ready for printing.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub actions: Vec<String>,
    pub cost: String,
    pub expanded: usize,
}

impl Report {
    pub(crate) fn new<P>(problem: &P, solution: &Solution<P::Action>) -> Self
    where
        P: SearchProblem,
        P::Action: fmt::Display,
        P::Cost: fmt::Display,
    {
        Self {
            actions: solution.actions.iter().map(|a| a.to_string()).collect(),
            cost: problem.cost_of_actions(&solution.actions).to_string(),
            expanded: solution.stats.expanded,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Path: {}", self.actions.join(", "))?;
        writeln!(f, "Length: {}", self.actions.len())?;
        writeln!(f, "Cost: {}", self.cost)?;
        write!(f, "Expanded: {}", self.expanded)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn heuristic_names() {
        for name in &["null", "manhattan", "euclidean", "corners", "food"] {
            let heuristic: HeuristicName = name.parse().unwrap();
            assert_eq!(heuristic.to_string(), *name);
        }
        assert_eq!(
            "Manhattan".parse::<HeuristicName>().ok(),
            Some(HeuristicName::Manhattan)
        );
        assert!("greedy".parse::<HeuristicName>().is_err());
    }

    #[test]
    fn walking() {
        let layout: Layout = include_str!("../layouts/tinyMaze.lay").parse().unwrap();
        let start = layout.start();

        assert_eq!(
            walk(&layout, start, &[Direction::South, Direction::South]),
            Some(vec![Point::new(5, 2), Point::new(5, 3)])
        );
        assert_eq!(walk(&layout, start, &[Direction::East]), None);
        assert_eq!(walk(&layout, start, &[]), Some(vec![]));
    }

    #[test]
    fn report() {
        let report = Report {
            actions: vec!["North".to_string(), "East".to_string()],
            cost: "2".to_string(),
            expanded: 5,
        };

        assert_eq!(
            report.to_string(),
            "Path: North, East\nLength: 2\nCost: 2\nExpanded: 5"
        );
    }
}
