//! Text maze layouts.
//!
//! A layout is a rectangle of characters, one row per line:
//!
//! * `%` is a wall
//! * `.` is a food dot
//! * `o` is a capsule
//! * `P` is where the agent starts
//! * `G` and digits mark ghosts, which are open floor here
//! * a space is open floor
use std::collections::{BTreeSet, HashSet};
use std::str::FromStr;

use itertools::iproduct;
use thiserror::Error;

use super::map::Map;
use super::Point;
use crate::Position;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout is empty")]
    Empty,

    #[error("Unexpected character {1:?} at {0}")]
    UnexpectedCharacter(Point, char),

    #[error("Row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Layout has no starting position")]
    MissingStart,

    #[error("Layout has more than one starting position: {0} and {1}")]
    MultipleStarts(Point, Point),
}

/// A parsed maze layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    walls: HashSet<Point>,
    start: Point,
    food: BTreeSet<Point>,
    capsules: BTreeSet<Point>,
    ghosts: BTreeSet<Point>,
}

impl Layout {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Where the agent starts.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Food dots, in reading order.
    pub fn food(&self) -> &BTreeSet<Point> {
        &self.food
    }

    pub fn capsules(&self) -> &BTreeSet<Point> {
        &self.capsules
    }

    pub fn ghosts(&self) -> &BTreeSet<Point> {
        &self.ghosts
    }

    /// Is this point inside the layout rectangle?
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Points outside the layout count as walls.
    pub fn is_wall(&self, point: Point) -> bool {
        !self.contains(point) || self.walls.contains(&point)
    }

    /// The four squares just inside the outer wall, ordered
    /// (1,1), (1,h-2), (w-2,1), (w-2,h-2).
    pub fn corners(&self) -> [Point; 4] {
        let right = self.width as Position - 2;
        let bottom = self.height as Position - 2;

        let mut corners = [Point::origin(); 4];
        for (slot, (x, y)) in corners.iter_mut().zip(iproduct!(vec![1, right], vec![1, bottom])) {
            *slot = Point::new(x, y);
        }
        corners
    }
}

impl Map for Layout {
    fn is_traversable(&self, location: Point) -> bool {
        !self.is_wall(location)
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().map(|line| line.trim_end_matches('\r')).collect();

        // Blank lines around the layout are dropped, blank rows inside it are kept.
        let first = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .ok_or(LayoutError::Empty)?;
        let last = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .unwrap_or(first);
        let rows = &lines[first..=last];

        let width = rows[0].chars().count();

        let mut walls = HashSet::new();
        let mut food = BTreeSet::new();
        let mut capsules = BTreeSet::new();
        let mut ghosts = BTreeSet::new();
        let mut start: Option<Point> = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, c) in row.chars().enumerate() {
                let point: Point = (x, y).into();
                match c {
                    '%' => {
                        walls.insert(point);
                    }
                    '.' => {
                        food.insert(point);
                    }
                    'o' => {
                        capsules.insert(point);
                    }
                    'P' => {
                        if let Some(first) = start {
                            return Err(LayoutError::MultipleStarts(first, point));
                        }
                        start = Some(point);
                    }
                    'G' | '0'..='9' => {
                        ghosts.insert(point);
                    }
                    ' ' => {}
                    c => return Err(LayoutError::UnexpectedCharacter(point, c)),
                }
            }
        }

        Ok(Layout {
            width,
            height: rows.len(),
            walls,
            start: start.ok_or(LayoutError::MissingStart)?,
            food,
            capsules,
            ghosts,
        })
    }
}
