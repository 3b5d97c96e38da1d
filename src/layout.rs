//! Static level table for the maze mode.
//!
//! Each level is plain data: a list of straight wall runs with doorway gaps,
//! plus where the food and the exit sit. `layout` cycles through the table.

use std::collections::HashSet;

use crate::geometry::{Coord, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Runs along x on row `line`.
    Horizontal,
    /// Runs along y on column `line`.
    Vertical,
}

/// An axis-aligned wall from `from` to `to` (inclusive), open at `gaps`.
#[derive(Debug, Clone, Copy)]
pub struct WallSegment {
    pub orientation: Orientation,
    pub line: Coord,
    pub from: Coord,
    pub to: Coord,
    pub gaps: &'static [Coord],
}

impl WallSegment {
    const fn horizontal(y: Coord, from: Coord, to: Coord, gaps: &'static [Coord]) -> Self {
        Self { orientation: Orientation::Horizontal, line: y, from, to, gaps }
    }

    const fn vertical(x: Coord, from: Coord, to: Coord, gaps: &'static [Coord]) -> Self {
        Self { orientation: Orientation::Vertical, line: x, from, to, gaps }
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (self.from..=self.to)
            .filter(|t| !self.gaps.contains(t))
            .map(|t| match self.orientation {
                Orientation::Horizontal => Point::new(t, self.line),
                Orientation::Vertical => Point::new(self.line, t),
            })
    }
}

#[derive(Debug)]
pub struct LevelSpec {
    pub segments: &'static [WallSegment],
    pub food: Point,
    pub exit: Point,
}

/// Expanded level, ready to be dropped into a game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub walls: HashSet<Point>,
    pub food: Point,
    pub exit: Point,
}

pub static LEVELS: [LevelSpec; 4] = [
    // Two bars with a central doorway each.
    LevelSpec {
        segments: &[
            WallSegment::horizontal(4, 2, 13, &[7, 8]),
            WallSegment::horizontal(12, 2, 13, &[7, 8]),
        ],
        food: Point::new(8, 2),
        exit: Point::new(8, 14),
    },
    // A tall divider and a small shelf in the top-left corner.
    LevelSpec {
        segments: &[
            WallSegment::vertical(10, 0, 15, &[4, 11]),
            WallSegment::horizontal(3, 0, 6, &[3]),
        ],
        food: Point::new(13, 8),
        exit: Point::new(2, 1),
    },
    // The snake starts inside a box.
    LevelSpec {
        segments: &[
            WallSegment::horizontal(2, 2, 13, &[8]),
            WallSegment::horizontal(13, 2, 13, &[7]),
            WallSegment::vertical(2, 3, 12, &[5, 10]),
            WallSegment::vertical(13, 3, 12, &[6]),
        ],
        food: Point::new(8, 0),
        exit: Point::new(14, 14),
    },
    // Three corridors joined by a short pillar.
    LevelSpec {
        segments: &[
            WallSegment::horizontal(5, 0, 15, &[1, 14]),
            WallSegment::horizontal(11, 0, 15, &[2, 13]),
            WallSegment::vertical(8, 6, 10, &[8]),
        ],
        food: Point::new(12, 14),
        exit: Point::new(3, 2),
    },
];

pub fn expand(segments: &[WallSegment]) -> HashSet<Point> {
    segments.iter().flat_map(|s| s.cells()).collect()
}

/// Layout for a 1-based level number. Level 0 is treated as level 1.
pub fn layout(level: u32) -> Layout {
    let index = (level.max(1) - 1) as usize % LEVELS.len();
    let spec = &LEVELS[index];
    Layout {
        walls: expand(spec.segments),
        food: spec.food,
        exit: spec.exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INITIAL_SNAKE;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn layout_is_periodic(level in 1u32..10_000) {
            prop_assert_eq!(layout(level), layout(level + LEVELS.len() as u32));
        }
    }

    #[test]
    fn level_zero_is_level_one() {
        assert_eq!(layout(0), layout(1));
    }

    #[test]
    fn objectives_and_start_are_clear() {
        for level in 1..=LEVELS.len() as u32 {
            let l = layout(level);
            assert!(!l.walls.contains(&l.food), "food walled in on level {level}");
            assert!(!l.walls.contains(&l.exit), "exit walled in on level {level}");
            assert_ne!(l.food, l.exit);
            for cell in INITIAL_SNAKE {
                assert!(!l.walls.contains(&cell), "snake spawns in a wall on level {level}");
                assert_ne!(cell, l.food);
                assert_ne!(cell, l.exit);
            }
            assert!(l.walls.iter().all(|w| w.in_bounds()));
        }
    }

    #[test]
    fn gaps_are_left_open() {
        let walls = expand(&[WallSegment::horizontal(4, 2, 6, &[3, 5])]);
        let mut cells: Vec<_> = walls.into_iter().collect();
        cells.sort();
        assert_eq!(cells, vec![Point::new(2, 4), Point::new(4, 4), Point::new(6, 4)]);
    }

    #[test]
    fn vertical_segments_run_along_y() {
        let walls = expand(&[WallSegment::vertical(1, 0, 2, &[])]);
        assert!(walls.contains(&Point::new(1, 0)));
        assert!(walls.contains(&Point::new(1, 2)));
        assert_eq!(walls.len(), 3);
    }
}
