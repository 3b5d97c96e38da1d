use crate::GRID_SIZE;

/// Integer coordinate type for grid cells
pub type Coord = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `dir`. May lie off the board.
    #[inline]
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.dx_dy();
        Self::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    /// Dense board index, `None` when off the board.
    #[inline]
    pub fn key(self) -> Option<usize> {
        self.in_bounds().then(|| (self.y * GRID_SIZE + self.x) as usize)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[inline]
    pub fn dx_dy(self) -> (Coord, Coord) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[inline]
    pub fn is_opposite(self, other: Self) -> bool {
        self.opposite() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop::sample::select(Direction::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn opposite_is_involutive(d in any_direction()) {
            prop_assert_eq!(d.opposite().opposite(), d);
            prop_assert_ne!(d.opposite(), d);
        }

        #[test]
        fn opposite_vectors_cancel(d in any_direction()) {
            let (ax, ay) = d.dx_dy();
            let (bx, by) = d.opposite().dx_dy();
            prop_assert_eq!((ax + bx, ay + by), (0, 0));
        }

        #[test]
        fn keys_are_unique_on_board(x in 0..GRID_SIZE, y in 0..GRID_SIZE) {
            let key = Point::new(x, y).key().unwrap();
            prop_assert_eq!(key % GRID_SIZE as usize, x as usize);
            prop_assert_eq!(key / GRID_SIZE as usize, y as usize);
        }
    }

    #[test]
    fn offset_follows_vector() {
        let p = Point::new(5, 8);
        assert_eq!(p.offset(Direction::Right), Point::new(6, 8));
        assert_eq!(p.offset(Direction::Up), Point::new(5, 7));
    }

    #[test]
    fn edges_are_out_of_bounds() {
        assert!(!Point::new(-1, 0).in_bounds());
        assert!(!Point::new(0, GRID_SIZE).in_bounds());
        assert!(Point::new(GRID_SIZE - 1, 0).in_bounds());
        assert_eq!(Point::new(GRID_SIZE, 3).key(), None);
    }
}
