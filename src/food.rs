use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::GRID_SIZE;
use crate::geometry::Point;

/// Pick a free cell uniformly at random, avoiding the snake and `walls`.
///
/// If the board has no free cell left, the snake's head is returned instead
/// of looping forever.
pub fn place_food<R: Rng>(
    rng: &mut R,
    snake: &VecDeque<Point>,
    walls: &HashSet<Point>,
) -> Point {
    let occupied: HashSet<Point> = snake.iter().chain(walls.iter()).copied().collect();
    if occupied.len() >= (GRID_SIZE * GRID_SIZE) as usize {
        log::debug!("board is full, no room for food");
        return snake.front().copied().unwrap_or_default();
    }

    loop {
        let p = Point::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
        if !occupied.contains(&p) {
            log::debug!("food placed at ({}, {})", p.x, p.y);
            return p;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn never_lands_on_snake_or_walls() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let snake: VecDeque<Point> = (0..GRID_SIZE).map(|x| Point::new(x, 0)).collect();
        let walls: HashSet<Point> = (0..GRID_SIZE).map(|x| Point::new(x, 1)).collect();
        for _ in 0..500 {
            let p = place_food(&mut rng, &snake, &walls);
            assert!(p.in_bounds());
            assert!(p.y >= 2, "placed on an occupied row: {p:?}");
        }
    }

    #[test]
    fn finds_the_last_free_cell() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let free = Point::new(9, 4);
        let snake: VecDeque<Point> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Point::new(x, y)))
            .filter(|&p| p != free)
            .collect();
        assert_eq!(place_food(&mut rng, &snake, &HashSet::new()), free);
    }

    #[test]
    fn full_board_returns_head() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut snake: VecDeque<Point> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Point::new(x, y)))
            .collect();
        snake.rotate_left(17);
        let head = *snake.front().unwrap();
        assert_eq!(place_food(&mut rng, &snake, &HashSet::new()), head);
    }
}
