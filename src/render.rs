use crate::GRID_SIZE;
use crate::engine::Phase;
use crate::geometry::Point;
use crate::session::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Head,
    Body,
    Food,
    /// Exit before the food is eaten.
    ExitLocked,
    ExitOpen,
}

impl Tile {
    /// Two characters wide so cells come out roughly square in a terminal.
    pub fn glyph(self) -> &'static str {
        match self {
            Tile::Empty => " .",
            Tile::Wall => "##",
            Tile::Head => "@@",
            Tile::Body => "oo",
            Tile::Food => "<>",
            Tile::ExitLocked => "[]",
            Tile::ExitOpen => "()",
        }
    }
}

/// Rasterize a snapshot into rows of tiles, top row first.
pub fn tiles(snap: &Snapshot) -> Vec<Vec<Tile>> {
    let n = GRID_SIZE as usize;
    let mut grid = vec![Tile::Empty; n * n];
    let mut put = |p: Point, tile| {
        if let Some(i) = p.key() {
            grid[i] = tile;
        }
    };

    for &w in &snap.walls {
        put(w, Tile::Wall);
    }
    if let Some(exit) = snap.exit {
        let tile = match snap.phase {
            Phase::Food => Tile::ExitLocked,
            Phase::Exit => Tile::ExitOpen,
        };
        put(exit, tile);
    }
    if let Some(food) = snap.food {
        put(food, Tile::Food);
    }
    // Tail to head so the head wins on overlap.
    for (i, &p) in snap.snake.iter().enumerate().rev() {
        put(p, if i == 0 { Tile::Head } else { Tile::Body });
    }

    grid.chunks(n).map(|row| row.to_vec()).collect()
}
