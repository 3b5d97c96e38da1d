//! Grid snake: a discrete-time snake simulator with an endless classic mode
//! and a multi-level maze mode.
//!
//! - `geometry`: cells and directions
//! - `layout`: the fixed maze level table
//! - `food`: random food placement
//! - `engine`: game state and the per-mode step functions
//! - `session`: tick/countdown/auto-exit timers around one game
//! - `input`, `render`: adapters for the terminal front end

pub mod engine;
pub mod food;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod render;
pub mod session;

use std::time::Duration;

pub use engine::{
    DeathReason, GameState, Objective, Phase, Stage, StepEvent, step, step_classic, step_special,
};
pub use geometry::{Coord, Direction, Point};
pub use layout::{Layout, layout};
pub use session::{Control, ExitReason, Mode, Session, SessionConfig, Snapshot};

/// Board is `GRID_SIZE` x `GRID_SIZE` cells.
pub const GRID_SIZE: Coord = 16;

/// Starting body, head first. The snake starts heading right.
pub const INITIAL_SNAKE: [Point; 3] = [Point::new(5, 8), Point::new(4, 8), Point::new(3, 8)];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Score bonus for reaching a maze exit.
pub const LEVEL_BONUS: u32 = 2;

pub const CLASSIC_TICK: Duration = Duration::from_millis(150);
pub const SPECIAL_TICK: Duration = Duration::from_millis(170);

/// Seconds until the game screen closes by itself.
pub const AUTO_EXIT_SECONDS: u32 = 120;
