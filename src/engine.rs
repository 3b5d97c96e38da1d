use std::collections::{HashSet, VecDeque};

use rand::Rng;

use crate::food::place_food;
use crate::geometry::{Direction, Point};
use crate::layout::layout;
use crate::{INITIAL_SNAKE, LEVEL_BONUS};

/// Sub-goal within one maze level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Food,
    Exit,
}

/// Maze-mode progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub level: u32,
    pub phase: Phase,
    pub exit: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    /// Endless: eat, grow, repeat.
    Classic,
    /// Eat the food, then leave through the exit.
    Special(Stage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathReason {
    Boundary,
    SelfCollision,
    Obstacle,
}

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Moved,
    AteFood,
    ReachedExit,
    Died(DeathReason),
    /// The game was already over; nothing changed.
    Frozen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    snake: VecDeque<Point>,
    food: Option<Point>,
    walls: HashSet<Point>,
    objective: Objective,
    score: u32,
    death: Option<DeathReason>,
}

impl GameState {
    /// Fresh classic game with randomly placed food.
    pub fn classic<R: Rng>(rng: &mut R) -> Self {
        let snake: VecDeque<Point> = INITIAL_SNAKE.into_iter().collect();
        let walls = HashSet::new();
        let food = place_food(rng, &snake, &walls);
        Self {
            snake,
            food: Some(food),
            walls,
            objective: Objective::Classic,
            score: 0,
            death: None,
        }
    }

    /// Fresh maze game on `level` with a zero score.
    pub fn special(level: u32) -> Self {
        let level = level.max(1);
        let l = layout(level);
        Self {
            snake: INITIAL_SNAKE.into_iter().collect(),
            food: Some(l.food),
            walls: l.walls,
            objective: Objective::Special(Stage {
                level,
                phase: Phase::Food,
                exit: l.exit,
            }),
            score: 0,
            death: None,
        }
    }

    pub fn snake(&self) -> &VecDeque<Point> {
        &self.snake
    }

    pub fn head(&self) -> Point {
        self.snake.front().copied().unwrap_or_default()
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn walls(&self) -> &HashSet<Point> {
        &self.walls
    }

    pub fn exit(&self) -> Option<Point> {
        match self.objective {
            Objective::Classic => None,
            Objective::Special(stage) => Some(stage.exit),
        }
    }

    /// Classic games are always after food.
    pub fn phase(&self) -> Phase {
        match self.objective {
            Objective::Classic => Phase::Food,
            Objective::Special(stage) => stage.phase,
        }
    }

    pub fn level(&self) -> Option<u32> {
        match self.objective {
            Objective::Classic => None,
            Objective::Special(stage) => Some(stage.level),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.death.is_some()
    }

    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death
    }

    fn collision(&self, next: Point, growing: bool) -> Option<DeathReason> {
        if !next.in_bounds() {
            return Some(DeathReason::Boundary);
        }
        if self.walls.contains(&next) {
            return Some(DeathReason::Obstacle);
        }
        // The tail moves off this tick unless the snake grows.
        let checked = if growing {
            self.snake.len()
        } else {
            self.snake.len().saturating_sub(1)
        };
        if self.snake.iter().take(checked).any(|&s| s == next) {
            return Some(DeathReason::SelfCollision);
        }
        None
    }

    fn killed(&self, reason: DeathReason) -> (Self, StepEvent) {
        log::debug!(
            "snake died at ({}, {}): {:?}, score {}",
            self.head().x,
            self.head().y,
            reason,
            self.score
        );
        let mut next = self.clone();
        next.death = Some(reason);
        (next, StepEvent::Died(reason))
    }

    fn advanced(&self, head: Point, grow: bool) -> Self {
        let mut next = self.clone();
        next.snake.push_front(head);
        if !grow {
            next.snake.pop_back();
        }
        next
    }
}

/// Advance a game one tick in `dir`, using the step function of its mode.
pub fn step<R: Rng>(state: &GameState, dir: Direction, rng: &mut R) -> (GameState, StepEvent) {
    match state.objective {
        Objective::Classic => step_classic(state, dir, rng),
        Objective::Special(_) => step_special(state, dir),
    }
}

pub fn step_classic<R: Rng>(
    state: &GameState,
    dir: Direction,
    rng: &mut R,
) -> (GameState, StepEvent) {
    if state.is_game_over() {
        return (state.clone(), StepEvent::Frozen);
    }

    let next_head = state.head().offset(dir);
    let ate_food = state.food == Some(next_head);
    if let Some(reason) = state.collision(next_head, ate_food) {
        return state.killed(reason);
    }

    let mut next = state.advanced(next_head, ate_food);
    if !ate_food {
        return (next, StepEvent::Moved);
    }
    next.score += 1;
    next.food = Some(place_food(rng, &next.snake, &next.walls));
    (next, StepEvent::AteFood)
}

/// Maze step. A classic state passed here moves but never eats.
pub fn step_special(state: &GameState, dir: Direction) -> (GameState, StepEvent) {
    if state.is_game_over() {
        return (state.clone(), StepEvent::Frozen);
    }

    let next_head = state.head().offset(dir);
    let stage = match state.objective {
        Objective::Special(stage) => Some(stage),
        Objective::Classic => None,
    };
    let ate_food = stage.is_some_and(|s| s.phase == Phase::Food) && state.food == Some(next_head);
    let reached_exit = stage.is_some_and(|s| s.phase == Phase::Exit && s.exit == next_head);

    if let Some(reason) = state.collision(next_head, ate_food) {
        return state.killed(reason);
    }

    if let Some(stage) = stage.filter(|_| reached_exit) {
        let level = stage.level.saturating_add(1);
        let mut next = GameState::special(level);
        next.score = state.score + LEVEL_BONUS;
        log::info!("level {} cleared, entering level {}", stage.level, level);
        return (next, StepEvent::ReachedExit);
    }

    let mut next = state.advanced(next_head, ate_food);
    if !ate_food {
        return (next, StepEvent::Moved);
    }
    next.score += 1;
    next.food = None;
    if let Objective::Special(stage) = &mut next.objective {
        stage.phase = Phase::Exit;
    }
    log::debug!("level {:?}: food eaten, exit is open", next.level());
    (next, StepEvent::AteFood)
}
