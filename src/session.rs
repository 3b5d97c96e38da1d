//! One play session: the current game, the queued direction and the three
//! timers (movement tick, countdown, auto-exit).
//!
//! The session is the only owner of mutable game state. Drivers call
//! [`Session::advance`] from a single loop; timers are plain values owned by
//! the session, so dropping it cancels them.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::engine::{DeathReason, GameState, Phase, StepEvent, step};
use crate::geometry::{Direction, Point};
use crate::{AUTO_EXIT_SECONDS, CLASSIC_TICK, INITIAL_DIRECTION, SPECIAL_TICK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Classic,
    Special,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Classic => "classic",
            Mode::Special => "special",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub mode: Mode,
    pub classic_tick: Duration,
    pub special_tick: Duration,
    pub countdown_period: Duration,
    /// Seconds before the session closes by itself.
    pub session_seconds: u32,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Classic,
            classic_tick: CLASSIC_TICK,
            special_tick: SPECIAL_TICK,
            countdown_period: Duration::from_secs(1),
            session_seconds: AUTO_EXIT_SECONDS,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn tick_period(&self) -> Duration {
        match self.mode {
            Mode::Classic => self.classic_tick,
            Mode::Special => self.special_tick,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player asked to leave.
    Requested,
    /// The session ran out of time.
    TimeUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit(ExitReason),
}

/// Repeating timer. A late firing reschedules from `now`; missed periods are dropped.
#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next: Instant,
}

impl Interval {
    fn new(period: Duration, now: Instant) -> Self {
        Self { period, next: now + period }
    }

    fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.period;
        true
    }
}

/// One-shot timer.
#[derive(Debug, Clone, Copy)]
struct Deadline {
    at: Instant,
}

impl Deadline {
    fn expired(&self, now: Instant) -> bool {
        now >= self.at
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Head first.
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    /// Sorted for stable output.
    pub walls: Vec<Point>,
    pub exit: Option<Point>,
    pub phase: Phase,
    pub score: u32,
    pub level: Option<u32>,
    pub game_over: bool,
    pub death: Option<DeathReason>,
    pub seconds_left: u32,
}

#[derive(Debug)]
pub struct Session {
    cfg: SessionConfig,
    state: GameState,
    direction: Direction,
    rng: ChaCha8Rng,
    tick_timer: Interval,
    countdown_timer: Interval,
    exit_timer: Deadline,
    seconds_left: u32,
    exit: Option<ExitReason>,
}

impl Session {
    pub fn new(cfg: SessionConfig) -> Self {
        Self::started_at(cfg, Instant::now())
    }

    /// Start a session whose timers count from `now`.
    pub fn started_at(cfg: SessionConfig, now: Instant) -> Self {
        let mut rng = match cfg.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let state = Self::fresh_state(cfg.mode, &mut rng);
        log::info!(
            "{} session started, {}s on the clock",
            cfg.mode.as_str(),
            cfg.session_seconds
        );
        Self {
            tick_timer: Interval::new(cfg.tick_period(), now),
            countdown_timer: Interval::new(cfg.countdown_period, now),
            exit_timer: Deadline {
                at: now + Duration::from_secs(cfg.session_seconds.into()),
            },
            seconds_left: cfg.session_seconds,
            direction: INITIAL_DIRECTION,
            exit: None,
            state,
            rng,
            cfg,
        }
    }

    fn fresh_state(mode: Mode, rng: &mut ChaCha8Rng) -> GameState {
        match mode {
            Mode::Classic => GameState::classic(rng),
            Mode::Special => GameState::special(1),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    /// Queue a turn for the next tick. Ignored once the game is over, and for
    /// a direct reversal of the queued direction. Later calls overwrite earlier ones.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.state.is_game_over() || self.exit.is_some() {
            return false;
        }
        if requested.is_opposite(self.direction) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Apply one movement step with the queued direction.
    pub fn tick(&mut self) -> StepEvent {
        if self.state.is_game_over() {
            return StepEvent::Frozen;
        }
        let (next, event) = step(&self.state, self.direction, &mut self.rng);
        log::trace!("tick {:?} -> {:?}", self.direction, event);
        self.state = next;
        // A new level respawns the snake facing right.
        if event == StepEvent::ReachedExit {
            self.direction = INITIAL_DIRECTION;
        }
        event
    }

    /// One countdown second. Saturates at zero.
    pub fn countdown(&mut self) {
        self.seconds_left = self.seconds_left.saturating_sub(1);
    }

    /// Throw the current game away and start over in the same mode.
    /// The session clock keeps running.
    pub fn restart(&mut self) {
        log::info!(
            "restarting {} game (final score {})",
            self.cfg.mode.as_str(),
            self.state.score()
        );
        self.state = Self::fresh_state(self.cfg.mode, &mut self.rng);
        self.direction = INITIAL_DIRECTION;
    }

    pub fn request_exit(&mut self) {
        if self.exit.is_none() {
            log::info!("exit requested with score {}", self.state.score());
            self.exit = Some(ExitReason::Requested);
        }
    }

    /// Fire every timer that is due at `now`, each at most once.
    pub fn advance(&mut self, now: Instant) -> Control {
        if let Some(reason) = self.exit {
            return Control::Exit(reason);
        }
        if self.exit_timer.expired(now) {
            log::info!("time is up, score {}", self.state.score());
            self.seconds_left = 0;
            self.exit = Some(ExitReason::TimeUp);
            return Control::Exit(ExitReason::TimeUp);
        }
        if self.tick_timer.fire(now) {
            self.tick();
        }
        if self.countdown_timer.fire(now) {
            self.countdown();
        }
        Control::Continue
    }

    /// How long a driver may wait for input before the next timer is due.
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        [self.tick_timer.next, self.countdown_timer.next, self.exit_timer.at]
            .into_iter()
            .min()
            .map(|at| at.saturating_duration_since(now))
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut walls: Vec<Point> = self.state.walls().iter().copied().collect();
        walls.sort_by_key(|p| (p.y, p.x));
        Snapshot {
            snake: self.state.snake().iter().copied().collect(),
            food: self.state.food(),
            walls,
            exit: self.state.exit(),
            phase: self.state.phase(),
            score: self.state.score(),
            level: self.state.level(),
            game_over: self.state.is_game_over(),
            death: self.state.death_reason(),
            seconds_left: self.seconds_left,
        }
    }
}
