use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::input::direction_by_touch;
use grid_snake::render::{Tile, tiles};
use grid_snake::{
    Control, DeathReason, Direction, ExitReason, Mode, Phase, Session, SessionConfig, Snapshot,
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliMode {
    /// Endless snake on an open board
    Classic,
    /// Maze levels: eat the food, then find the exit
    Special,
}

impl From<CliMode> for Mode {
    fn from(m: CliMode) -> Self {
        match m {
            CliMode::Classic => Mode::Classic,
            CliMode::Special => Mode::Special,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake in the terminal")]
struct Args {
    #[arg(long, value_enum, default_value = "classic")]
    mode: CliMode,

    /// Seed for food placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
    let args = Args::parse();

    // --- Init terminal ---
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
    terminal.clear()?;

    let cfg = SessionConfig {
        mode: args.mode.into(),
        seed: args.seed,
        ..SessionConfig::default()
    };
    let res = run(&mut terminal, Session::new(cfg));

    // --- Restore terminal even on error ---
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    let (reason, score) = res?;
    match reason {
        ExitReason::Requested => println!("Final score: {score}"),
        ExitReason::TimeUp => println!("Time is up! Final score: {score}"),
    }
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut session: Session,
) -> Result<(ExitReason, u32)> {
    loop {
        // --- Input (non-blocking) ---
        let timeout = session.next_wakeup(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(&mut session, key),
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    let (w, h) = crossterm::terminal::size()?;
                    session.set_direction(direction_by_touch(
                        f32::from(mouse.column),
                        f32::from(mouse.row),
                        f32::from(w),
                        f32::from(h),
                    ));
                }
                _ => {}
            }
        }

        // --- Timers ---
        if let Control::Exit(reason) = session.advance(Instant::now()) {
            return Ok((reason, session.state().score()));
        }

        // --- Render ---
        let snap = session.snapshot();
        terminal.draw(|f| draw(f, &snap))?;
    }
}

fn handle_key(session: &mut Session, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => session.request_exit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            session.request_exit()
        }

        KeyCode::Up | KeyCode::Char('k') => {
            session.set_direction(Direction::Up);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            session.set_direction(Direction::Down);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            session.set_direction(Direction::Left);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            session.set_direction(Direction::Right);
        }

        // Restart after death
        KeyCode::Char('r') => {
            if session.state().is_game_over() {
                session.restart();
            }
        }

        _ => {}
    }
}

fn tile_style(tile: Tile) -> Style {
    let fg = match tile {
        Tile::Empty => Color::DarkGray,
        Tile::Wall => Color::Gray,
        Tile::Head => Color::LightGreen,
        Tile::Body => Color::Green,
        Tile::Food => Color::LightRed,
        Tile::ExitLocked => Color::DarkGray,
        Tile::ExitOpen => Color::LightYellow,
    };
    Style::default().fg(fg)
}

fn draw(f: &mut ratatui::Frame, snap: &Snapshot) {
    let area = f.area();

    let mut title = format!(" Snake | score: {} ", snap.score);
    if let Some(level) = snap.level {
        let goal = match snap.phase {
            Phase::Food => "eat the food",
            Phase::Exit => "find the exit",
        };
        title.push_str(&format!("| level {level}: {goal} "));
    }

    let mut lines: Vec<Line> = tiles(snap)
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|t| Span::styled(t.glyph(), tile_style(t)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();
    lines.push(Line::from(format!("auto exit in {}s", snap.seconds_left)));
    lines.push(if let Some(reason) = snap.death.filter(|_| snap.game_over) {
        let cause = match reason {
            DeathReason::Boundary => "hit the edge",
            DeathReason::SelfCollision => "bit itself",
            DeathReason::Obstacle => "hit a wall",
        };
        Line::from(
            format!("Game over, {cause}! Final score: {}  (r) restart  (q) quit", snap.score)
                .bold(),
        )
    } else {
        Line::from("arrows/hjkl or click to steer, q to quit")
    });

    // Board is two characters per cell plus the border.
    let inner_w = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let outer_w = inner_w.saturating_add(2);
    let outer_h = (lines.len() as u16).saturating_add(2);
    let x = area.x.saturating_add(area.width.saturating_sub(outer_w) / 2);
    let y = area.y.saturating_add(area.height.saturating_sub(outer_h) / 2);
    let frame_area = Rect::new(x, y, outer_w.min(area.width), outer_h.min(area.height));

    let block = Block::default().borders(Borders::ALL).title(title.bold());
    let para = Paragraph::new(lines).block(block).alignment(Alignment::Left);
    f.render_widget(para, frame_area);
}
