//! Crossterm front-end for interactive playback.
//!
//! [`TerminalDriver`] owns the terminal while a [`Playback`] runs: it switches
//! to the alternate screen in raw mode, draws the maze with one coloured cell
//! per position, and feeds key presses and timer ticks into the playback. The
//! terminal is restored when the driver is dropped.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use jumpmaze_core::{Maze, Pos};
use jumpmaze_playback::{CellMark, Playback, PlaybackAction};

/// How long to wait for input while paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Smallest and largest delay reachable with the speed keys.
const MIN_INTERVAL: Duration = Duration::from_millis(10);
const MAX_INTERVAL: Duration = Duration::from_millis(2000);

const HELP: &str = "space play/pause  \u{2192}/n next  \u{2190}/b back  +/- speed  q quit";

/// Something the user asked for with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Faster,
    Slower,
    Playback(PlaybackAction),
}

/// Map a key press to an [`Input`].
pub fn key_input(code: KeyCode, modifiers: KeyModifiers) -> Option<Input> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }
    let input = match code {
        KeyCode::Char('q') | KeyCode::Esc => Input::Quit,
        KeyCode::Char(' ') | KeyCode::Char('p') => Input::Playback(PlaybackAction::TogglePause),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            Input::Playback(PlaybackAction::Next)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('b') => {
            Input::Playback(PlaybackAction::Back)
        }
        KeyCode::Char('+') | KeyCode::Char('=') => Input::Faster,
        KeyCode::Char('-') => Input::Slower,
        _ => return None,
    };
    Some(input)
}

/// Background and foreground colours of a cell.
pub fn cell_colors(maze: &Maze, mark: CellMark, p: Pos) -> (Color, Color) {
    let rgb = |r, g, b| Color::Rgb { r, g, b };
    match mark {
        CellMark::Plain => (rgb(100, 100, 100), Color::Black),
        CellMark::Start => (rgb(100, 100, 255), Color::White),
        CellMark::Goal => (rgb(0, 180, 0), Color::White),
        CellMark::Visited => (rgb(0, 255, 255), Color::Black),
        CellMark::Frontier => (rgb(255, 165, 0), Color::Black),
        CellMark::Current => (rgb(255, 0, 0), Color::White),
        // Path endpoints are drawn darker so they stay recognisable.
        CellMark::Path if p == maze.start() => (rgb(100, 0, 100), Color::White),
        CellMark::Path if p == maze.goal() => (rgb(0, 100, 0), Color::White),
        CellMark::Path => (rgb(128, 0, 128), Color::White),
    }
}

/// Terminal session running a playback.
pub struct TerminalDriver {
    out: Stdout,
}

impl TerminalDriver {
    /// Take over the terminal.
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        log::debug!("terminal initialised");
        Ok(Self { out })
    }

    /// Run `playback` until the user quits.
    pub fn run(&mut self, title: &str, maze: &Maze, playback: &mut Playback) -> io::Result<()> {
        let mut dirty = true;
        loop {
            if dirty {
                self.draw(title, maze, playback)?;
                dirty = false;
            }

            let timeout = playback
                .next_deadline()
                .map_or(IDLE_POLL, |d| d.saturating_duration_since(Instant::now()));
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(KeyEvent {
                        code,
                        modifiers,
                        kind: KeyEventKind::Press,
                        ..
                    }) => match key_input(code, modifiers) {
                        Some(Input::Quit) => return Ok(()),
                        Some(Input::Faster) => {
                            let d = (playback.interval() / 2).max(MIN_INTERVAL);
                            playback.set_interval(d);
                            dirty = true;
                        }
                        Some(Input::Slower) => {
                            let d = (playback.interval() * 2).min(MAX_INTERVAL);
                            playback.set_interval(d);
                            dirty = true;
                        }
                        Some(Input::Playback(action)) => {
                            playback.update(action, Instant::now());
                            dirty = true;
                        }
                        None => {}
                    },
                    Event::Resize(..) => {
                        execute!(self.out, terminal::Clear(ClearType::All))?;
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if playback.tick(Instant::now()) {
                dirty = true;
            }
        }
    }

    fn draw(&mut self, title: &str, maze: &Maze, playback: &Playback) -> io::Result<()> {
        let step = playback.current();
        let width = maze
            .iter()
            .map(|(_, v)| v.to_string().len())
            .max()
            .unwrap_or(1);

        queue!(self.out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        queue!(
            self.out,
            Print(format!(
                "{title}  {}x{}  start {}  goal {}",
                maze.rows(),
                maze.cols(),
                maze.start(),
                maze.goal()
            ))
        )?;

        let mut y: u16 = 2;
        for r in 0..maze.rows() {
            queue!(self.out, cursor::MoveTo(0, y))?;
            for c in 0..maze.cols() {
                let p = Pos::new(r, c);
                let mark = CellMark::classify(maze, step, p);
                let (bg, fg) = cell_colors(maze, mark, p);
                queue!(
                    self.out,
                    SetBackgroundColor(bg),
                    SetForegroundColor(fg),
                    Print(format!(" {:>width$} ", maze.jump_value(p))),
                    ResetColor
                )?;
            }
            y = y.saturating_add(1);
        }

        let history = playback.search().history();
        let position = history
            .cursor()
            .map_or_else(|| "-".to_string(), |i| i.to_string());
        y = y.saturating_add(1);
        queue!(
            self.out,
            cursor::MoveTo(0, y),
            Print(format!(
                "step {position}/{}  {}ms  {}",
                history.len().saturating_sub(1),
                playback.interval().as_millis(),
                playback.status_line()
            )),
            cursor::MoveTo(0, y.saturating_add(1)),
            Print(HELP)
        )?;
        self.out.flush()
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}
