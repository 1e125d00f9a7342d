use std::fs::{self, File};
use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{info, warn};
use ratatui::layout::Rect;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use snake_arcade::config::{
    FLASH_MS, FRAME_INTERVAL_MS, GRID, MAX_FRAME_DELTA_MS, ROUND_END_PAUSE_MS, THEME_GARDEN,
};
use snake_arcade::effects::PresentationState;
use snake_arcade::game::{RoundState, TickStatus};
use snake_arcade::input::{GameInput, InputHandler};
use snake_arcade::renderer::{self, FrameView};
use snake_arcade::score::HighScoreStore;
use snake_arcade::screen::{transition, Screen, ScreenEvent, Transition};
use snake_arcade::terminal_runtime::{
    restore_terminal_best_effort, AppTerminal, TerminalSession,
};
use snake_arcade::ui::menu;

const APP_DIR_NAME: &str = "snake-arcade";
const LOG_FILE_NAME: &str = "snake-arcade.log";

#[derive(Debug, Parser)]
#[command(
    name = "snake-arcade",
    version,
    about = "Grid-based arcade Snake for the terminal"
)]
struct Cli {
    /// Play the wrap variant: every meal reverses the snake onto its own path.
    #[arg(long)]
    wrap: bool,

    /// Seed the simulation RNG for reproducible rounds.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_file_logging();
    install_panic_hook();
    info!("starting snake-arcade (wrap={})", cli.wrap);

    let mut session = TerminalSession::enter()?;
    let result = run(session.terminal_mut(), &cli);
    drop(session);
    result
}

/// Everything the outer loop owns across screens.
struct App {
    screen: Screen,
    round: RoundState,
    paused: bool,
    final_score: u32,
    high_score: u32,
    store: HighScoreStore,
    presentation: PresentationState,
    accumulator: Duration,
    wrap_mode: bool,
    seed: Option<u64>,
}

impl App {
    fn fresh_round(&self) -> RoundState {
        match self.seed {
            Some(seed) => RoundState::new_with_seed(GRID, self.wrap_mode, seed),
            None => RoundState::new(GRID, self.wrap_mode),
        }
    }
}

fn run(terminal: &mut AppTerminal, cli: &Cli) -> io::Result<()> {
    let store = HighScoreStore::at_default_location();
    let high_score = store.load();
    info!("loaded high score {high_score}");

    let round = match cli.seed {
        Some(seed) => RoundState::new_with_seed(GRID, cli.wrap, seed),
        None => RoundState::new(GRID, cli.wrap),
    };
    let mut app = App {
        screen: Screen::Playing,
        round,
        paused: false,
        final_score: 0,
        high_score,
        store,
        presentation: PresentationState::new(),
        accumulator: Duration::ZERO,
        wrap_mode: cli.wrap,
        seed: cli.seed,
    };

    let mut input = InputHandler::new();
    let max_frame_delta = Duration::from_millis(MAX_FRAME_DELTA_MS);
    let mut last_frame = Instant::now();

    'frames: loop {
        app.presentation.advance_frame();
        draw(terminal, &app, false)?;

        // Input is polled once per frame; direction requests within one frame
        // collapse to the latest one before the next tick.
        let board = current_board(terminal)?;
        for event in input.poll_frame()? {
            let Some(screen_event) = handle_input(&mut app, event, board) else {
                continue;
            };
            match transition(app.screen, screen_event) {
                Transition::Terminate => break 'frames,
                Transition::SwitchTo(Screen::Playing) => {
                    app.round = app.fresh_round();
                    app.paused = false;
                    app.accumulator = Duration::ZERO;
                    app.presentation.clear_effects();
                    app.screen = Screen::Playing;
                    info!("round restarted");
                }
                Transition::SwitchTo(next) => app.screen = next,
                Transition::Stay => {}
            }
        }

        // Fixed-timestep accumulation. The paused sub-state adds nothing, so
        // wall-clock time spent paused is discarded rather than replayed.
        let now = Instant::now();
        let frame_delta = now.duration_since(last_frame).min(max_frame_delta);
        last_frame = now;

        if app.screen == Screen::Playing && !app.paused {
            app.accumulator += frame_delta;
            loop {
                let interval = app.round.tick_interval();
                if app.accumulator < interval {
                    break;
                }
                app.accumulator -= interval;

                let result = app.round.tick();
                app.presentation.absorb(&result.events);
                if let TickStatus::RoundOver { final_score } = result.status {
                    finish_round(terminal, &mut app, final_score)?;
                    break;
                }
            }
        }

        thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
    }

    info!("session ended");
    Ok(())
}

/// Translates an input event in the context of the current screen. Returns a
/// screen-machine event when the input should move the machine.
fn handle_input(app: &mut App, input: GameInput, board: Rect) -> Option<ScreenEvent> {
    match (app.screen, input) {
        (_, GameInput::Quit) => Some(ScreenEvent::Quit),
        // The alternate screen already fills the terminal.
        (_, GameInput::ToggleFullscreen) => None,
        (Screen::Playing, GameInput::Direction(direction)) => {
            if !app.paused {
                app.round.request_direction(direction);
            }
            None
        }
        (Screen::Playing, GameInput::Pause) => {
            app.paused = !app.paused;
            info!("pause toggled: {}", app.paused);
            None
        }
        (Screen::RoundEnded, GameInput::Confirm) => Some(ScreenEvent::Replay),
        (Screen::RoundEnded, GameInput::Click { column, row }) => {
            menu::round_ended_hit(board, column, row)
        }
        (Screen::ShowHighScore, GameInput::Confirm) => Some(ScreenEvent::Back),
        (Screen::ShowHighScore, GameInput::Click { column, row }) => {
            menu::high_score_hit(board, column, row)
        }
        _ => None,
    }
}

/// Ends the round: persists a beaten high score, plays the flash-and-hold
/// finale, and moves the machine to the round-ended screen.
fn finish_round(terminal: &mut AppTerminal, app: &mut App, final_score: u32) -> io::Result<()> {
    info!("round over with score {final_score}");
    app.final_score = final_score;
    if final_score > app.high_score {
        app.high_score = final_score;
        if let Err(error) = app.store.save(final_score) {
            warn!("failed to persist high score: {error}");
        }
    }

    draw(terminal, app, true)?;
    thread::sleep(Duration::from_millis(FLASH_MS));
    draw(terminal, app, false)?;
    thread::sleep(Duration::from_millis(ROUND_END_PAUSE_MS));

    if let Transition::SwitchTo(next) = transition(app.screen, ScreenEvent::RoundOver) {
        app.screen = next;
    }
    app.accumulator = Duration::ZERO;
    app.paused = false;
    Ok(())
}

fn draw(terminal: &mut AppTerminal, app: &App, flash: bool) -> io::Result<()> {
    let progress = if app.screen == Screen::Playing {
        let interval = app.round.tick_interval().as_secs_f32();
        (app.accumulator.as_secs_f32() / interval).clamp(0.0, 1.0)
    } else {
        1.0
    };

    terminal.draw(|frame| {
        renderer::render(
            frame,
            &FrameView {
                screen: app.screen,
                round: &app.round,
                paused: app.paused,
                progress,
                high_score: app.high_score,
                final_score: app.final_score,
                presentation: &app.presentation,
                theme: &THEME_GARDEN,
                flash,
            },
        )
    })?;
    Ok(())
}

/// The board rectangle for the current terminal size, used to map clicks.
fn current_board(terminal: &AppTerminal) -> io::Result<Rect> {
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);
    Ok(renderer::board_layout(area, GRID).board)
}

fn init_file_logging() {
    let Some(mut dir) = dirs::data_local_dir() else {
        return;
    };
    dir.push(APP_DIR_NAME);
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join(LOG_FILE_NAME)) else {
        return;
    };
    let _ = WriteLogger::init(LevelFilter::Info, LogConfig::default(), file);
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_best_effort();
        default_hook(panic_info);
    }));
}
