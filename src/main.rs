mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use platformer::audio::{sink_for, AudioSink};
use platformer::compute::{init_state, restart, tick, toggle_pause};
use platformer::config::{settings_path, Settings};
use platformer::debug::{CollisionSampler, TickInspector};
use platformer::entities::{GameEvent, GameSession, GameStatus};
use platformer::error::{GameError, GameResult};
use platformer::input::{Command, KeyTracker};

use display::{Hud, Viewport};

/// Share of player overlaps the collision sampler writes to the log.
const COLLISION_SAMPLE_RATE: f64 = 0.1;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to a file: the terminal belongs to the game.  `RUST_LOG` overrides
/// the default `info` filter.
fn init_logging(path: &Path) -> GameResult<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Everything the loop owns besides the session itself.
struct Frontend {
    view: Viewport,
    hud: Hud,
    audio: Box<dyn AudioSink>,
    inspectors: Vec<Box<dyn TickInspector>>,
    debug_overlay: bool,
}

impl Frontend {
    /// Hand a tick's events to the HUD and the audio sink.
    fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Sound(cue) => self.audio.play(*cue),
                other => self.hud.apply(other),
            }
        }
    }
}

/// Runs until the player quits.
///
/// Input model: key events only update the `KeyTracker`; once per frame the
/// tracker is turned into an `InputState` snapshot, so several keys can be
/// held at once.  One-shot keys (pause, restart, debug, quit) act as soon as
/// they are read.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameSession,
    ui: &mut Frontend,
    rx: &mpsc::Receiver<Event>,
    frame_len: Duration,
) -> GameResult<()> {
    let mut rng = thread_rng();
    let mut keys = KeyTracker::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(key) => match keys.handle(key, frame) {
                    Some(Command::Quit) => {
                        info!(score = state.score, "quit");
                        return Ok(());
                    }
                    Some(Command::TogglePause) => *state = toggle_pause(state),
                    Some(Command::Restart) if state.status.is_terminal() => {
                        *state = restart(state);
                        keys.clear();
                        ui.dispatch(&state.events);
                    }
                    Some(Command::ToggleDebug) => {
                        ui.debug_overlay = !ui.debug_overlay;
                        debug!(on = ui.debug_overlay, "debug overlay toggled");
                    }
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    ui.view.cols = cols;
                    ui.view.rows = rows;
                    let (w, h) = ui.view.world_size();
                    state.camera.viewport_width = w;
                    state.camera.viewport_height = h;
                }
                _ => {}
            }
        }

        // ── Simulate ──────────────────────────────────────────────────────────
        let input = keys.snapshot(frame);
        *state = tick(state, &input, &mut rng);

        if ui.debug_overlay && state.status == GameStatus::Playing {
            for inspector in ui.inspectors.iter_mut() {
                inspector.inspect(state);
            }
        }
        ui.dispatch(&state.events);

        display::render(out, state, &ui.hud, &ui.view, ui.debug_overlay)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_len {
            std::thread::sleep(frame_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> GameResult<()> {
    let path = settings_path();
    let loaded = Settings::load_from(&path);
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&settings.log_file)?;
    match &loaded {
        Ok(s) => info!(path = %path.display(), ?s, "settings loaded"),
        Err(e) => warn!("{e}; using defaults"),
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    info!(keyboard_enhanced, "terminal ready");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx, &settings);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        tracing::error!("{e}");
    }
    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, settings: &Settings) -> GameResult<()> {
    let (cols, rows) = terminal::size()?;
    let view = Viewport::new(cols, rows, settings.cell_width, settings.cell_height);
    let (w, h) = view.world_size();
    let mut state = init_state(w, h);

    let mut ui = Frontend {
        view,
        hud: Hud::new(&state),
        audio: sink_for(settings.sound),
        inspectors: vec![Box::new(CollisionSampler::new(
            StdRng::from_entropy(),
            COLLISION_SAMPLE_RATE,
        ))],
        debug_overlay: settings.debug_overlay,
    };

    info!(cols, rows, "session started");
    game_loop(
        out,
        &mut state,
        &mut ui,
        rx,
        Duration::from_millis(settings.frame_ms),
    )
}
