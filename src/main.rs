//! Terminal playroom runner (default binary).
//!
//! This is the primary gameplay entrypoint: the color sequence recall
//! game. It uses crossterm for input and a custom framebuffer-based
//! renderer (no ratatui widgets/layout).

use std::env;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_playroom::audio::{AudioConfig, Beeper, Chime, Narrator, NullVoice};
use tui_playroom::core::{RecallGame, RecallSnapshot};
use tui_playroom::input::{handle_key_event, should_quit};
use tui_playroom::term::{FrameBuffer, HudView, RecallView, TerminalRenderer, Viewport};
use tui_playroom::types::{RecallAction, RecallEvent, CELEBRATE_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Session seed: `PLAYROOM_SEED` if set, otherwise the wall clock.
fn session_seed() -> u32 {
    env::var("PLAYROOM_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(1)
        })
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = session_seed();
    let mut game = RecallGame::new(seed);

    let config = AudioConfig::from_env();
    // Sound is best-effort; a machine without an audio device plays silently.
    let beeper = Beeper::new().ok();
    let mut narrator = Narrator::new(Box::new(NullVoice), config.tuning, seed);
    narrator.set_enabled(config.voice_enabled);
    let mut tones_enabled = config.tones_enabled;

    let view = RecallView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = RecallSnapshot::default();

    // Transient HUD state fed back into the view each frame.
    let mut caption: Option<&'static str> = None;
    let mut celebrate_ms: u32 = 0;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let hud = HudView {
            caption: if narrator.enabled() { caption } else { None },
            celebrate_ms,
            tones_enabled,
            voice_enabled: narrator.enabled(),
        };
        view.render_into_with_hud(&snap, Some(&hud), Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(action) = handle_key_event(key) {
                            match action {
                                RecallAction::Pad(hue) => {
                                    // Accepted presses echo the pad's tone,
                                    // right and wrong alike.
                                    if game.press(hue) && tones_enabled {
                                        if let Some(beeper) = &beeper {
                                            beeper.play(hue.note());
                                        }
                                    }
                                }
                                RecallAction::Start => {
                                    if game.start_round(game.suggested_length()) {
                                        caption = None;
                                    }
                                }
                                RecallAction::Reset => {
                                    game.reset_session();
                                    caption = None;
                                    celebrate_ms = 0;
                                }
                                RecallAction::ToggleVoice => {
                                    narrator.set_enabled(!narrator.enabled());
                                }
                                RecallAction::ToggleTones => {
                                    tones_enabled = !tones_enabled;
                                }
                            }
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
            celebrate_ms = celebrate_ms.saturating_sub(TICK_MS);
        }

        // React to whatever the game reported this pass.
        if let Some(ev) = game.take_last_event() {
            match ev {
                RecallEvent::StepLit { hue, .. } => {
                    if tones_enabled {
                        if let Some(beeper) = &beeper {
                            beeper.play(hue.note());
                        }
                    }
                }
                RecallEvent::InputOpen => {}
                RecallEvent::RoundWon { celebrate, .. } => {
                    caption = Some(if celebrate {
                        celebrate_ms = CELEBRATE_MS;
                        narrator.level_complete()
                    } else {
                        narrator.excellent()
                    });
                }
                RecallEvent::RoundLost { .. } => {
                    caption = Some(narrator.encouragement());
                }
            }
        }
    }
}
