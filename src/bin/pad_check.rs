//! Pad input diagnostic (secondary binary).
//!
//! Runs the terminal in raw mode, echoes every mapped action, and plays
//! the matching tone for pad presses. Handy for checking a terminal's
//! key handling or an audio setup without starting the game proper.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_playroom::audio::{Beeper, Chime};
use tui_playroom::input::{handle_key_event, should_quit};
use tui_playroom::types::RecallAction;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = run();
    let _ = terminal::disable_raw_mode();
    result
}

fn run() -> Result<()> {
    let beeper = Beeper::new().ok();

    // Raw mode does not translate newlines, hence the explicit \r\n.
    print!("pad-check: press keys to see their actions, q to quit\r\n");
    match &beeper {
        Some(_) => print!("audio: output device ready\r\n"),
        None => print!("audio: no output device, tones are off\r\n"),
    }

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                print!("bye\r\n");
                return Ok(());
            }

            match handle_key_event(key) {
                Some(RecallAction::Pad(hue)) => {
                    print!(
                        "pad {} {} ({})\r\n",
                        hue.index() + 1,
                        hue.as_str(),
                        hue.note().as_str()
                    );
                    if let Some(beeper) = &beeper {
                        beeper.play(hue.note());
                    }
                }
                Some(RecallAction::Start) => print!("start round\r\n"),
                Some(RecallAction::Reset) => print!("reset session\r\n"),
                Some(RecallAction::ToggleVoice) => print!("toggle voice\r\n"),
                Some(RecallAction::ToggleTones) => print!("toggle tones\r\n"),
                None => print!("unmapped: {:?}\r\n", key.code),
            }
        }
    }
}
