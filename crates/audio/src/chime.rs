//! Pad chimes - short sine tones through the default output device
//!
//! Every tone gets its own detached sink, so overlapping presses mix
//! instead of cutting each other off. Playback failures degrade to
//! silence; a learning game never dies over a beep.

use std::time::Duration;

use anyhow::Result;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tui_playroom_types::{Note, TONE_GAIN, TONE_MS};

/// Something that can sound a pad tone.
pub trait Chime {
    fn play(&self, note: Note);
}

/// Silent chime for muted or headless hosts.
#[derive(Debug, Default)]
pub struct NullChime;

impl Chime for NullChime {
    fn play(&self, _note: Note) {}
}

/// Sine-wave tones on the default audio device.
pub struct Beeper {
    // The stream must outlive its handle for sound to come out.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    gain: f32,
}

impl Beeper {
    /// Open the default output device. Fails where no device exists;
    /// callers usually downgrade that to silence with `.ok()`.
    pub fn new() -> Result<Self> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
            gain: TONE_GAIN,
        })
    }

    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }
}

impl Chime for Beeper {
    fn play(&self, note: Note) {
        // A sink that cannot be made right now is just a missed beep
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        let tone = SineWave::new(note.frequency_hz())
            .take_duration(Duration::from_millis(TONE_MS as u64))
            .amplify(self.gain);
        sink.append(tone);
        sink.detach();
    }
}
