use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};

use crate::chip8_vm::error::MachineError;

const TONE_HZ: f32 = 1440.0;
const TONE_VOLUME: f32 = 0.2;

/// Owns the audio device and a paused tone. The run loop reports whether the
/// sound timer is positive and the tone starts and stops on that edge.
pub struct Beeper {
    _stream: OutputStream,
    sink: Sink,
    is_beeping: bool,
}

impl Beeper {
    pub fn new() -> Result<Self, MachineError> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|error| MachineError::Audio(error.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|error| MachineError::Audio(error.to_string()))?;

        sink.append(SineWave::new(TONE_HZ).amplify(TONE_VOLUME));
        sink.pause();

        Ok(Self {
            _stream: stream,
            sink,
            is_beeping: false,
        })
    }

    pub fn update(&mut self, sound_active: bool) {
        if sound_active && !self.is_beeping {
            self.sink.play();
            self.is_beeping = true;
        } else if !sound_active && self.is_beeping {
            self.sink.pause();
            self.is_beeping = false;
        }
    }
}
