use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use std::time::Duration;

/// Sound cues raised by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    PlayerShot,
    EnemyShot,
    PlayerHit,
    EnemyDestroyed,
}

/// A short fixed-pitch beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: Duration,
}

impl SoundEffect {
    pub fn tone(self) -> Tone {
        let (frequency, millis) = match self {
            SoundEffect::PlayerShot => (440.0, 50),
            SoundEffect::EnemyShot => (180.0, 80),
            SoundEffect::PlayerHit => (110.0, 200),
            SoundEffect::EnemyDestroyed => (660.0, 50),
        };
        Tone {
            frequency,
            duration: Duration::from_millis(millis),
        }
    }
}

/// Audio manager for playing sound effects
pub struct AudioManager {
    /// Kept alive for as long as tones should play; None when audio is unavailable
    output: Option<(OutputStream, OutputStreamHandle)>,
    volume: f32,
}

impl AudioManager {
    /// Opens the default output device. Failure leaves the manager silent.
    pub fn new(enabled: bool) -> Self {
        let output = if enabled {
            match OutputStream::try_default() {
                Ok(output) => Some(output),
                Err(err) => {
                    log::warn!("Failed to initialize audio, continuing without sound: {err}");
                    None
                }
            }
        } else {
            log::info!("Sound disabled by config");
            None
        };

        Self {
            output,
            volume: 0.1,
        }
    }

    /// A manager that never opens a device
    pub fn silent() -> Self {
        Self {
            output: None,
            volume: 0.0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.output.is_some()
    }

    pub fn play(&self, effect: SoundEffect) {
        self.play_tone(effect.tone());
    }

    /// Fire-and-forget tone; playback errors are ignored
    pub fn play_tone(&self, tone: Tone) {
        let Some((_, handle)) = &self.output else {
            return;
        };

        if let Ok(sink) = Sink::try_new(handle) {
            sink.set_volume(self.volume);
            sink.append(
                SineWave::new(tone.frequency)
                    .take_duration(tone.duration)
                    .fade_in(Duration::from_millis(2)),
            );
            sink.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_tones() {
        let tone = SoundEffect::PlayerShot.tone();
        assert_eq!(tone.frequency, 440.0);
        assert_eq!(tone.duration, Duration::from_millis(50));

        assert_eq!(SoundEffect::EnemyShot.tone().frequency, 180.0);
        assert_eq!(SoundEffect::PlayerHit.tone().duration, Duration::from_millis(200));
        assert_eq!(SoundEffect::EnemyDestroyed.tone().frequency, 660.0);
    }

    #[test]
    fn test_silent_manager_ignores_playback() {
        let audio = AudioManager::silent();
        assert!(!audio.is_enabled());
        audio.play(SoundEffect::PlayerHit);
    }
}
