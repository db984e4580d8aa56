use color_eyre::Result;
use rand::rngs::ThreadRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::config::GameConfig;
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::session::Session;

/// The main application which holds the state and logic of the application.
pub struct App {
    running: bool,
    session: Session,
    /// Frame pacing
    frame_interval: Duration,
    started: Instant,
    last_frame_time: Instant,
    rng: ThreadRng,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: GameConfig, reports_release: bool) -> Self {
        let now = Instant::now();
        let audio_manager = AudioManager::new(config.sound);
        log::info!(
            "Audio {}",
            if audio_manager.is_enabled() { "enabled" } else { "disabled" }
        );
        Self {
            running: true,
            frame_interval: Duration::from_millis(config.frame_ms),
            started: now,
            last_frame_time: now,
            rng: rand::rng(),
            input_manager: InputManager::new(reports_release),
            renderer: GameRenderer::new(config.star_count),
            audio_manager,
            session: Session::new(config),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            let now = Instant::now();
            let dt_ms = now.duration_since(self.last_frame_time).as_secs_f64() * 1000.0;
            self.last_frame_time = now;
            let now_ms = now.duration_since(self.started).as_secs_f64() * 1000.0;

            // Poll input events and get actions
            self.input_manager.poll_events(self.session.state())?;
            for action in self.input_manager.take_actions() {
                self.process_action(action);
            }

            // Held keys are sampled once so the whole step sees the same snapshot
            let controls = self.input_manager.controls(now);
            let sounds = self
                .session
                .update(controls, dt_ms, now_ms, &mut self.rng);
            for sound in sounds {
                self.audio_manager.play(sound);
            }

            terminal.draw(|frame| {
                let view = RenderView::new(self.session.world(), frame.area());
                self.renderer.render(frame, &view);
            })?;

            std::thread::sleep(self.frame_interval);
        }
        Ok(())
    }

    fn process_action(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
            InputAction::Restart => {
                self.session.restart();
            }
        }
    }
}
