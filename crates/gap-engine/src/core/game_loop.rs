use crate::api::game::GapGame;
use crate::api::types::{Phase, StepOutcome};
use crate::core::time::TickAccumulator;
use crate::input::queue::{InputEvent, InputQueue};
use crate::persistence::store::ScoreStore;
use crate::renderer::traits::Renderer;

/// What happened during one render callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Simulation ticks run this frame.
    pub ticks: u32,
    /// Outcome of the last tick, if any ran.
    pub outcome: Option<StepOutcome>,
}

/// Drives a [`GapGame`] from a render clock.
///
/// Each call to [`GameLoop::frame`] takes the host's timestamp, applies queued
/// input, turns the elapsed time into ticks at the current fall interval and
/// hands a view to the renderer exactly once.
pub struct GameLoop<S: ScoreStore> {
    game: GapGame<S>,
    input: InputQueue,
    clock: TickAccumulator,
    /// Timestamp of the previous frame; `None` right after a start or resume.
    last_time: Option<f64>,
    phase_seen: Phase,
    session_seen: u32,
}

impl<S: ScoreStore> GameLoop<S> {
    pub fn new(game: GapGame<S>) -> Self {
        let clock = TickAccumulator::new(game.config().max_frame_delta_ms);
        Self {
            phase_seen: game.phase(),
            session_seen: game.sessions_started(),
            game,
            input: InputQueue::new(),
            clock,
            last_time: None,
        }
    }

    /// Queue an input event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one render callback at host time `now_ms`.
    pub fn frame<R: Renderer + ?Sized>(&mut self, now_ms: f64, renderer: &mut R) -> FrameReport {
        for event in self.input.drain() {
            self.apply(event);
        }
        self.sync_phase();

        let mut report = FrameReport::default();
        let elapsed = match self.last_time {
            Some(last) => (now_ms - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now_ms);

        if self.game.phase() == Phase::Running {
            self.clock
                .set_max_frame_delta(self.game.config().max_frame_delta_ms);
            self.clock.add_frame(elapsed);
            while self.clock.try_consume(self.game.fall_interval()) {
                let Some(outcome) = self.game.step() else {
                    break;
                };
                report.ticks += 1;
                report.outcome = Some(outcome);
                if outcome == StepOutcome::GameOver {
                    break;
                }
            }
            self.sync_phase();
        }

        renderer.draw(&self.game.view(self.tick_alpha()));
        self.game.clear_events();
        report
    }

    // ---- Host entry points ----

    pub fn start(&mut self) {
        self.game.start();
        self.sync_phase();
    }

    pub fn toggle_pause(&mut self) {
        self.game.toggle_pause();
        self.sync_phase();
    }

    pub fn pause(&mut self) {
        self.game.pause();
        self.sync_phase();
    }

    pub fn resume(&mut self) {
        self.game.resume();
        self.sync_phase();
    }

    pub fn move_by(&mut self, dx: i32) {
        self.game.move_by(dx);
    }

    pub fn game(&self) -> &GapGame<S> {
        &self.game
    }

    /// Mutable access for configuration changes. Lifecycle changes made
    /// through it are picked up on the next frame.
    pub fn game_mut(&mut self) -> &mut GapGame<S> {
        &mut self.game
    }

    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    /// Progress toward the next tick in `[0, 1]`. Zero without a session.
    pub fn tick_alpha(&self) -> f32 {
        if self.game.is_running() {
            self.clock.alpha(self.game.fall_interval())
        } else {
            0.0
        }
    }

    /// Time accumulated toward the next tick, in milliseconds.
    pub fn pending_ms(&self) -> f32 {
        self.clock.pending()
    }

    fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Move { dx } => self.game.move_by(dx),
            InputEvent::StartOrTogglePause => self.game.start_or_toggle_pause(),
            InputEvent::Start => {
                if !self.game.is_running() {
                    self.game.start();
                }
            }
            InputEvent::TogglePause => self.game.toggle_pause(),
            InputEvent::Swipe { dx_px } => {
                if let Some(dx) = InputEvent::swipe_move(dx_px) {
                    self.game.move_by(dx);
                }
            }
            InputEvent::ClearBest => self.game.clear_best(),
        }
        self.sync_phase();
    }

    /// React to lifecycle transitions: a new session starts with an empty
    /// accumulator, pausing freezes it, resuming forgets the paused wall time.
    fn sync_phase(&mut self) {
        let session = self.game.sessions_started();
        if session != self.session_seen {
            self.session_seen = session;
            self.clock.reset();
            self.last_time = None;
        } else if self.phase_seen == Phase::Paused && self.game.phase() == Phase::Running {
            self.last_time = None;
        }
        self.phase_seen = self.game.phase();
    }
}
