use crate::api::config::GapConfig;
use crate::api::session::{Player, Session};
use crate::api::types::{Direction, GameEvent, Phase, StepOutcome};
use crate::core::board::Board;
use crate::core::difficulty::fall_interval_for_level;
use crate::core::rng::Rng;
use crate::core::row::{generate_row, Row};
use crate::persistence::store::{load_best_or_default, ScoreStore};
use crate::renderer::view::BoardView;
use crate::systems::step;

/// Session controller: owns the board, the player, the counters and the
/// best-score store, and exposes the operations the host may call.
pub struct GapGame<S: ScoreStore> {
    config: GapConfig,
    /// Width of the board currently in play. Config width changes apply on the next start.
    cols: usize,
    board: Board,
    player: Player,
    session: Session,
    phase: Phase,
    rng: Rng,
    store: S,
    events: Vec<GameEvent>,
    sessions_started: u32,
}

impl<S: ScoreStore> GapGame<S> {
    pub fn new(config: GapConfig, store: S) -> Self {
        let config = config.sanitized();
        let best = load_best_or_default(&store);
        Self {
            cols: config.cols,
            board: Board::new(config.rows_visible, config.judgment_row()),
            player: Player::new(config.start_column()),
            session: Session::new(&config, best),
            phase: Phase::Idle,
            rng: Rng::new(config.seed),
            store,
            events: Vec::new(),
            sessions_started: 0,
            config,
        }
    }

    /// Reset and begin a new session.
    pub fn start(&mut self) {
        self.reset();
        self.phase = Phase::Running;
        self.sessions_started = self.sessions_started.wrapping_add(1);
        self.emit(GameEvent::SESSION_STARTED, self.session.level as f32, 0.0);
        log::info!(
            "session started: {}x{} board, {} gaps, {}ms interval",
            self.cols,
            self.config.rows_visible,
            step::gaps_for_width(&self.config, 1, self.cols),
            self.session.fall_interval
        );
    }

    /// Rebuild the board and zero the counters.
    ///
    /// Fills `rows_visible - 1` rows so the first tick brings the board to
    /// capacity. With `force_start_gap`, the row that reaches the judgment slot
    /// on the first tick is opened under the player.
    pub fn reset(&mut self) {
        self.cols = self.config.cols;
        self.board = Board::new(self.config.rows_visible, self.config.judgment_row());
        let gaps = step::gaps_for_width(&self.config, 1, self.cols);
        for _ in 0..self.config.rows_visible - 1 {
            let row = generate_row(&mut self.rng, self.cols, gaps);
            self.board.push(row);
        }

        self.player = Player::new(self.config.start_column());
        self.session.reset(&self.config);

        if self.config.force_start_gap {
            let column = self.player.column;
            if let Some(row) = self.board.next_judgment_row_mut() {
                row.carve_gap(column);
            }
        }
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            self.emit(GameEvent::PAUSED, 0.0, 0.0);
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
            self.emit(GameEvent::RESUMED, 0.0, 0.0);
        }
    }

    /// Flip between running and paused. No-op without a session.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::Idle | Phase::Ended => {}
        }
    }

    /// Start when nothing is running, otherwise toggle pause.
    pub fn start_or_toggle_pause(&mut self) {
        if self.phase.is_running() {
            self.toggle_pause();
        } else {
            self.start();
        }
    }

    /// Shift the player by `dx` columns. Ignored unless the session is running.
    pub fn move_by(&mut self, dx: i32) {
        if self.phase != Phase::Running {
            return;
        }
        self.player.shift(dx, self.cols);
    }

    /// Move one column, or `fast_move` columns when `fast` is set.
    pub fn move_dir(&mut self, direction: Direction, fast: bool) {
        let magnitude = if fast { self.config.fast_move } else { 1 };
        self.move_by(direction.sign() * magnitude as i32);
    }

    /// Run one tick with a generated row. Returns `None` when not running.
    pub fn step(&mut self) -> Option<StepOutcome> {
        if self.phase != Phase::Running {
            return None;
        }
        let score = self.session.score;
        let level = self.session.level;
        let outcome = step::step(
            &mut self.board,
            &self.player,
            &mut self.session,
            &self.config,
            &mut self.rng,
            self.cols,
        );
        self.after_step(outcome, score, level);
        Some(outcome)
    }

    /// Run one tick inserting `row` as the newest row. Lets hosts replay a
    /// recorded row stream.
    pub fn step_with_row(&mut self, row: Row) -> Option<StepOutcome> {
        if self.phase != Phase::Running {
            return None;
        }
        let score = self.session.score;
        let level = self.session.level;
        let outcome = step::step_with_row(
            &mut self.board,
            &self.player,
            &mut self.session,
            &self.config,
            row,
        );
        self.after_step(outcome, score, level);
        Some(outcome)
    }

    /// Emit events and handle game over after a tick that started at `score`/`level`.
    fn after_step(&mut self, outcome: StepOutcome, score: u32, level: u32) {
        match outcome {
            StepOutcome::GameOver => self.game_over(),
            StepOutcome::Continue => {
                if self.session.score != score {
                    self.emit(GameEvent::SCORE, self.session.score as f32, 0.0);
                }
                if self.session.level != level {
                    log::debug!(
                        "level {} reached at score {}: {} gaps, {}ms interval",
                        self.session.level,
                        self.session.score,
                        step::gaps_for_width(&self.config, self.session.level, self.cols),
                        self.session.fall_interval
                    );
                    self.emit(
                        GameEvent::LEVEL_UP,
                        self.session.level as f32,
                        self.session.fall_interval,
                    );
                }
            }
        }
    }

    /// End the session: freeze it, record and persist the best score.
    pub fn game_over(&mut self) {
        if !self.phase.is_running() {
            return;
        }
        self.phase = Phase::Ended;
        self.session.record_best();
        if let Err(err) = self.store.save_best(self.session.best) {
            log::warn!("could not persist best score {}: {}", self.session.best, err);
        }
        self.board.clear();
        self.emit(
            GameEvent::GAME_OVER,
            self.session.score as f32,
            self.session.best as f32,
        );
        log::info!(
            "game over: score {}, level {}, best {}",
            self.session.score,
            self.session.level,
            self.session.best
        );
    }

    /// Forget the best score, in memory and in the store.
    pub fn clear_best(&mut self) {
        self.session.best = 0;
        if let Err(err) = self.store.clear_best() {
            log::warn!("could not clear stored best score: {}", err);
        }
        self.emit(GameEvent::BEST_CLEARED, 0.0, 0.0);
    }

    // ---- Runtime configuration ----

    /// Replace the configuration. Difficulty values apply immediately; width
    /// and height apply on the next start.
    pub fn set_config(&mut self, config: GapConfig) {
        self.config = config.sanitized();
        if self.phase.is_running() {
            self.session.fall_interval = fall_interval_for_level(&self.config, self.session.level);
        }
    }

    /// Override the current fall interval, floored at the minimum delay.
    /// The next level up recomputes it from the curve.
    pub fn set_speed(&mut self, interval_ms: u32) {
        self.session.fall_interval = interval_ms.max(self.config.min_delay_ms) as f32;
    }

    pub fn set_cols(&mut self, cols: usize) {
        let mut config = self.config.clone();
        config.cols = cols;
        self.set_config(config);
    }

    pub fn set_gaps(&mut self, start_gaps: usize) {
        let mut config = self.config.clone();
        config.start_gaps = start_gaps;
        self.set_config(config);
    }

    // ---- Read-only state ----

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn is_paused(&self) -> bool {
        self.phase.is_paused()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player_column(&self) -> usize {
        self.player.column
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn level(&self) -> u32 {
        self.session.level
    }

    pub fn best(&self) -> u32 {
        self.session.best
    }

    /// Milliseconds between ticks right now.
    pub fn fall_interval(&self) -> f32 {
        self.session.fall_interval
    }

    /// Number of sessions started so far.
    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    pub fn config(&self) -> &GapConfig {
        &self.config
    }

    /// Width of the board in play.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Events emitted since the last [`GapGame::clear_events`].
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Snapshot for a renderer. `tick_alpha` is the progress toward the next tick.
    pub fn view(&self, tick_alpha: f32) -> BoardView<'_> {
        BoardView {
            board: &self.board,
            cols: self.cols,
            rows_visible: self.board.capacity(),
            judgment_row: self.board.judgment_index(),
            player_column: self.player.column,
            score: self.session.score,
            level: self.session.level,
            best: self.session.best,
            phase: self.phase,
            fall_interval: self.session.fall_interval,
            tick_alpha,
            events: &self.events,
        }
    }

    fn emit(&mut self, kind: f32, a: f32, b: f32) {
        self.events.push(GameEvent::new(kind, a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::store::MemoryStore;

    fn game() -> GapGame<MemoryStore> {
        GapGame::new(GapConfig::default(), MemoryStore::new())
    }

    /// Move the player onto a gap of the row about to be judged.
    fn dodge(game: &mut GapGame<MemoryStore>) {
        let idx = game.board().judgment_index() - 1;
        let target = game
            .board()
            .get(idx)
            .and_then(|row| row.cells().iter().position(|&blocking| !blocking))
            .unwrap();
        let dx = target as i32 - game.player_column() as i32;
        game.move_by(dx);
    }

    #[test]
    fn new_game_is_idle_and_loads_best() {
        let game = GapGame::new(GapConfig::default(), MemoryStore::with_best(33));
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.best(), 33);
        assert!(game.board().is_empty());
    }

    #[test]
    fn start_builds_a_fresh_board() {
        let mut game = game();
        game.start();
        let config = GapConfig::default();
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.board().len(), config.rows_visible - 1);
        assert_eq!(game.player_column(), 5);
        assert_eq!(game.score(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.fall_interval(), 520.0);
        for row in game.board().iter() {
            assert_eq!(row.width(), 10);
        }
        assert_eq!(game.events()[0].kind, GameEvent::SESSION_STARTED);
    }

    #[test]
    fn forced_start_gap_makes_first_tick_safe() {
        for seed in 1..200 {
            let config = GapConfig { seed, ..Default::default() };
            let mut game = GapGame::new(config, MemoryStore::new());
            game.start();
            assert_eq!(game.step(), Some(StepOutcome::Continue), "seed {}", seed);
            assert_eq!(game.score(), 1);
        }
    }

    #[test]
    fn pause_blocks_moves_and_steps() {
        let mut game = game();
        game.start();
        game.pause();
        assert!(game.is_paused());
        game.move_by(3);
        assert_eq!(game.player_column(), 5);
        assert_eq!(game.step(), None);
        game.resume();
        game.move_by(3);
        assert_eq!(game.player_column(), 8);
    }

    #[test]
    fn moves_clamp_to_board() {
        let mut game = game();
        game.start();
        game.move_by(-100);
        assert_eq!(game.player_column(), 0);
        game.move_dir(Direction::Right, true);
        assert_eq!(game.player_column(), 3);
        game.move_dir(Direction::Right, false);
        assert_eq!(game.player_column(), 4);
        game.move_by(100);
        assert_eq!(game.player_column(), 9);
    }

    #[test]
    fn pause_and_resume_are_noops_without_session() {
        let mut game = game();
        game.pause();
        game.toggle_pause();
        assert_eq!(game.phase(), Phase::Idle);
        game.resume();
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn start_or_toggle_pause_cycles() {
        let mut game = game();
        game.start_or_toggle_pause();
        assert_eq!(game.phase(), Phase::Running);
        game.start_or_toggle_pause();
        assert_eq!(game.phase(), Phase::Paused);
        game.start_or_toggle_pause();
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn game_over_persists_best_and_clears_board() {
        let mut game = game();
        game.start();
        for _ in 0..7 {
            dodge(&mut game);
            assert_eq!(game.step(), Some(StepOutcome::Continue));
        }
        let judged = game.board().judgment_index() - 1;
        let blocked = game.board().get(judged).unwrap().cells().iter().position(|&b| b);
        match blocked {
            Some(col) => {
                let dx = col as i32 - game.player_column() as i32;
                game.move_by(dx);
                assert_eq!(game.step(), Some(StepOutcome::GameOver));
            }
            None => game.game_over(),
        }
        assert_eq!(game.phase(), Phase::Ended);
        assert_eq!(game.score(), 7);
        assert_eq!(game.best(), 7);
        assert_eq!(game.store().load_best().unwrap(), Some(7));
        assert!(game.board().is_empty());
        assert_eq!(game.step(), None);
        let last = game.events().last().unwrap();
        assert_eq!(last.kind, GameEvent::GAME_OVER);
        assert_eq!(last.a, 7.0);
    }

    #[test]
    fn restart_after_game_over_keeps_best() {
        let mut game = game();
        game.start();
        for _ in 0..3 {
            dodge(&mut game);
            game.step();
        }
        game.game_over();
        game.start();
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.best(), 3);
    }

    #[test]
    fn level_up_emits_event_and_speeds_up() {
        let mut game = game();
        game.start();
        for _ in 0..10 {
            dodge(&mut game);
            assert_eq!(game.step(), Some(StepOutcome::Continue));
        }
        assert_eq!(game.level(), 2);
        assert_eq!(game.fall_interval(), 480.0);
        assert!(game
            .events()
            .iter()
            .any(|e| e.kind == GameEvent::LEVEL_UP && e.a == 2.0 && e.b == 480.0));
    }

    #[test]
    fn clear_best_resets_store() {
        let mut game = GapGame::new(GapConfig::default(), MemoryStore::with_best(50));
        game.clear_best();
        assert_eq!(game.best(), 0);
        assert_eq!(game.store().load_best().unwrap(), None);
    }

    #[test]
    fn width_change_waits_for_next_start() {
        let mut game = game();
        game.start();
        game.set_cols(6);
        assert_eq!(game.cols(), 10);
        game.move_by(100);
        assert_eq!(game.player_column(), 9);
        game.game_over();
        game.start();
        assert_eq!(game.cols(), 6);
        assert_eq!(game.player_column(), 3);
        assert!(game.board().iter().all(|row| row.width() == 6));
    }

    #[test]
    fn set_gaps_is_clamped_to_width() {
        let mut game = game();
        game.set_gaps(40);
        assert_eq!(game.config().start_gaps, 9);
        game.set_gaps(0);
        assert_eq!(game.config().start_gaps, 1);
    }

    #[test]
    fn retuning_a_running_session_keeps_a_blocking_cell() {
        let mut game = game();
        game.start();
        game.set_cols(16);
        game.set_gaps(15);
        // The forced opening guarantees at least the first tick survives.
        while game.step() == Some(StepOutcome::Continue) && game.score() < 20 {
            let newest = game.board().get(0).unwrap();
            assert_eq!(newest.width(), 10);
            assert_eq!(newest.gap_count(), 9);
        }

        let config = GapConfig { cols: 4, ..Default::default() };
        let mut game = GapGame::new(config, MemoryStore::new());
        game.start();
        game.set_config(GapConfig {
            cols: 16,
            min_gaps: 12,
            start_gaps: 12,
            ..Default::default()
        });
        while game.step() == Some(StepOutcome::Continue) && game.score() < 20 {
            let newest = game.board().get(0).unwrap();
            assert_eq!(newest.width(), 4);
            assert!(newest.cells().iter().any(|&blocking| blocking));
        }
    }

    #[test]
    fn reset_leaves_the_phase_alone() {
        let mut game = game();
        game.start();
        game.pause();
        game.reset();
        assert_eq!(game.phase(), Phase::Paused);
        assert_eq!(game.score(), 0);
        game.start();
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn set_speed_respects_floor() {
        let mut game = game();
        game.start();
        game.set_speed(5);
        assert_eq!(game.fall_interval(), 120.0);
        game.set_speed(300);
        assert_eq!(game.fall_interval(), 300.0);
    }
}
