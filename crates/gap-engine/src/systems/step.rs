use crate::api::config::GapConfig;
use crate::api::session::{Player, Session};
use crate::api::types::StepOutcome;
use crate::core::board::Board;
use crate::core::difficulty::{fall_interval_for_level, gaps_for_level};
use crate::core::rng::Rng;
use crate::core::row::{generate_row, Row};

/// Advance the board by one tick with a freshly generated row `width` cells wide.
pub fn step(
    board: &mut Board,
    player: &Player,
    session: &mut Session,
    config: &GapConfig,
    rng: &mut Rng,
    width: usize,
) -> StepOutcome {
    let row = generate_row(rng, width, gaps_for_width(config, session.level, width));
    step_with_row(board, player, session, config, row)
}

/// Gap count for `level`, kept below `width` so every row has a blocking cell.
/// The config is clamped against its own `cols`, which may differ from the
/// width in play after a mid-session retune.
pub fn gaps_for_width(config: &GapConfig, level: u32, width: usize) -> usize {
    gaps_for_level(config, level)
        .min(width.saturating_sub(1))
        .max(1)
}

/// Advance the board by one tick, inserting `row` as the newest row.
///
/// A blocking cell under the player in the judgment row ends the session and
/// folds the score into the best score. Otherwise the score rises by one and
/// the level rises every `level_every` points. No collision is checked and no
/// point is scored while the judgment row has not been filled yet.
pub fn step_with_row(
    board: &mut Board,
    player: &Player,
    session: &mut Session,
    config: &GapConfig,
    row: Row,
) -> StepOutcome {
    board.push(row);

    let Some(judged) = board.judgment_row() else {
        return StepOutcome::Continue;
    };

    if judged.is_blocking(player.column) {
        session.record_best();
        return StepOutcome::GameOver;
    }

    session.score += 1;
    if session.score % config.level_every == 0 {
        session.level += 1;
        session.fall_interval = fall_interval_for_level(config, session.level);
    }
    StepOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_row(width: usize) -> Row {
        Row::from_cells(vec![false; width])
    }

    fn setup(config: &GapConfig) -> (Board, Player, Session) {
        let mut board = Board::new(config.rows_visible, config.judgment_row());
        for _ in 0..config.rows_visible - 1 {
            board.push(open_row(config.cols));
        }
        (board, Player::new(config.start_column()), Session::new(config, 0))
    }

    /// Board whose row at `i` (newest first) is `make(i)`.
    fn board_with(config: &GapConfig, make: impl Fn(usize) -> Row) -> Board {
        let mut board = Board::new(config.rows_visible, config.judgment_row());
        for i in 0..config.rows_visible - 1 {
            board.push_oldest(make(i));
        }
        board
    }

    #[test]
    fn blocking_cell_ends_the_game() {
        let config = GapConfig::default();
        let player = Player::new(config.start_column());
        let mut session = Session::new(&config, 3);
        session.score = 7;

        // The row one above the judgment slot slides into it on this tick.
        let mut board = board_with(&config, |i| {
            if i == config.judgment_row() - 1 {
                let mut cells = vec![false; config.cols];
                cells[player.column] = true;
                Row::from_cells(cells)
            } else {
                open_row(config.cols)
            }
        });

        let outcome = step_with_row(&mut board, &player, &mut session, &config, open_row(config.cols));
        assert_eq!(outcome, StepOutcome::GameOver);
        assert_eq!(session.score, 7);
        assert_eq!(session.best, 7);
    }

    #[test]
    fn best_is_not_lowered_on_game_over() {
        let config = GapConfig::default();
        let player = Player::new(config.start_column());
        let mut session = Session::new(&config, 40);
        session.score = 2;
        let mut board = board_with(&config, |_| Row::solid(config.cols));
        let outcome = step_with_row(&mut board, &player, &mut session, &config, open_row(config.cols));
        assert_eq!(outcome, StepOutcome::GameOver);
        assert_eq!(session.best, 40);
    }

    #[test]
    fn surviving_tick_scores_exactly_one() {
        let config = GapConfig::default();
        let (mut board, player, mut session) = setup(&config);
        for expected in 1..=25 {
            let outcome = step_with_row(&mut board, &player, &mut session, &config, open_row(config.cols));
            assert_eq!(outcome, StepOutcome::Continue);
            assert_eq!(session.score, expected);
            assert!(board.len() <= config.rows_visible);
        }
    }

    #[test]
    fn level_rises_once_per_threshold() {
        let config = GapConfig { level_every: 4, ..Default::default() };
        let (mut board, player, mut session) = setup(&config);
        let mut level_ups = 0;
        for _ in 0..40 {
            let before = session.level;
            step_with_row(&mut board, &player, &mut session, &config, open_row(config.cols));
            if session.level != before {
                assert_eq!(session.level, before + 1);
                assert_eq!(session.score % 4, 0);
                level_ups += 1;
            }
        }
        assert_eq!(level_ups, 10);
        assert_eq!(session.level, 11);
        assert_eq!(session.fall_interval, fall_interval_for_level(&config, 11));
    }

    #[test]
    fn no_judgment_before_the_board_fills() {
        let config = GapConfig::default();
        let mut board = Board::new(config.rows_visible, config.judgment_row());
        let player = Player::new(0);
        let mut session = Session::new(&config, 0);
        for _ in 0..config.judgment_row() {
            let outcome = step_with_row(&mut board, &player, &mut session, &config, Row::solid(config.cols));
            assert_eq!(outcome, StepOutcome::Continue);
        }
        assert_eq!(session.score, 0);
        let outcome = step_with_row(&mut board, &player, &mut session, &config, Row::solid(config.cols));
        assert_eq!(outcome, StepOutcome::GameOver);
    }

    #[test]
    fn generated_rows_follow_the_gap_curve() {
        let config = GapConfig::default();
        let (mut board, player, mut session) = setup(&config);
        let mut rng = Rng::new(3);
        session.level = 5;
        step(&mut board, &player, &mut session, &config, &mut rng, config.cols);
        assert_eq!(board.get(0).unwrap().gap_count(), gaps_for_level(&config, 5));
    }

    #[test]
    fn gap_count_stays_below_the_width_in_play() {
        let config = GapConfig {
            cols: 16,
            start_gaps: 15,
            min_gaps: 12,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(gaps_for_width(&config, 1, 10), 9);
        assert_eq!(gaps_for_width(&config, 1, 4), 3);
        assert_eq!(gaps_for_width(&config, 1, 16), 15);

        let (mut board, player, mut session) = setup(&GapConfig::default());
        let mut rng = Rng::new(11);
        step(&mut board, &player, &mut session, &config, &mut rng, 10);
        let row = board.get(0).unwrap();
        assert_eq!(row.width(), 10);
        assert_eq!(row.gap_count(), 9);
    }
}
