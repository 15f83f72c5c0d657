//! Difficulty curve: pure functions of the current level.

use crate::api::config::GapConfig;

/// Gaps per row at `level`. Loses one gap every two levels, floored at `min_gaps`.
pub fn gaps_for_level(config: &GapConfig, level: u32) -> usize {
    let drop = (level.max(1) - 1) / 2;
    config
        .start_gaps
        .saturating_sub(drop as usize)
        .max(config.min_gaps)
}

/// Milliseconds between ticks at `level`, floored at `min_delay_ms`.
pub fn fall_interval_for_level(config: &GapConfig, level: u32) -> f32 {
    let drop = (level.max(1) - 1) as u64 * config.level_speed_step_ms as u64;
    let interval = (config.start_delay_ms as u64)
        .saturating_sub(drop)
        .max(config.min_delay_ms as u64);
    interval as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_gap_curve() {
        let config = GapConfig::default();
        let gaps: Vec<usize> = (1..=12).map(|l| gaps_for_level(&config, l)).collect();
        assert_eq!(gaps, vec![5, 5, 4, 4, 3, 3, 2, 2, 1, 1, 1, 1]);
    }

    #[test]
    fn classic_interval_curve() {
        let config = GapConfig::default();
        assert_eq!(fall_interval_for_level(&config, 1), 520.0);
        assert_eq!(fall_interval_for_level(&config, 2), 480.0);
        assert_eq!(fall_interval_for_level(&config, 11), 120.0);
        assert_eq!(fall_interval_for_level(&config, 500), 120.0);
    }

    #[test]
    fn curves_are_monotonic_and_floored() {
        let config = GapConfig {
            start_gaps: 7,
            min_gaps: 2,
            cols: 12,
            level_speed_step_ms: 25,
            ..Default::default()
        }
        .sanitized();
        let mut prev_gaps = usize::MAX;
        let mut prev_interval = f32::MAX;
        for level in 1..200 {
            let gaps = gaps_for_level(&config, level);
            let interval = fall_interval_for_level(&config, level);
            assert!(gaps <= prev_gaps, "gaps rose at level {}", level);
            assert!(interval <= prev_interval, "interval rose at level {}", level);
            assert!(gaps >= config.min_gaps);
            assert!(interval >= config.min_delay_ms as f32);
            prev_gaps = gaps;
            prev_interval = interval;
        }
    }

    #[test]
    fn huge_levels_do_not_overflow() {
        let config = GapConfig::default();
        assert_eq!(gaps_for_level(&config, u32::MAX), config.min_gaps);
        assert_eq!(fall_interval_for_level(&config, u32::MAX), config.min_delay_ms as f32);
    }

    #[test]
    fn level_zero_is_treated_as_one() {
        let config = GapConfig::default();
        assert_eq!(gaps_for_level(&config, 0), gaps_for_level(&config, 1));
        assert_eq!(fall_interval_for_level(&config, 0), fall_interval_for_level(&config, 1));
    }
}
