/// Variable-interval tick accumulator.
/// Turns render-clock deltas into discrete simulation ticks, where the tick
/// interval may change between ticks (it shrinks as the level rises).
#[derive(Debug, Clone)]
pub struct TickAccumulator {
    /// Largest delta a single frame may contribute, in milliseconds.
    max_frame_delta: f32,
    /// Accumulated time not yet consumed by ticks, in milliseconds.
    accumulator: f32,
}

impl TickAccumulator {
    pub fn new(max_frame_delta: f32) -> Self {
        Self {
            max_frame_delta: max_frame_delta.max(0.0),
            accumulator: 0.0,
        }
    }

    /// Add a frame's elapsed time, clamped to `[0, max_frame_delta]`.
    /// Returns the amount actually added.
    pub fn add_frame(&mut self, frame_ms: f32) -> f32 {
        let dt = if frame_ms.is_finite() {
            frame_ms.clamp(0.0, self.max_frame_delta)
        } else {
            0.0
        };
        self.accumulator += dt;
        dt
    }

    /// Consume one tick if at least `interval` has accumulated.
    pub fn try_consume(&mut self, interval: f32) -> bool {
        if interval > 0.0 && self.accumulator >= interval {
            self.accumulator -= interval;
            true
        } else {
            false
        }
    }

    /// Drop any accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Interpolation alpha toward the next tick (0.0 to 1.0).
    pub fn alpha(&self, interval: f32) -> f32 {
        if interval <= 0.0 {
            return 0.0;
        }
        (self.accumulator / interval).clamp(0.0, 1.0)
    }

    pub fn pending(&self) -> f32 {
        self.accumulator
    }

    pub fn set_max_frame_delta(&mut self, max_frame_delta: f32) {
        self.max_frame_delta = max_frame_delta.max(0.0);
    }
}
