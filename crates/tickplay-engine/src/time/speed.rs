/// Slowest speed the stepper buttons reach, in ticks per second.
pub const MIN_SPEED: f64 = 0.5;

/// Fastest speed any stepped adjustment reaches, in ticks per second.
pub const MAX_SPEED: f64 = 20.0;

/// Step applied by the speed up/down controls.
pub const SPEED_INCREMENT: f64 = 0.5;

/// Speed a fresh clock starts with.
pub const DEFAULT_SPEED: f64 = 3.0;

/// Inclusive speed range applied by one adjustment path.
///
/// Two policies exist side by side: the stepper buttons (`STEPPER`, also the
/// bounds UI sliders should bind to) and the keyboard adjustment
/// (`KEYBOARD`), whose floor is one tick per second.
/// Direct `set_speed` only requires a positive value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpeedLimits {
    pub min: f64,
    pub max: f64,
}

impl SpeedLimits {
    pub const STEPPER: SpeedLimits = SpeedLimits {
        min: MIN_SPEED,
        max: MAX_SPEED,
    };

    pub const KEYBOARD: SpeedLimits = SpeedLimits {
        min: 1.0,
        max: MAX_SPEED,
    };

    #[inline]
    pub fn clamp(&self, speed: f64) -> f64 {
        speed.clamp(self.min, self.max)
    }
}
