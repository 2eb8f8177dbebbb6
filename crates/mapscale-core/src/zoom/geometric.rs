use super::ZoomContext;
use crate::error::{ZoomError, ZoomResult};

/// A zoom context where each level is `ratio` times finer than the previous one.
///
/// Level `initial` has scale denominator `base`. Every integer level is
/// defined; levels far enough from `initial` overflow to infinity or
/// underflow to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricZoomContext {
    ratio: f64,
    base: f64,
    initial: i32,
}

impl GeometricZoomContext {
    pub fn new(ratio: f64, base: f64, initial: i32) -> ZoomResult<Self> {
        if !ratio.is_finite() || ratio <= 1.0 {
            return Err(ZoomError::InvalidSequence(format!(
                "zoom ratio must be finite and greater than 1 (got {ratio})"
            )));
        }
        if !base.is_finite() || base <= 0.0 {
            return Err(ZoomError::InvalidSequence(format!(
                "base scale denominator must be finite and positive (got {base})"
            )));
        }
        Ok(Self {
            ratio,
            base,
            initial,
        })
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn initial(&self) -> i32 {
        self.initial
    }
}

impl ZoomContext for GeometricZoomContext {
    fn scale_denominator(&self, level: i32) -> f64 {
        let steps = i64::from(self.initial) - i64::from(level);
        let steps = steps.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        self.base * self.ratio.powi(steps)
    }
}
