use std::sync::Arc;

use super::ZoomContext;
use crate::error::{ZoomError, ZoomResult};

/// A zoom context specified by an explicit list of scale denominators.
///
/// List index 0 corresponds to zoom level `initial`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListZoomContext {
    scales: Arc<[f64]>,
    initial: i32,
}

impl ListZoomContext {
    pub fn new(scales: &[f64], initial: i32) -> ZoomResult<Self> {
        validate(scales)?;
        Ok(Self {
            scales: Arc::from(scales),
            initial,
        })
    }

    pub fn from_scales(scales: &[f64]) -> ZoomResult<Self> {
        Self::new(scales, 0)
    }

    /// Built-in pyramids whose scales are decreasing by construction.
    pub(crate) fn from_trusted(scales: Vec<f64>, initial: i32) -> Self {
        debug_assert!(validate(&scales).is_ok());
        Self {
            scales: Arc::from(scales),
            initial,
        }
    }

    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    pub fn initial(&self) -> i32 {
        self.initial
    }

    /// Finest zoom level backed by a list entry, if any.
    pub fn last_level(&self) -> Option<i32> {
        if self.scales.is_empty() {
            return None;
        }
        let last = i64::from(self.initial) + self.scales.len() as i64 - 1;
        i32::try_from(last).ok()
    }
}

/// Check that `scales` is a strictly decreasing sequence of finite, positive values.
fn validate(scales: &[f64]) -> ZoomResult<()> {
    let mut last = f64::INFINITY;
    for (index, &x) in scales.iter().enumerate() {
        if x.is_nan() || x.is_infinite() {
            return Err(ZoomError::InvalidSequence(format!(
                "scale denominators must be finite ({x} at index {index})"
            )));
        }
        if x <= 0.0 {
            return Err(ZoomError::InvalidSequence(format!(
                "scale denominators must be positive ({x} at index {index})"
            )));
        }
        if x >= last {
            return Err(ZoomError::InvalidSequence(format!(
                "scale denominator list must be decreasing ({x} at index {index} follows {last})"
            )));
        }
        last = x;
    }
    Ok(())
}

impl ZoomContext for ListZoomContext {
    fn scale_denominator(&self, level: i32) -> f64 {
        let i = i64::from(level) - i64::from(self.initial);
        if i < 0 {
            return f64::INFINITY;
        }
        match usize::try_from(i).ok().and_then(|i| self.scales.get(i)) {
            Some(&scale) => scale,
            None => 0.0,
        }
    }
}
