//! Zoom contexts: mapping discrete zoom levels onto scale denominators.
//!
//! A zoom context answers two questions for any integer level: the native
//! scale denominator of that level, and the medial scale separating it from
//! the next finer level. Levels outside the defined grid never fail; they
//! degrade to `f64::INFINITY` (coarser than anything defined) or `0.0`
//! (finer than anything defined).

mod geometric;
mod list;

pub use geometric::GeometricZoomContext;
pub use list::ListZoomContext;

/// Capability shared by every zoom-level grid definition.
pub trait ZoomContext: Send + Sync {
    /// Native scale denominator at `level`.
    fn scale_denominator(&self, level: i32) -> f64;

    /// Boundary scale between `level` and `level + 1`.
    ///
    /// Returns `0.0` when `level + 1` is past the finest defined level and
    /// `f64::INFINITY` when `level` itself is coarser than the grid.
    fn medial_scale(&self, level: i32) -> f64 {
        let scale = self.scale_denominator(level);
        let next_scale = self.scale_denominator(level.saturating_add(1));

        if next_scale == 0.0 {
            return 0.0;
        }
        if scale.is_infinite() {
            return f64::INFINITY;
        }
        (scale + next_scale) / 2.0
    }
}

/// The closed set of grid definitions a gridset reference can resolve to.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoomContextKind {
    List(ListZoomContext),
    Geometric(GeometricZoomContext),
}

impl ZoomContext for ZoomContextKind {
    fn scale_denominator(&self, level: i32) -> f64 {
        match self {
            ZoomContextKind::List(ctx) => ctx.scale_denominator(level),
            ZoomContextKind::Geometric(ctx) => ctx.scale_denominator(level),
        }
    }

    fn medial_scale(&self, level: i32) -> f64 {
        match self {
            ZoomContextKind::List(ctx) => ctx.medial_scale(level),
            ZoomContextKind::Geometric(ctx) => ctx.medial_scale(level),
        }
    }
}

impl From<ListZoomContext> for ZoomContextKind {
    fn from(ctx: ListZoomContext) -> Self {
        ZoomContextKind::List(ctx)
    }
}

impl From<GeometricZoomContext> for ZoomContextKind {
    fn from(ctx: GeometricZoomContext) -> Self {
        ZoomContextKind::Geometric(ctx)
    }
}
