pub mod config;
pub mod error;
pub mod gridset;
pub mod lifecycle;
pub mod rule;
pub mod zoom;

pub use config::AppConfig;
pub use error::{ZoomError, ZoomResult};
pub use gridset::GridsetRegistry;
pub use rule::{resolve, resolve_rules, ScaleRange, StyleRule, ZoomRange};
pub use zoom::{GeometricZoomContext, ListZoomContext, ZoomContext, ZoomContextKind};
