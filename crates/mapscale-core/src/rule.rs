//! Zoom ranges, scale ranges, and the resolution between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};
use crate::zoom::ZoomContext;

/// Inclusive range of zoom levels a rule is authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawZoomRange")]
pub struct ZoomRange {
    pub min_level: i32,
    pub max_level: i32,
}

// Deserialized bounds are checked by `ZoomRange::new`.
#[derive(Deserialize)]
struct RawZoomRange {
    min_level: i32,
    max_level: i32,
}

impl TryFrom<RawZoomRange> for ZoomRange {
    type Error = ZoomError;

    fn try_from(raw: RawZoomRange) -> Result<Self, Self::Error> {
        Self::new(raw.min_level, raw.max_level)
    }
}

impl ZoomRange {
    pub fn new(min_level: i32, max_level: i32) -> ZoomResult<Self> {
        if min_level > max_level {
            return Err(ZoomError::InvalidZoomRange(format!(
                "minimum level {min_level} is greater than maximum level {max_level}"
            )));
        }
        Ok(Self {
            min_level,
            max_level,
        })
    }

    /// A range covering exactly one level.
    pub fn level(level: i32) -> Self {
        Self {
            min_level: level,
            max_level: level,
        }
    }
}

impl fmt::Display for ZoomRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.min_level, self.max_level)
    }
}

/// Parses `(a,b)`, `a,b` or a single level `a`.
impl FromStr for ZoomRange {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('('), trimmed.strip_suffix(')')) {
            (Some(_), Some(_)) => &trimmed[1..trimmed.len() - 1],
            (None, None) => trimmed,
            _ => {
                return Err(ZoomError::InvalidZoomRange(format!(
                    "unbalanced parentheses in '{s}'"
                )))
            }
        };

        let parse_level = |part: &str| {
            let part = part.trim();
            part.parse::<i32>().map_err(|e| {
                ZoomError::InvalidZoomRange(format!("bad zoom level '{part}' in '{s}': {e}"))
            })
        };

        match inner.split_once(',') {
            Some((min, max)) => Self::new(parse_level(min)?, parse_level(max)?),
            None => Ok(Self::level(parse_level(inner)?)),
        }
    }
}

/// Scale-denominator bounds attached to a rendering rule.
///
/// A rule applies to a scale strictly between the two bounds. A maximum of
/// `f64::INFINITY` means no coarse limit; a minimum of `0.0` means no fine limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min_scale_denominator: f64,
    #[serde(with = "unbounded")]
    pub max_scale_denominator: f64,
}

impl ScaleRange {
    pub const UNBOUNDED: ScaleRange = ScaleRange {
        min_scale_denominator: 0.0,
        max_scale_denominator: f64::INFINITY,
    };

    pub fn applies_to_scale(&self, scale: f64) -> bool {
        self.min_scale_denominator < scale && scale < self.max_scale_denominator
    }

    pub fn is_unbounded_above(&self) -> bool {
        self.max_scale_denominator.is_infinite()
    }

    pub fn is_unbounded_below(&self) -> bool {
        self.min_scale_denominator == 0.0
    }

    /// No scale satisfies the range.
    pub fn is_empty(&self) -> bool {
        self.min_scale_denominator >= self.max_scale_denominator
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl fmt::Display for ScaleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "1:{} .. 1:{}",
            self.min_scale_denominator, self.max_scale_denominator
        )
    }
}

// JSON has no infinity, so an open coarse bound is written as null.
mod unbounded {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_infinite() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

/// Scale bounds for `range`: from the medial scale above its coarsest level
/// down to the medial scale below its finest level.
pub fn resolve<C: ZoomContext + ?Sized>(range: ZoomRange, context: &C) -> ScaleRange {
    ScaleRange {
        min_scale_denominator: context.medial_scale(range.max_level),
        max_scale_denominator: context.medial_scale(range.min_level.saturating_sub(1)),
    }
}

/// A style rule as seen by scale filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub zoom: Option<ZoomRange>,
    #[serde(default)]
    pub scale: ScaleRange,
}

impl StyleRule {
    pub fn with_zoom(name: impl Into<String>, zoom: ZoomRange) -> Self {
        Self {
            name: Some(name.into()),
            zoom: Some(zoom),
            scale: ScaleRange::UNBOUNDED,
        }
    }

    pub fn applies_to_scale(&self, scale: f64) -> bool {
        self.scale.applies_to_scale(scale)
    }
}

/// Write resolved scale bounds onto every rule that declares a zoom range.
///
/// Rules without a zoom range keep their existing scale bounds.
pub fn resolve_rules<C: ZoomContext + ?Sized>(rules: &mut [StyleRule], context: &C) {
    for rule in rules.iter_mut() {
        let Some(zoom) = rule.zoom else {
            continue;
        };
        rule.scale = resolve(zoom, context);
        let name = rule.name.as_deref().unwrap_or("<unnamed>");
        if rule.scale.is_empty() {
            tracing::warn!("Rule {name} zoom {zoom} resolves to an empty scale range");
        } else {
            tracing::debug!("Rule {name} zoom {zoom} -> {}", rule.scale);
        }
    }
}
