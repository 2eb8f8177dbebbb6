//! Gridset lookup: turning a gridset identifier into a zoom context.
//!
//! An identifier is one of
//! - the name of a gridset declared in the configuration,
//! - a well-known name (`WebMercator`, `EPSG:3857`, `WGS84`, `EPSG:4326`, ...),
//! - a `simple:<ratio>x<base>[@<initial>]` geometric grid, e.g. `simple:2x5000000@3`.

use std::collections::BTreeMap;

use crate::config::AppConfig;
use crate::error::{ZoomError, ZoomResult};
use crate::zoom::{GeometricZoomContext, ListZoomContext, ZoomContextKind};

/// Standardized rendering pixel size, in metres.
pub const OGC_PIXEL_SIZE: f64 = 0.00028;

const EARTH_RADIUS: f64 = 6_378_137.0;
const TILE_SIZE: f64 = 256.0;

pub const WEB_MERCATOR: &str = "WebMercator";
pub const WGS84: &str = "WGS84";

const WEB_MERCATOR_ALIASES: &[&str] = &[
    WEB_MERCATOR,
    "EPSG:3857",
    "EPSG:900913",
    "GoogleMapsCompatible",
];
const WGS84_ALIASES: &[&str] = &[WGS84, "EPSG:4326", "CRS:84"];

const WEB_MERCATOR_LEVELS: i32 = 21;
const WGS84_LEVELS: i32 = 22;

fn halving_scales(level0: f64, levels: i32) -> Vec<f64> {
    (0..levels).map(|z| level0 / 2f64.powi(z)).collect()
}

/// 256px web mercator tile pyramid, level 0 at 1:559082264.
pub fn web_mercator() -> ListZoomContext {
    let metres_per_pixel = 2.0 * std::f64::consts::PI * EARTH_RADIUS / TILE_SIZE;
    let scales = halving_scales(metres_per_pixel / OGC_PIXEL_SIZE, WEB_MERCATOR_LEVELS);
    ListZoomContext::from_trusted(scales, 0)
}

/// Two-tile-wide geographic pyramid, level 0 at 1:279541132.
pub fn wgs84() -> ListZoomContext {
    let metres_per_degree = 2.0 * std::f64::consts::PI * EARTH_RADIUS / 360.0;
    let degrees_per_pixel = 180.0 / TILE_SIZE;
    let scales = halving_scales(
        degrees_per_pixel * metres_per_degree / OGC_PIXEL_SIZE,
        WGS84_LEVELS,
    );
    ListZoomContext::from_trusted(scales, 0)
}

/// Look up a built-in gridset by any of its names, ignoring case.
pub fn well_known(name: &str) -> Option<ZoomContextKind> {
    let is_alias = |aliases: &[&str]| aliases.iter().any(|a| a.eq_ignore_ascii_case(name));
    if is_alias(WEB_MERCATOR_ALIASES) {
        Some(web_mercator().into())
    } else if is_alias(WGS84_ALIASES) {
        Some(wgs84().into())
    } else {
        None
    }
}

/// Parse a `simple:<ratio>x<base>[@<initial>]` identifier.
///
/// Returns `Ok(None)` when `id` does not use the `simple:` scheme.
pub fn parse_simple(id: &str) -> ZoomResult<Option<GeometricZoomContext>> {
    let Some((scheme, params)) = id.split_once(':') else {
        return Ok(None);
    };
    if !scheme.trim().eq_ignore_ascii_case("simple") {
        return Ok(None);
    }

    let malformed = |why: &str| ZoomError::MalformedGridset(format!("{id}: {why}"));

    let (progression, initial) = match params.split_once('@') {
        Some((progression, initial)) => {
            let initial = initial
                .trim()
                .parse::<i32>()
                .map_err(|_| malformed("initial level must be an integer"))?;
            (progression, initial)
        }
        None => (params, 0),
    };
    let (ratio, base) = progression
        .split_once(['x', 'X'])
        .ok_or_else(|| malformed("expected <ratio>x<base>"))?;
    let ratio = ratio
        .trim()
        .parse::<f64>()
        .map_err(|_| malformed("ratio must be a number"))?;
    let base = base
        .trim()
        .parse::<f64>()
        .map_err(|_| malformed("base scale must be a number"))?;

    GeometricZoomContext::new(ratio, base, initial).map(Some)
}

/// Resolves gridset identifiers for one style-resolution session.
#[derive(Debug, Clone)]
pub struct GridsetRegistry {
    named: BTreeMap<String, ZoomContextKind>,
    default_gridset: String,
}

impl GridsetRegistry {
    /// Registry with only the built-in gridsets, defaulting to web mercator.
    pub fn new() -> Self {
        Self {
            named: BTreeMap::new(),
            default_gridset: WEB_MERCATOR.into(),
        }
    }

    /// Build the registry from configuration, validating every declared gridset.
    pub fn from_config(config: &AppConfig) -> ZoomResult<Self> {
        let mut registry = Self::new();
        for gridset in &config.gridsets {
            let context = gridset.build()?;
            tracing::info!("Registered gridset: {}", gridset.name);
            registry.register(gridset.name.clone(), context);
        }
        registry.default_gridset = config.zoom.default_gridset.clone();
        registry.lookup(None)?;
        Ok(registry)
    }

    /// Add or replace a named gridset. Named gridsets shadow built-ins.
    ///
    /// Names are matched ignoring ASCII case, like the built-in names.
    pub fn register(&mut self, name: impl Into<String>, context: impl Into<ZoomContextKind>) {
        let name = name.into();
        if self.named.insert(name.clone(), context.into()).is_some() {
            tracing::warn!("Gridset {name} was already registered; replacing it");
        }
    }

    pub fn default_gridset(&self) -> &str {
        &self.default_gridset
    }

    /// Resolve `id`, or the default gridset when `id` is `None`.
    pub fn lookup(&self, id: Option<&str>) -> ZoomResult<ZoomContextKind> {
        let id = id.unwrap_or(&self.default_gridset).trim();
        let named = self.named.get(id).or_else(|| {
            self.named
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(id))
                .map(|(_, context)| context)
        });
        if let Some(context) = named {
            return Ok(context.clone());
        }
        if let Some(context) = well_known(id) {
            return Ok(context);
        }
        if let Some(context) = parse_simple(id)? {
            return Ok(context.into());
        }
        Err(ZoomError::UnknownGridset(id.to_string()))
    }

    /// Names of configured gridsets followed by the built-in ones.
    pub fn names(&self) -> Vec<String> {
        self.named
            .keys()
            .cloned()
            .chain(
                WEB_MERCATOR_ALIASES
                    .iter()
                    .chain(WGS84_ALIASES)
                    .map(|s| s.to_string()),
            )
            .collect()
    }
}

impl Default for GridsetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
