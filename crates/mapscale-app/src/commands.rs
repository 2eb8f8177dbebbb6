use anyhow::Result;
use mapscale_core::rule::resolve_rules;
use mapscale_core::{
    GridsetRegistry, ListZoomContext, ScaleRange, StyleRule, ZoomContext, ZoomContextKind,
    ZoomRange,
};
use serde::Serialize;

/// Levels printed for open-ended geometric grids when `--to` is absent.
const GEOMETRIC_LEVELS: i32 = 20;

pub fn levels(
    registry: &GridsetRegistry,
    gridset: Option<String>,
    from: i32,
    to: Option<i32>,
) -> Result<()> {
    let context = registry.lookup(gridset.as_deref())?;
    let to = to.unwrap_or_else(|| match &context {
        ZoomContextKind::List(list) => list.last_level().unwrap_or(from),
        ZoomContextKind::Geometric(_) => from.saturating_add(GEOMETRIC_LEVELS),
    });

    for level in from..=to {
        println!(
            "{level}\t{}\t{}",
            context.scale_denominator(level),
            context.medial_scale(level)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct Resolved {
    zoom: ZoomRange,
    scale: ScaleRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    applies: Option<bool>,
}

pub fn resolve(
    registry: &GridsetRegistry,
    gridset: Option<String>,
    zooms: Vec<ZoomRange>,
    scale: Option<f64>,
    json: bool,
) -> Result<()> {
    let context = registry.lookup(gridset.as_deref())?;
    let mut rules: Vec<StyleRule> = zooms
        .iter()
        .map(|zoom| StyleRule::with_zoom(zoom.to_string(), *zoom))
        .collect();
    resolve_rules(&mut rules, &context);

    let resolved: Vec<Resolved> = zooms
        .into_iter()
        .zip(&rules)
        .map(|(zoom, rule)| Resolved {
            zoom,
            scale: rule.scale,
            applies: scale.map(|s| rule.applies_to_scale(s)),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
        return Ok(());
    }

    for r in &resolved {
        let mut line = format!(
            "{}\t{}\t{}",
            r.zoom, r.scale.min_scale_denominator, r.scale.max_scale_denominator
        );
        if let Some(applies) = r.applies {
            line.push_str(if applies { "\tapplies" } else { "\tdoes not apply" });
        }
        println!("{line}");
    }
    Ok(())
}

pub fn validate(scales: Vec<f64>, initial: i32) -> Result<()> {
    let context = ListZoomContext::new(&scales, initial)?;
    match context.last_level() {
        Some(last) => println!("valid: {} levels ({initial}..={last})", scales.len()),
        None => println!("valid: 0 levels"),
    }
    Ok(())
}

pub fn gridsets(registry: &GridsetRegistry) -> Result<()> {
    for name in registry.names() {
        let marker = if name == registry.default_gridset() { "*" } else { " " };
        println!("{marker} {name}");
    }
    Ok(())
}
