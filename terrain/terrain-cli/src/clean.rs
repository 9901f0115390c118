//! `trim` and `smooth`.

use std::path::Path;

use anyhow::{Context, Result};
use terrain::prelude::*;
use tracing::info;

/// Remove faces along the outer boundary.
pub fn trim(input: &Path, output: &Path, fraction: f64) -> Result<()> {
    let mesh = load_json(input).with_context(|| format!("failed to load {}", input.display()))?;

    info!("trim: {:.1}% per side", fraction * 100.0);
    let result = trim_edges(&mesh, &TrimParams::with_fraction(fraction))
        .with_context(|| format!("failed to trim {}", input.display()))?;

    info!("original bounds: {}", result.original_bounds);
    info!("trimmed bounds:  {}", result.trimmed_bounds);
    info!("{result}");

    save_json(&result.mesh, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    super::report_written(output);
    Ok(())
}

/// Blend edge elevations toward the interior.
pub fn smooth(input: &Path, output: &Path, distance: f64, strength: f64) -> Result<()> {
    let mesh = load_json(input).with_context(|| format!("failed to load {}", input.display()))?;

    info!(
        "edge distance: {:.1}%, smooth strength: {strength}",
        distance * 100.0
    );
    let params = SmoothParams::default()
        .with_edge_distance(distance)
        .with_strength(strength);
    let result = smooth_edges(&mesh, &params)
        .with_context(|| format!("failed to smooth {}", input.display()))?;

    info!("interior elevation: {}", result.interior);
    info!("{result}");

    save_json(&result.mesh, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    super::report_written(output);
    Ok(())
}
