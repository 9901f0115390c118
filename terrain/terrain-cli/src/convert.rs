//! `to-obj` and `to-json`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use terrain::prelude::*;
use tracing::{info, warn};

use crate::paths;

/// Export a terrain JSON file as OBJ for editing.
pub fn to_obj(input: &Path, output: &Path) -> Result<()> {
    let mesh = load_json(input).with_context(|| format!("failed to load {}", input.display()))?;

    let bounds = mesh.bounds(Axes::Xyz)?;
    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        width = bounds.width(),
        depth = bounds.depth(),
        height = bounds.height().unwrap_or_default(),
        "bounds {bounds}"
    );

    let mut options = ExportOptions::default();
    if let Some(name) = input.file_name() {
        options = options.with_source_name(name.to_string_lossy());
    }
    save_obj(&mesh, output, &options)
        .with_context(|| format!("failed to write {}", output.display()))?;

    super::report_written(output);
    println!("  Edit only Z values. Re-export without moving, rotating or scaling the mesh,");
    println!("  keep the import axis settings and leave materials out, then run:");
    println!("    terrain-mesh to-json <edited.obj> {}", input.display());
    Ok(())
}

/// Bring an edited OBJ back to terrain JSON, reconciled against the
/// original.
pub fn to_json(input: &Path, original: &Path, output: &Path, params: &ImportParams) -> Result<()> {
    if paths::same_file(output, original) {
        warn!(path = %output.display(), "output overwrites the reference JSON");
    }

    let result = import_obj_file(input, original, params).map_err(|e| {
        let hint = override_hint(&e);
        anyhow::Error::new(e).context(format!(
            "failed to reconcile {} against {}{hint}",
            input.display(),
            original.display()
        ))
    })?;

    info!("{result}");
    for warning in &result.warnings {
        info!("accepted: {warning}");
    }

    save_json(&result.mesh, output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let original_kb = file_kb(original)?;
    let new_kb = file_kb(output)?;
    info!("original size: {original_kb:.1} KB, new size: {new_kb:.1} KB");

    super::report_written(output);
    Ok(())
}

fn override_hint(error: &IoError) -> &'static str {
    if !error.is_overridable() {
        return "";
    }
    match error {
        IoError::TopologyMismatch { .. } => {
            " (pass --allow-topology-change to use the OBJ's own faces)"
        }
        _ => " (pass --allow-xy-drift to accept moved vertices)",
    }
}

#[allow(clippy::cast_precision_loss)]
fn file_kb(path: &Path) -> Result<f64> {
    let len = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .len();
    Ok(len as f64 / 1024.0)
}
