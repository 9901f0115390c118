//! Default output locations.

use std::fs;
use std::path::{Path, PathBuf};

/// `a0.json` -> `a0.obj`.
pub fn with_extension(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

/// `a0.json` -> `a0_trimmed.json`, keeping the directory and extension.
pub fn with_stem_suffix(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

/// Use `explicit` when given, otherwise derive a path from the input.
pub fn resolve(explicit: Option<PathBuf>, derive: impl FnOnce() -> PathBuf) -> PathBuf {
    explicit.unwrap_or_else(derive)
}

/// Whether two paths name the same file. Paths that cannot be
/// canonicalized (e.g. not yet created) are compared as written.
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_replaced() {
        assert_eq!(
            with_extension(Path::new("data/a0.json"), "obj"),
            PathBuf::from("data/a0.obj")
        );
        assert_eq!(
            with_extension(Path::new("a0.obj"), "json"),
            PathBuf::from("a0.json")
        );
    }

    #[test]
    fn stem_suffix_keeps_directory_and_extension() {
        assert_eq!(
            with_stem_suffix(Path::new("data/a0.json"), "_trimmed"),
            PathBuf::from("data/a0_trimmed.json")
        );
        assert_eq!(
            with_stem_suffix(Path::new("terrain"), "_smoothed"),
            PathBuf::from("terrain_smoothed")
        );
    }

    #[test]
    fn explicit_path_wins() {
        let out = resolve(Some(PathBuf::from("out.json")), || PathBuf::from("unused"));
        assert_eq!(out, PathBuf::from("out.json"));

        let out = resolve(None, || PathBuf::from("derived.json"));
        assert_eq!(out, PathBuf::from("derived.json"));
    }

    #[test]
    fn same_file_sees_through_relative_segments() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("a0.json");
        fs::write(&json, "{}").unwrap();

        let detour = dir.path().join("sub").join("..").join("a0.json");
        fs::create_dir(dir.path().join("sub")).unwrap();
        assert!(same_file(&detour, &json));

        let derived = with_extension(&dir.path().join("a0.obj"), "json");
        assert!(same_file(&derived, &json));
        assert!(!same_file(&dir.path().join("a0_out.json"), &json));

        let missing = Path::new("missing.json");
        assert!(same_file(missing, missing));
    }
}
