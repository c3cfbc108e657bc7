//! Catalog loading and read accessors

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::soul::MartialSoul;
use super::summary::CompendiumSummary;

/// Default catalog location, relative to the working directory or the
/// executable's directory
pub const DEFAULT_DATA_PATH: &str = "data/martial_souls.json";

/// Why a catalog failed to load. Any variant leaves the compendium empty.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog root must be a JSON array")]
    NotAnArray,
    #[error("catalog contains no usable soul entries")]
    Empty,
    #[error("no default catalog found in the working directory or beside the executable")]
    NoDefaultPath,
}

/// In-memory catalog of martial souls plus derived statistics.
///
/// Owns all soul records and the summary. Views hold a shared handle and
/// treat the contents as read-only after load.
#[derive(Debug, Default)]
pub struct Compendium {
    loaded: bool,
    source_path: Option<PathBuf>,
    souls: Vec<MartialSoul>,
    summary: CompendiumSummary,
}

impl Compendium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog file, replacing any previous contents.
    ///
    /// On failure the compendium is reset to the empty state; callers fall
    /// back to their "no data" presentation.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        self.reset();

        let result = self.try_load(path);
        if let Err(ref err) = result {
            self.reset();
            log::warn!(
                "failed to load martial soul catalog from {}: {err}",
                path.display()
            );
        }
        result
    }

    fn try_load(&mut self, path: &Path) -> Result<(), LoadError> {
        let raw = fs::read_to_string(path)?;
        let document: serde_json::Value = serde_json::from_str(&raw)?;
        let entries = document.as_array().ok_or(LoadError::NotAnArray)?;

        let souls: Vec<MartialSoul> = entries.iter().filter_map(MartialSoul::from_value).collect();
        if souls.is_empty() {
            return Err(LoadError::Empty);
        }

        log::info!("loaded {} martial souls from {}", souls.len(), path.display());
        self.summary = CompendiumSummary::compute(&souls);
        self.souls = souls;
        self.loaded = true;
        self.source_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Load from the default catalog location, if one exists
    pub fn load_default(&mut self) -> Result<(), LoadError> {
        match resolve_default_path() {
            Some(path) => self.load_from_path(path),
            None => {
                self.reset();
                Err(LoadError::NoDefaultPath)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn souls(&self) -> &[MartialSoul] {
        &self.souls
    }

    pub fn summary(&self) -> &CompendiumSummary {
        &self.summary
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The `count` highest-graded souls, ties broken alphabetically by name
    pub fn top_souls(&self, count: usize) -> Vec<&MartialSoul> {
        let mut ranking: Vec<&MartialSoul> = self.souls.iter().collect();
        ranking.sort_by(|lhs, rhs| {
            rhs.grade
                .cmp(&lhs.grade)
                .then_with(|| lhs.name.cmp(&rhs.name))
        });
        ranking.truncate(count);
        ranking
    }

    /// The `count` most frequent affinities (normalized names)
    pub fn top_affinities(&self, count: usize) -> Vec<(String, usize)> {
        let mut result = self.summary.affinity_counts.clone();
        result.truncate(count);
        result
    }

    /// Full grade histogram, highest grade first
    pub fn grade_counts_descending(&self) -> &[(i32, usize)] {
        &self.summary.grade_counts
    }

    fn reset(&mut self) {
        self.loaded = false;
        self.source_path = None;
        self.souls.clear();
        self.summary = CompendiumSummary::default();
    }
}

fn resolve_default_path() -> Option<PathBuf> {
    let candidate = PathBuf::from(DEFAULT_DATA_PATH);
    if candidate.exists() {
        return Some(candidate);
    }

    let exe = std::env::current_exe().ok()?;
    let beside = exe.parent()?.join(DEFAULT_DATA_PATH);
    beside.exists().then_some(beside)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_catalog(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const VALID: &str = r#"[
        {"name": "Azure Lynx", "grade": 6, "category": "beast", "affinities": ["wind"], "description": "Prowler."},
        {"name": "Ember Halberd", "grade": 8, "category": "tool", "affinities": ["fire", "metal"], "description": "Blade."},
        {"name": "Mist Serpent", "grade": 8, "category": "beast", "affinities": ["water"], "description": "Coils."}
    ]"#;

    #[test]
    fn test_load_valid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "souls.json", VALID);

        let mut compendium = Compendium::new();
        compendium.load_from_path(&path).unwrap();

        assert!(compendium.is_loaded());
        assert_eq!(compendium.souls().len(), 3);
        assert_eq!(compendium.summary().total_souls, 3);
        assert_eq!(compendium.source_path(), Some(path.as_path()));
    }

    #[test]
    fn test_malformed_entries_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            "souls.json",
            r#"[{"name": "Kept", "grade": 2}, {"grade": 9}, "noise", {"name": ""}]"#,
        );

        let mut compendium = Compendium::new();
        compendium.load_from_path(&path).unwrap();
        assert_eq!(compendium.souls().len(), 1);
        assert_eq!(compendium.souls()[0].name, "Kept");
    }

    #[test]
    fn test_missing_file_fails_and_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "souls.json", VALID);

        let mut compendium = Compendium::new();
        compendium.load_from_path(&path).unwrap();
        assert!(compendium.is_loaded());

        let err = compendium
            .load_from_path(dir.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
        assert!(!compendium.is_loaded());
        assert!(compendium.souls().is_empty());
        assert_eq!(compendium.summary().total_souls, 0);
        assert!(compendium.source_path().is_none());
    }

    #[test]
    fn test_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "souls.json", "[{not json");

        let mut compendium = Compendium::new();
        assert!(matches!(
            compendium.load_from_path(&path),
            Err(LoadError::Json(_))
        ));
        assert!(!compendium.is_loaded());
    }

    #[test]
    fn test_non_array_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "souls.json", r#"{"name": "Azure Lynx"}"#);

        let mut compendium = Compendium::new();
        assert!(matches!(
            compendium.load_from_path(&path),
            Err(LoadError::NotAnArray)
        ));
    }

    #[test]
    fn test_array_with_no_valid_entries_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "souls.json", r#"[{"grade": 1}, "x", []]"#);

        let mut compendium = Compendium::new();
        assert!(matches!(
            compendium.load_from_path(&path),
            Err(LoadError::Empty)
        ));

        let empty = write_catalog(&dir, "empty.json", "[]");
        assert!(matches!(
            compendium.load_from_path(&empty),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn test_top_souls_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "souls.json", VALID);

        let mut compendium = Compendium::new();
        compendium.load_from_path(&path).unwrap();

        let top = compendium.top_souls(2);
        // Both grade-8 souls outrank the lynx; alphabetical tie-break
        assert_eq!(top[0].name, "Ember Halberd");
        assert_eq!(top[1].name, "Mist Serpent");

        let all = compendium.top_souls(10);
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].name, "Azure Lynx");
    }

    #[test]
    fn test_top_affinities_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(&dir, "souls.json", VALID);

        let mut compendium = Compendium::new();
        compendium.load_from_path(&path).unwrap();

        let top = compendium.top_affinities(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top, compendium.summary().affinity_counts[..2].to_vec());
    }
}
