//! Consumer-project detection

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

/// Stylesheet locations probed during detection, in priority order.
const STYLESHEET_CANDIDATES: [&str; 6] = [
    "src/app/globals.css",
    "app/globals.css",
    "src/styles/globals.css",
    "styles/globals.css",
    "src/index.css",
    "src/App.css",
];

/// Tailwind major version declared in the project's package.json.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TailwindVersion {
    /// Tailwind 3.x or older.
    V3,
    /// Tailwind 4.x (the bundled theme targets this).
    V4,
    /// tailwindcss is not a dependency of the project.
    Missing,
}

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: serde_json::Map<String, Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: serde_json::Map<String, Value>,
}

/// What the commands need to know about the consumer project.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    /// Project root directory.
    pub root: PathBuf,
    /// Detected Tailwind version.
    pub tailwind: TailwindVersion,
    /// The project's global stylesheet, if one was found.
    pub stylesheet: Option<PathBuf>,
}

impl ProjectInfo {
    /// Probe `root` for a package.json and a global stylesheet.
    ///
    /// # Errors
    ///
    /// Returns an error if package.json exists but cannot be read or parsed.
    /// A missing package.json is not an error; the project simply has no
    /// detectable Tailwind dependency.
    pub fn detect(root: &Path) -> Result<Self> {
        let manifest = root.join("package.json");
        let tailwind = if manifest.exists() {
            let raw = fs::read_to_string(&manifest)
                .with_context(|| format!("Failed to read {}", manifest.display()))?;
            let package: PackageJson = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid JSON in {}", manifest.display()))?;
            detect_tailwind(&package)
        } else {
            TailwindVersion::Missing
        };

        let stylesheet = STYLESHEET_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists());

        Ok(Self {
            root: root.to_path_buf(),
            tailwind,
            stylesheet,
        })
    }
}

fn detect_tailwind(package: &PackageJson) -> TailwindVersion {
    let spec = package
        .dependencies
        .get("tailwindcss")
        .or_else(|| package.dev_dependencies.get("tailwindcss"))
        .and_then(Value::as_str);

    match spec {
        // Unparseable specs ("latest", workspace ranges) are assumed current.
        Some(version) if matches!(major_version(version), Some(major) if major <= 3) => {
            TailwindVersion::V3
        }
        Some(_) => TailwindVersion::V4,
        None => TailwindVersion::Missing,
    }
}

fn major_version(spec: &str) -> Option<u32> {
    spec.trim_start_matches(['^', '~', '>', '=', 'v', ' '])
        .split('.')
        .next()?
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn project_with_manifest(json: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), json).unwrap();
        dir
    }

    #[test]
    fn detects_tailwind_v4() {
        let dir = project_with_manifest(r#"{"dependencies": {"tailwindcss": "^4.0.0"}}"#);
        let info = ProjectInfo::detect(dir.path()).unwrap();
        assert_eq!(info.tailwind, TailwindVersion::V4);
    }

    #[test]
    fn detects_tailwind_v3_in_dev_dependencies() {
        let dir = project_with_manifest(r#"{"devDependencies": {"tailwindcss": "~3.4.1"}}"#);
        let info = ProjectInfo::detect(dir.path()).unwrap();
        assert_eq!(info.tailwind, TailwindVersion::V3);
    }

    #[test]
    fn missing_dependency_is_reported() {
        let dir = project_with_manifest(r#"{"dependencies": {"react": "^18.0.0"}}"#);
        let info = ProjectInfo::detect(dir.path()).unwrap();
        assert_eq!(info.tailwind, TailwindVersion::Missing);
    }

    #[test]
    fn missing_manifest_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        let info = ProjectInfo::detect(dir.path()).unwrap();
        assert_eq!(info.tailwind, TailwindVersion::Missing);
        assert!(info.stylesheet.is_none());
    }

    #[test]
    fn unparseable_spec_is_assumed_current() {
        let dir = project_with_manifest(r#"{"dependencies": {"tailwindcss": "latest"}}"#);
        let info = ProjectInfo::detect(dir.path()).unwrap();
        assert_eq!(info.tailwind, TailwindVersion::V4);
    }

    #[test]
    fn first_stylesheet_candidate_wins() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/app")).unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        fs::write(dir.path().join("src/app/globals.css"), "").unwrap();
        fs::write(dir.path().join("styles/globals.css"), "").unwrap();

        let info = ProjectInfo::detect(dir.path()).unwrap();
        assert_eq!(info.stylesheet, Some(dir.path().join("src/app/globals.css")));
    }
}
