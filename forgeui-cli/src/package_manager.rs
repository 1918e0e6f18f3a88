//! Package manager detection and invocation

use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// JavaScript package manager driving the consumer project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    /// npm (the fallback when no lockfile identifies anything else).
    #[default]
    Npm,
    /// pnpm, detected via pnpm-lock.yaml.
    Pnpm,
    /// Yarn, detected via yarn.lock.
    Yarn,
    /// Bun, detected via bun.lockb / bun.lock.
    Bun,
}

impl PackageManager {
    /// Detect the package manager from lockfiles in `root`.
    #[must_use]
    pub fn detect(root: &Path) -> Self {
        if root.join("pnpm-lock.yaml").exists() {
            Self::Pnpm
        } else if root.join("yarn.lock").exists() {
            Self::Yarn
        } else if root.join("bun.lockb").exists() || root.join("bun.lock").exists() {
            Self::Bun
        } else {
            Self::Npm
        }
    }

    /// The executable name.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    const fn install_verb(self) -> &'static str {
        match self {
            Self::Npm | Self::Bun => "install",
            Self::Pnpm | Self::Yarn => "add",
        }
    }

    /// Install `packages` into the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the package manager cannot be spawned or exits
    /// with a non-zero status. Installing an empty list is a no-op.
    pub fn install(self, root: &Path, packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let status = Command::new(self.command())
            .arg(self.install_verb())
            .args(packages)
            .current_dir(root)
            .stdout(Stdio::null())
            .status()
            .with_context(|| format!("Failed to run {}", self.command()))?;

        if !status.success() {
            anyhow::bail!(
                "{} {} exited with {}",
                self.command(),
                self.install_verb(),
                status
            );
        }

        Ok(())
    }
}
