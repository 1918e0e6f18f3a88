//! Component install command

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::package_manager::PackageManager;
use crate::project::ProjectInfo;
use crate::registry::{RegistryClient, RegistryItem};

static SUCCESS: Emoji = Emoji("✓", "√");

/// Add components from the registry to a project
pub struct AddCommand {
    components: Vec<String>,
    cwd: PathBuf,
    yes: bool,
    overwrite: bool,
    skip_install: bool,
}

impl AddCommand {
    /// Create a new command instance
    ///
    /// # Errors
    ///
    /// Returns an error if no components were requested.
    pub fn new(
        components: Vec<String>,
        cwd: PathBuf,
        yes: bool,
        overwrite: bool,
        skip_install: bool,
    ) -> Result<Self> {
        if components.is_empty() {
            anyhow::bail!("No components requested. Try `forgeui add button`.");
        }
        Ok(Self {
            components,
            cwd,
            yes,
            overwrite,
            skip_install,
        })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the registry fetch, any file write, or package
    /// installation fails.
    pub fn execute(&self) -> Result<()> {
        let project = ProjectInfo::detect(&self.cwd)?;
        let client = RegistryClient::default();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Fetching components...");

        let fetched = client.fetch_with_dependencies(&self.components);
        spinner.finish_and_clear();
        let items = fetched?;

        let mut packages: Vec<String> = Vec::new();
        for item in &items {
            self.write_item(&project.root, item)?;
            for dependency in &item.dependencies {
                if !packages.contains(dependency) {
                    packages.push(dependency.clone());
                }
            }
        }

        if self.skip_install {
            if !packages.is_empty() {
                println!(
                    "  {} Skipped installing {}",
                    style("-").dim(),
                    packages.join(", ")
                );
            }
        } else if !packages.is_empty() {
            PackageManager::detect(&project.root).install(&project.root, &packages)?;
            println!("  {SUCCESS} Installed {}", style(packages.join(", ")).green());
        }

        println!();
        println!(
            "{} Added {} component{}.",
            style("Done.").green().bold(),
            items.len(),
            if items.len() == 1 { "" } else { "s" }
        );
        Ok(())
    }

    fn write_item(&self, root: &Path, item: &RegistryItem) -> Result<()> {
        println!(
            "{} {}",
            style("Adding").green().bold(),
            style(&item.name).cyan().bold()
        );

        for file in &item.files {
            let destination = resolve_target(root, &file.target)?;

            if destination.exists() && !self.overwrite {
                let prompt = format!("{} exists. Overwrite?", destination.display());
                if !self.confirmed(&prompt)? {
                    println!("  {} Skipped {}", style("-").dim(), destination.display());
                    continue;
                }
            }

            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }

            fs::write(&destination, &file.content)
                .with_context(|| format!("Failed to write file: {}", destination.display()))?;

            println!("  {SUCCESS} {}", style(destination.display()).green());
        }

        Ok(())
    }

    fn confirmed(&self, prompt: &str) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .context("Failed to read confirmation")
    }
}

/// Resolve a registry file target under the project root.
///
/// Registry descriptors are fetched over the network and are not trusted to
/// pick their own destination: absolute targets and targets with parent
/// components are rejected so a descriptor cannot write outside `root`.
fn resolve_target(root: &Path, target: &str) -> Result<PathBuf> {
    let relative = Path::new(target);
    let escapes = relative.is_absolute()
        || relative
            .components()
            .any(|component| matches!(component, Component::ParentDir | Component::Prefix(_)));

    if escapes {
        anyhow::bail!("Refusing to write outside the project root: {target}");
    }

    Ok(root.join(relative))
}
