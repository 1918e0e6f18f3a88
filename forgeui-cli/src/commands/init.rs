//! Theming setup command

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::package_manager::PackageManager;
use crate::project::{ProjectInfo, TailwindVersion};
use crate::theme::{merge_theme_file, MergeOutcome};

static SUCCESS: Emoji = Emoji("✓", "√");
static WARNING: Emoji = Emoji("⚠", "!");

/// Packages every themed project needs at runtime.
const RUNTIME_PACKAGES: [&str; 4] = [
    "tw-animate-css",
    "class-variance-authority",
    "clsx",
    "tailwind-merge",
];

/// Wire up theming in an existing project
pub struct InitCommand {
    cwd: PathBuf,
    yes: bool,
    skip_install: bool,
}

impl InitCommand {
    /// Create a new command instance
    #[must_use]
    pub fn new(cwd: PathBuf, yes: bool, skip_install: bool) -> Self {
        Self {
            cwd,
            yes,
            skip_install,
        }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the project cannot be probed, the stylesheet
    /// cannot be written, or package installation fails.
    pub fn execute(&self) -> Result<()> {
        let project = ProjectInfo::detect(&self.cwd)?;

        println!(
            "{} {}",
            style("Initializing").green().bold(),
            style("forgeui theming").bold()
        );
        println!();

        match project.tailwind {
            TailwindVersion::V4 => {}
            TailwindVersion::V3 => println!(
                "{WARNING} Tailwind v3 detected. The bundled theme targets v4; variables will merge but tokens may need manual mapping."
            ),
            TailwindVersion::Missing => println!(
                "{WARNING} tailwindcss was not found in package.json. Theming will be wired up anyway."
            ),
        }

        self.merge_theme(&project)?;

        if self.skip_install {
            println!("  {} Skipped package installation", style("-").dim());
        } else {
            Self::install_packages(&project)?;
        }

        Self::print_success();
        Ok(())
    }

    fn merge_theme(&self, project: &ProjectInfo) -> Result<()> {
        let Some(stylesheet) = &project.stylesheet else {
            println!("{WARNING} No global stylesheet found; skipping theme merge.");
            return Ok(());
        };

        let prompt = format!("Write theme to {}?", stylesheet.display());
        if !self.confirmed(&prompt)? {
            println!("  {} Skipped theme merge", style("-").dim());
            return Ok(());
        }

        match merge_theme_file(stylesheet)? {
            MergeOutcome::Updated => println!(
                "  {SUCCESS} Updated {}",
                style(stylesheet.display()).green()
            ),
            MergeOutcome::MissingTarget => println!(
                "{WARNING} {} disappeared before it could be written; nothing merged.",
                stylesheet.display()
            ),
        }

        Ok(())
    }

    fn install_packages(project: &ProjectInfo) -> Result<()> {
        let manager = PackageManager::detect(&project.root);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Installing packages with {}...", manager.command()));

        let packages: Vec<String> = RUNTIME_PACKAGES.iter().map(ToString::to_string).collect();
        let result = manager.install(&project.root, &packages);
        spinner.finish_and_clear();
        result?;

        println!(
            "  {SUCCESS} Installed {}",
            style(RUNTIME_PACKAGES.join(", ")).green()
        );
        Ok(())
    }

    fn confirmed(&self, prompt: &str) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()
            .context("Failed to read confirmation")
    }

    fn print_success() {
        println!();
        println!("{}", style("✓ Theming is wired up!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Add your first component:", style("1.").cyan());
        println!("     {} {}", style("$").dim(), style("forgeui add button").cyan());
        println!();
        println!("  {} Customize your theme variables in the", style("2.").cyan());
        println!("     {} and {} blocks of your stylesheet.", style(":root").cyan(), style(".dark").cyan());
        println!();
    }
}
