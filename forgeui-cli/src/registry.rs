//! Component registry client

use std::collections::VecDeque;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default registry endpoint.
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.forgeui.dev";

/// A component descriptor fetched from the registry.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryItem {
    /// Component name (e.g. `button`).
    pub name: String,
    /// npm packages the component needs at runtime.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Other registry components this one builds on.
    #[serde(default, rename = "registryDependencies")]
    pub registry_dependencies: Vec<String>,
    /// Source files, written into the consumer project verbatim.
    #[serde(default)]
    pub files: Vec<RegistryFile>,
}

/// One file belonging to a registry item.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryFile {
    /// Destination path, relative to the project root.
    pub target: String,
    /// File content, already rendered; no templating happens client-side.
    pub content: String,
}

/// Blocking registry client.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    base_url: String,
}

impl Default for RegistryClient {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_URL)
    }
}

impl RegistryClient {
    /// Create a client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Fetch a single component descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response cannot be read, or
    /// the body is not a valid descriptor.
    pub fn fetch_item(&self, name: &str) -> Result<RegistryItem> {
        let url = format!("{}/components/{name}.json", self.base_url);
        let mut response = ureq::get(&url)
            .call()
            .with_context(|| format!("Failed to fetch component from {url}"))?;

        let body = response
            .body_mut()
            .read_to_string()
            .context("Failed to read registry response")?;

        serde_json::from_str(&body)
            .with_context(|| format!("Invalid registry descriptor for '{name}'"))
    }

    /// Fetch `names` plus their registry-internal dependencies, breadth-first,
    /// each item at most once. Requested items come back before the items they
    /// pulled in.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error encountered.
    pub fn fetch_with_dependencies(&self, names: &[String]) -> Result<Vec<RegistryItem>> {
        let mut queue: VecDeque<String> = names.iter().cloned().collect();
        let mut seen: Vec<String> = Vec::new();
        let mut items = Vec::new();

        while let Some(name) = queue.pop_front() {
            if seen.contains(&name) {
                continue;
            }
            seen.push(name.clone());

            let item = self.fetch_item(&name)?;
            queue.extend(item.registry_dependencies.iter().cloned());
            items.push(item);
        }

        Ok(items)
    }
}
