//! forgeui CLI library
//!
//! Copies pre-built UI component sources into a consumer project and wires up
//! theming. The interesting piece is the [`theme`] module: a stylesheet
//! theme-merge engine that preserves user customizations while guaranteeing
//! the built-in template's structure, idempotently. Everything else here is
//! orchestration around it: project probing, a registry client, and package
//! manager invocation.

#![forbid(unsafe_code)]

pub mod commands;
pub mod package_manager;
pub mod project;
pub mod registry;
pub mod theme;

pub use theme::{merge_stylesheet, merge_theme_file, MergeOutcome};
