//! Interactive scaffolding of Express server projects.
//!
//! The flow is linear: [`prompt::collect`] turns answers into a [`ProjectSpec`],
//! [`plan::ProjectPlan`] renders every file in memory through the [`hinagata`] registry, and
//! [`assemble::scaffold`] writes the plan to disk before running the optional git and install
//! steps.
pub mod api;
pub mod assemble;
pub mod cli;
pub mod config;
pub mod errors;
pub mod plan;
pub mod preview;
pub mod prompt;
pub mod steps;

pub use hinagata::{Features, Language, PackageManager, Preset, ProjectSpec, TemplateKey};
