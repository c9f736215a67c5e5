//! Prismic scaffolding library
//!
//! The machinery behind the `prismic` binary: the template registry, the
//! scaffolding pipeline (download, extract, rewrite, cleanup, install),
//! and the error taxonomy.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod error;
pub mod registry;
pub mod scaffold;

pub use error::{ScaffoldError, ScaffoldResult};
pub use registry::{Template, TemplateRegistry};
pub use scaffold::installer::{Installer, InstallerOutput};
pub use scaffold::{ScaffoldPipeline, ScaffoldRequest, TempArchive};
