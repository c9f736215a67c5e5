//! The scaffolding pipeline.
//!
//! Orchestrates one `init` invocation in strict sequence: validate the
//! target directory, resolve the template, download the archive, extract
//! and rename it, rewrite the placeholder token, then hand off to the
//! dependency installer. Every step is a hard gate; the first failure
//! aborts the run and nothing is retried.

pub mod cleanup;
pub mod download;
pub mod extract;
pub mod installer;
pub mod rewrite;

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::registry::TemplateRegistry;
use installer::{Installer, InstallerOutput};
use rewrite::PLACEHOLDER;

/// One scaffolding invocation's immutable inputs.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Repository name: the replacement value for the placeholder token
    /// and the default target directory name.
    pub repository: String,
    /// Directory the project is materialized into.
    pub target_dir: PathBuf,
    /// Directory the invocation operates in: the temp archive lives here
    /// and archives are unpacked here. The process current directory for
    /// the real CLI; an isolated directory in tests.
    pub work_dir: PathBuf,
}

impl ScaffoldRequest {
    /// Resolve a request from user input.
    ///
    /// The target directory is `folder` when given, otherwise the
    /// repository name, both kept relative to `work_dir`.
    #[must_use]
    pub fn resolve(repository: &str, folder: Option<&str>, work_dir: &Path) -> Self {
        let target_dir = work_dir.join(folder.unwrap_or(repository));
        Self {
            repository: repository.to_string(),
            target_dir,
            work_dir: work_dir.to_path_buf(),
        }
    }
}

/// Uniquely named temporary archive path, removed (best-effort) on drop.
///
/// Scoped acquisition: a failed download or extraction cannot leak the
/// partially written archive, and the success path releases it before
/// the installer runs.
#[derive(Debug)]
pub struct TempArchive {
    path: PathBuf,
}

impl TempArchive {
    /// Generate a fresh archive path inside `work_dir`.
    ///
    /// The name combines the current epoch milliseconds with a random
    /// component, collision-safe enough for a single interactive
    /// invocation.
    #[must_use]
    pub fn new(work_dir: &Path) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let nonce: u32 = rand::random();
        Self {
            path: work_dir.join(format!("prismic_{millis:x}{nonce:08x}.zip")),
        }
    }

    /// The archive path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArchive {
    fn drop(&mut self) {
        cleanup::remove(&self.path);
    }
}

/// The scaffolding pipeline core.
pub struct ScaffoldPipeline<'a> {
    registry: &'a TemplateRegistry,
    installer: Installer,
}

impl<'a> ScaffoldPipeline<'a> {
    /// Create a pipeline over the given registry and installer.
    #[must_use]
    pub const fn new(registry: &'a TemplateRegistry, installer: Installer) -> Self {
        Self {
            registry,
            installer,
        }
    }

    /// Run the whole pipeline for one request.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error; see [`ScaffoldError`] for
    /// the taxonomy. A failed run may leave a half-populated project
    /// directory behind, and re-running then requires the user to remove
    /// it first.
    pub fn run(
        &self,
        request: &ScaffoldRequest,
        template_key: Option<&str>,
        output: InstallerOutput<'_>,
    ) -> ScaffoldResult<()> {
        verify_target_is_free(request)?;
        let template = self.registry.resolve(template_key)?;

        if !self.installer.is_available() {
            return Err(ScaffoldError::InstallerUnavailable(
                self.installer.program().to_string(),
            ));
        }

        let spinner = step_spinner();
        let archive = TempArchive::new(&request.work_dir);

        spinner.set_message(format!("Downloading the {} template...", template.key));
        download::fetch(&template.url, archive.path())?;

        spinner.set_message("Extracting the archive...");
        extract::extract(
            archive.path(),
            &request.work_dir,
            &request.target_dir,
            &template.inner,
        )?;

        spinner.set_message("Personalizing the project...");
        rewrite::rewrite_all(&request.target_dir, PLACEHOLDER, &request.repository)?;

        drop(archive);
        spinner.finish_and_clear();

        println!(
            "{} {}",
            style("Installing").green().bold(),
            style("dependencies...").bold()
        );
        self.installer.run(&request.target_dir, output)
    }
}

/// The target must not exist, unless it is the working directory itself
/// (scaffolding in place).
fn verify_target_is_free(request: &ScaffoldRequest) -> ScaffoldResult<()> {
    let target = &request.target_dir;
    if !target.exists() {
        return Ok(());
    }
    let scaffold_in_place = match (target.canonicalize(), request.work_dir.canonicalize()) {
        (Ok(resolved_target), Ok(resolved_work)) => resolved_target == resolved_work,
        _ => false,
    };
    if scaffold_in_place {
        Ok(())
    } else {
        Err(ScaffoldError::TargetExists(target.clone()))
    }
}

fn step_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(template);
    }
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
