//! Project scaffolding command

use anyhow::{Context, Result};
use console::style;

use prismic_cli::{
    Installer, InstallerOutput, ScaffoldPipeline, ScaffoldRequest, TemplateRegistry,
};

/// Create a new Prismic project from a hosted starter template.
pub struct InitCommand {
    repository: String,
    template: Option<String>,
    folder: Option<String>,
    no_ansi: bool,
}

impl InitCommand {
    /// Capture the command's arguments.
    #[must_use]
    pub const fn new(
        repository: String,
        template: Option<String>,
        folder: Option<String>,
        no_ansi: bool,
    ) -> Self {
        Self {
            repository,
            template,
            folder,
            no_ansi,
        }
    }

    /// Execute the command.
    pub fn execute(&self) -> Result<()> {
        if self.no_ansi {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        println!(
            "{} {} {}",
            style("Crafting").green().bold(),
            style("Prismic project:").bold(),
            style(&self.repository).cyan().bold()
        );
        println!();

        let work_dir =
            std::env::current_dir().context("Failed to resolve the current directory")?;
        let registry = TemplateRegistry::builtin();
        let installer = Installer::composer(&work_dir, self.no_ansi);
        let pipeline = ScaffoldPipeline::new(&registry, installer);
        let request = ScaffoldRequest::resolve(&self.repository, self.folder.as_deref(), &work_dir);

        let mut stdout = std::io::stdout();
        let output = if console::Term::stdout().is_term() {
            InstallerOutput::Passthrough
        } else {
            InstallerOutput::Sink(&mut stdout)
        };

        pipeline.run(&request, self.template.as_deref(), output)?;

        let folder_name = self.folder.as_deref().unwrap_or(&self.repository);
        println!();
        println!("{}", style("✓ Project ready!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!(
            "  {} {}",
            style("$").dim(),
            style(format!("cd {folder_name}")).cyan()
        );
        println!(
            "  {} Point the project at your repository on https://prismic.io and start building.",
            style("→").dim()
        );

        Ok(())
    }
}
