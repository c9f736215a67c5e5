//! Template listing command

use anyhow::Result;
use console::style;

use prismic_cli::TemplateRegistry;

/// List the available templates.
pub struct TemplatesCommand;

impl TemplatesCommand {
    /// Execute the command.
    pub fn execute() -> Result<()> {
        let registry = TemplateRegistry::builtin();

        println!("{}", style("Available templates:").bold());
        for line in list_lines(&registry) {
            println!("{line}");
        }

        Ok(())
    }
}

/// One line per registry entry, in registration order: the key, then the
/// description, both verbatim.
fn list_lines(registry: &TemplateRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|template| {
            format!(
                "   {}    {}",
                style(&template.key).cyan(),
                template.description
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use prismic_cli::Template;

    use super::*;

    #[test]
    fn one_line_per_entry_in_registration_order() {
        let registry = TemplateRegistry::new(vec![
            Template::new("alpha", "http://x/a.zip", "a-master", "First starter"),
            Template::new("beta", "http://x/b.zip", "b-master", "Second starter"),
            Template::new("gamma", "http://x/c.zip", "c-master", "Third starter"),
        ]);

        let lines = list_lines(&registry);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("alpha") && lines[0].contains("First starter"));
        assert!(lines[1].contains("beta") && lines[1].contains("Second starter"));
        assert!(lines[2].contains("gamma") && lines[2].contains("Third starter"));
    }

    #[test]
    fn empty_registry_renders_nothing() {
        let registry = TemplateRegistry::default();
        assert!(list_lines(&registry).is_empty());
    }
}
