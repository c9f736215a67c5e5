//! Template registry.
//!
//! The set of starter templates the CLI can materialize. The registry is
//! an explicitly ordered sequence: the first-registered entry is the
//! default used when `init` is invoked without `--template`, so iteration
//! order is part of the contract and the backing store is a `Vec`, never
//! an unordered map.

use crate::error::{ScaffoldError, ScaffoldResult};

/// A named, hosted starter template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Registry key selected with `--template`.
    pub key: String,
    /// URL of the packaged zip archive.
    pub url: String,
    /// Name of the single top-level directory the archive unpacks into.
    pub inner: String,
    /// One-line human description shown by `prismic templates`.
    pub description: String,
}

impl Template {
    /// Create a template record.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        url: impl Into<String>,
        inner: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
            inner: inner.into(),
            description: description.into(),
        }
    }
}

/// Ordered collection of templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Create a registry from an ordered list of templates.
    #[must_use]
    pub const fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The built-in template set shipped with the CLI.
    ///
    /// The PHP starter comes first and is therefore the default.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Template::new(
                "php",
                "https://github.com/prismicio/php-quickstart/archive/master.zip",
                "php-quickstart-master",
                "PHP starter project, with the Prismic PHP development kit",
            ),
            Template::new(
                "nodejs",
                "https://github.com/prismicio/nodejs-quickstart/archive/master.zip",
                "nodejs-quickstart-master",
                "NodeJS starter project, with the Prismic JavaScript development kit",
            ),
            Template::new(
                "laravel",
                "https://github.com/prismicio/laravel-quickstart/archive/master.zip",
                "laravel-quickstart-master",
                "Laravel starter project, with the Prismic PHP development kit",
            ),
        ])
    }

    /// Look up a template by key, or fall back to the first-registered
    /// entry when no key is given.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnknownTemplate`] for a key that is not
    /// registered (never silently falling back to the default), and
    /// [`ScaffoldError::NoTemplates`] when no key is given and the
    /// registry is empty.
    pub fn resolve(&self, key: Option<&str>) -> ScaffoldResult<&Template> {
        key.map_or_else(
            || self.templates.first().ok_or(ScaffoldError::NoTemplates),
            |name| {
                self.templates
                    .iter()
                    .find(|template| template.key == name)
                    .ok_or_else(|| ScaffoldError::UnknownTemplate(name.to_string()))
            },
        )
    }

    /// Iterate templates in registration order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry holds no templates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_registry() -> TemplateRegistry {
        TemplateRegistry::new(vec![
            Template::new("alpha", "http://x/alpha.zip", "alpha-master", "First starter"),
            Template::new("beta", "http://x/beta.zip", "beta-master", "Second starter"),
        ])
    }

    #[test]
    fn default_is_the_first_registered_entry() {
        let registry = sample_registry();
        let template = registry.resolve(None).unwrap();
        assert_eq!(template.key, "alpha");
    }

    #[test]
    fn lookup_by_key_finds_later_entries() {
        let registry = sample_registry();
        let template = registry.resolve(Some("beta")).unwrap();
        assert_eq!(template.inner, "beta-master");
    }

    #[test]
    fn unknown_key_is_an_error_not_a_fallback() {
        let registry = sample_registry();
        let error = registry.resolve(Some("gamma")).unwrap_err();
        assert!(matches!(error, ScaffoldError::UnknownTemplate(key) if key == "gamma"));
    }

    #[test]
    fn empty_registry_has_no_default() {
        let registry = TemplateRegistry::default();
        let error = registry.resolve(None).unwrap_err();
        assert!(matches!(error, ScaffoldError::NoTemplates));
    }

    #[test]
    fn builtin_defaults_to_the_php_starter() {
        let registry = TemplateRegistry::builtin();
        assert!(!registry.is_empty());
        assert_eq!(registry.resolve(None).unwrap().key, "php");
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let registry = sample_registry();
        let keys: Vec<&str> = registry.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(keys, ["alpha", "beta"]);
        assert_eq!(registry.len(), 2);
    }
}
