//! MiniJinja-based template implementation
//!
//! This module provides a [`JinjaTemplate`] implementation that uses the MiniJinja
//! template engine for variable interpolation and conditional rendering.

use crate::{Language, PromptError, PromptTemplate, Result};
use minijinja::Environment;
use std::collections::BTreeMap;

/// A prompt template backed by MiniJinja
///
/// Holds one template source per [`Language`]. Sources are validated when the
/// template is built; a fresh environment is created per render.
///
/// # Template Syntax
///
/// The template uses standard Jinja2 syntax:
/// - Variables: `{{ variable }}`
/// - Filters: `{{ name | upper }}`
/// - Conditionals: `{% if condition %}...{% endif %}`
/// - Loops: `{% for item in items %}...{% endfor %}`
///
/// # Examples
///
/// ```
/// use agent_prompt::{JinjaTemplate, Language, PromptTemplate};
/// use serde_json::json;
///
/// let template = JinjaTemplate::builder("greeting")
///     .english("Hello, {{ name }}!")
///     .traditional_chinese("你好，{{ name }}！")
///     .build()
///     .unwrap();
///
/// let result = template
///     .render(&Language::TraditionalChinese, &json!({ "name": "世界" }))
///     .unwrap();
/// assert_eq!(result, "你好，世界！");
/// ```
pub struct JinjaTemplate {
    name: String,
    templates: BTreeMap<Language, String>,
}

impl JinjaTemplate {
    /// Create a new template builder
    pub fn builder(name: impl Into<String>) -> JinjaTemplateBuilder {
        JinjaTemplateBuilder::new(name)
    }

    /// Create from a single English template
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Result<Self> {
        Self::builder(name).english(template).build()
    }
}

impl PromptTemplate for JinjaTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn languages(&self) -> Vec<Language> {
        self.templates.keys().copied().collect()
    }

    fn render(&self, lang: &Language, vars: &serde_json::Value) -> Result<String> {
        let template_str =
            self.templates
                .get(lang)
                .ok_or_else(|| PromptError::TemplateNotFound {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                    detail: "Language not available".to_string(),
                })?;

        // Create a new environment for each render to avoid lifetime issues
        let mut env = Environment::new();
        env.add_filter("trim", |s: String| s.trim().to_string());

        let value = minijinja::value::Value::from_serialize(vars);

        env.render_str(template_str, value)
            .map_err(|e| PromptError::RenderError {
                name: self.name.clone(),
                detail: e.to_string(),
            })
    }

    fn raw_template(&self, lang: &Language) -> Option<&str> {
        self.templates.get(lang).map(String::as_str)
    }
}

impl std::fmt::Debug for JinjaTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JinjaTemplate")
            .field("name", &self.name)
            .field("languages", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`JinjaTemplate`]
pub struct JinjaTemplateBuilder {
    name: String,
    templates: BTreeMap<Language, String>,
}

impl JinjaTemplateBuilder {
    /// Create a new builder with the given template name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            templates: BTreeMap::new(),
        }
    }

    /// Add a template for a specific language
    pub fn template(mut self, lang: Language, content: impl Into<String>) -> Self {
        self.templates.insert(lang, content.into());
        self
    }

    /// Add English template
    pub fn english(self, content: impl Into<String>) -> Self {
        self.template(Language::English, content)
    }

    /// Add Traditional Chinese template
    pub fn traditional_chinese(self, content: impl Into<String>) -> Self {
        self.template(Language::TraditionalChinese, content)
    }

    /// Add Simplified Chinese template
    pub fn simplified_chinese(self, content: impl Into<String>) -> Self {
        self.template(Language::SimplifiedChinese, content)
    }

    /// Build the template
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No templates were provided
    /// - A template fails to parse
    pub fn build(self) -> Result<JinjaTemplate> {
        if self.templates.is_empty() {
            return Err(PromptError::NoTemplatesProvided(self.name));
        }

        let env = Environment::new();
        for (lang, content) in &self.templates {
            env.template_from_str(content)
                .map_err(|e| PromptError::TemplateParseFailed {
                    name: self.name.clone(),
                    language: lang.code().to_string(),
                    detail: e.to_string(),
                })?;
        }

        Ok(JinjaTemplate {
            name: self.name,
            templates: self.templates,
        })
    }
}
