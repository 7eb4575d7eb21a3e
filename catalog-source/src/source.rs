use super::extractor::TomlExtractor;
use super::models::{BusinessModel, Example, Icon};

use anyhow::{Context, Result};
use std::path::Path;

/// Parsed catalog plus the non-fatal problems found while reading it.
#[derive(Debug)]
pub struct SourceCatalog {
    pub models: Vec<BusinessModel>,
    pub warnings: Vec<String>,
}

pub struct CatalogSource;

impl CatalogSource {
    pub fn read(path: &Path) -> Result<SourceCatalog> {
        let text = std::fs::read_to_string(path)
            .context(format!("Failed to read catalog source {}", path.display()))?;

        Self::parse(&text)
            .context(format!("Invalid catalog source {}", path.display()))
    }

    /// Parses a `[[models]]` document. Errors name the model position and key.
    pub fn parse(text: &str) -> Result<SourceCatalog> {
        let document: toml::Value = toml::from_str(text)
            .context("Failed to parse catalog TOML")?;

        let mut warnings = Vec::new();
        let models = TomlExtractor::extract_tables(&document, "models")?
            .iter()
            .enumerate()
            .map(|(index, table)| {
                Self::extract_model(table, &mut warnings)
                    .context(format!("Invalid business model at position {index}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(SourceCatalog { models, warnings })
    }

    fn extract_model(table: &toml::Value, warnings: &mut Vec<String>) -> Result<BusinessModel> {
        let id = TomlExtractor::extract_id(table, "id")?;
        let category = TomlExtractor::extract_string(table, "category")?;
        let icon = Self::extract_icon(table, &category, warnings)?;
        let description = TomlExtractor::extract_string(table, "description")?;
        let accessibility_features = TomlExtractor::extract_optional_string_array(table, "accessibility_features")?;
        let responsive_considerations = TomlExtractor::extract_optional_string_array(table, "responsive_considerations")?;

        let examples = TomlExtractor::extract_tables(table, "examples")?
            .iter()
            .enumerate()
            .map(|(index, example)| {
                Self::extract_example(example)
                    .context(format!("Invalid example {index} of '{category}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BusinessModel {
            id,
            category,
            icon,
            description,
            examples,
            accessibility_features,
            responsive_considerations,
        })
    }

    fn extract_icon(table: &toml::Value, category: &str, warnings: &mut Vec<String>) -> Result<Icon> {
        let name = TomlExtractor::extract_string(table, "icon")?;
        let icon = Icon::resolve(&name);

        if Icon::parse(&name).is_none() {
            warnings.push(format!("Unknown icon '{name}' for '{category}', using {icon}"));
        }

        Ok(icon)
    }

    fn extract_example(table: &toml::Value) -> Result<Example> {
        Ok(Example {
            name: TomlExtractor::extract_string(table, "name")?,
            description: TomlExtractor::extract_string(table, "description")?,
            ui_considerations: TomlExtractor::extract_optional_string_array(table, "ui_considerations")?,
            key_features: TomlExtractor::extract_optional_string_array(table, "key_features")?,
            user_flow: TomlExtractor::extract_optional_string_array(table, "user_flow")?,
            interactive_elements: TomlExtractor::extract_optional_string_array(table, "interactive_elements")?,
            design_patterns: TomlExtractor::extract_optional_string_array(table, "design_patterns")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogSource;
    use crate::models::Icon;

    use pretty_assertions::assert_eq;

    const SAAS: &str = r#"
        [[models]]
        id = 2
        category = "SaaS"
        icon = "Cloud"
        description = "Subscription software"
        accessibility_features = ["Keyboard shortcuts for every action"]

        [[models.examples]]
        name = "Project Tracker"
        description = "Team task boards"
        key_features = ["Kanban boards"]
    "#;

    #[test]
    fn parses_models_with_nested_examples() {
        let catalog = CatalogSource::parse(SAAS).unwrap();
        let model = &catalog.models[0];

        assert_eq!(catalog.models.len(), 1);
        assert_eq!(model.id, 2);
        assert_eq!(model.icon, Icon::Cloud);
        assert_eq!(model.examples[0].name, "Project Tracker");
        assert_eq!(model.examples[0].key_features, vec!["Kanban boards".to_string()]);
        assert!(model.examples[0].user_flow.is_empty());
        assert!(model.responsive_considerations.is_empty());
        assert!(catalog.warnings.is_empty());
    }

    #[test]
    fn document_without_models_is_empty() {
        let catalog = CatalogSource::parse("").unwrap();
        assert!(catalog.models.is_empty());
    }

    #[test]
    fn unknown_icon_falls_back_with_a_warning() {
        let text = SAAS.replace("\"Cloud\"", "\"Spaceship\"");
        let catalog = CatalogSource::parse(&text).unwrap();

        assert_eq!(catalog.models[0].icon, Icon::Briefcase);
        assert_eq!(catalog.warnings, vec!["Unknown icon 'Spaceship' for 'SaaS', using Briefcase".to_string()]);
    }

    #[test]
    fn missing_category_names_position_and_key() {
        let text = format!("{SAAS}\n[[models]]\nid = 3\nicon = \"Store\"\ndescription = \"Connect buyers and sellers\"\n");
        let error = CatalogSource::parse(&text).unwrap_err();
        let message = format!("{error:#}");

        assert!(message.contains("position 1"), "{message}");
        assert!(message.contains("'category'"), "{message}");
    }

    #[test]
    fn wrong_type_is_an_error() {
        let text = SAAS.replace("id = 2", "id = \"two\"");
        let message = format!("{:#}", CatalogSource::parse(&text).unwrap_err());

        assert!(message.contains("position 0"), "{message}");
        assert!(message.contains("'id'"), "{message}");
    }

    #[test]
    fn invalid_example_names_its_model() {
        let text = SAAS.replace("name = \"Project Tracker\"", "");
        let message = format!("{:#}", CatalogSource::parse(&text).unwrap_err());

        assert!(message.contains("Invalid example 0 of 'SaaS'"), "{message}");
        assert!(message.contains("'name'"), "{message}");
    }
}
