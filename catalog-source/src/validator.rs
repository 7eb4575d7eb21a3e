use super::models::BusinessModel;

use anyhow::{Result, bail};
use std::collections::HashSet;

pub struct CatalogValidator;

impl CatalogValidator {
    /// Fails on duplicate ids; returns warnings for the softer problems.
    pub fn validate(models: &[BusinessModel]) -> Result<Vec<String>> {
        Self::ensure_unique_ids(models)?;

        let mut warnings = Self::duplicate_categories(models);
        warnings.extend(Self::models_without_examples(models));
        Ok(warnings)
    }

    fn ensure_unique_ids(models: &[BusinessModel]) -> Result<()> {
        let mut seen = HashSet::new();
        for model in models {
            if !seen.insert(model.id) {
                bail!("Duplicate business model id {id} ('{category}')", id = model.id, category = model.category);
            }
        }
        Ok(())
    }

    fn duplicate_categories(models: &[BusinessModel]) -> Vec<String> {
        let mut seen = HashSet::new();
        models
            .iter()
            .filter(|model| !seen.insert(model.category.as_str()))
            .map(|model| format!("Category '{}' appears more than once", model.category))
            .collect()
    }

    fn models_without_examples(models: &[BusinessModel]) -> Vec<String> {
        models
            .iter()
            .filter(|model| model.examples.is_empty())
            .map(|model| format!("Business model '{}' has no examples", model.category))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::CatalogValidator;
    use crate::models::{BusinessModel, Example, Icon};

    use pretty_assertions::assert_eq;

    pub fn model(id: u32, category: &str) -> BusinessModel {
        BusinessModel {
            id,
            category: category.to_string(),
            icon: Icon::default(),
            description: format!("{category} description"),
            examples: vec![Example {
                name: format!("{category} example"),
                description: String::new(),
                ui_considerations: Vec::new(),
                key_features: Vec::new(),
                user_flow: Vec::new(),
                interactive_elements: Vec::new(),
                design_patterns: Vec::new(),
            }],
            accessibility_features: Vec::new(),
            responsive_considerations: Vec::new(),
        }
    }

    #[test]
    fn distinct_models_pass_without_warnings() {
        let models = [model(1, "E-commerce"), model(2, "SaaS")];
        assert_eq!(CatalogValidator::validate(&models).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn duplicate_id_fails() {
        let models = [model(7, "SaaS"), model(8, "Marketplace"), model(7, "Crowdfunding")];
        let error = CatalogValidator::validate(&models).unwrap_err();

        assert_eq!(error.to_string(), "Duplicate business model id 7 ('Crowdfunding')");
    }

    #[test]
    fn duplicate_category_only_warns() {
        let models = [model(10, "SaaS"), model(11, "Marketplace"), model(12, "SaaS")];
        let warnings = CatalogValidator::validate(&models).unwrap();

        assert_eq!(warnings, vec!["Category 'SaaS' appears more than once".to_string()]);
    }

    #[test]
    fn model_without_examples_only_warns() {
        let mut empty = model(3, "Marketplace");
        empty.examples.clear();

        let warnings = CatalogValidator::validate(&[model(1, "SaaS"), empty]).unwrap();
        assert_eq!(warnings, vec!["Business model 'Marketplace' has no examples".to_string()]);
    }
}
