use super::models::{BusinessModel, Catalog};

use std::collections::HashSet;

/// Category labels in catalog order, duplicates included.
pub fn categories(models: &[BusinessModel]) -> Vec<&str> {
    models.iter().map(|model| model.category).collect()
}

/// Category labels in catalog order, keeping the first occurrence of each.
pub fn unique_categories(models: &[BusinessModel]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for model in models {
        if seen.insert(model.category) {
            unique.push(model.category);
        }
    }

    unique
}

#[derive(Debug, Clone, Copy)]
pub struct Repository<'a> {
    catalog: &'a Catalog
}

impl <'a> Repository <'a> {

    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub const fn models(&self) -> &'a [BusinessModel] {
        self.catalog.models
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.catalog.models.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.catalog.models.is_empty()
    }

    #[must_use]
    pub fn model(&self, index: usize) -> Option<&'a BusinessModel> {
        self.catalog.models.get(index)
    }

    #[must_use]
    pub fn model_by_id(&self, id: u32) -> Option<&'a BusinessModel> {
        self.catalog.models_map
            .get(&id)
            .and_then(|&index| self.model(index))
    }

    /// First model whose category equals `category` exactly.
    #[must_use]
    pub fn model_by_category(&self, category: &str) -> Option<&'a BusinessModel> {
        self.catalog.categories_map
            .get(category)
            .and_then(|&index| self.model(index))
    }

    #[must_use]
    pub fn categories(&self) -> Vec<&'a str> {
        categories(self.catalog.models)
    }

    #[must_use]
    pub fn unique_categories(&self) -> Vec<&'a str> {
        unique_categories(self.catalog.models)
    }

}
