use super::models::BusinessModel;

use std::collections::HashMap;

/// Lookup tables baked into the generated catalog as phf maps.
pub struct CatalogIndexMaps {
    pub id_to_index: HashMap<u32, usize>,
    /// First model carrying each category.
    pub category_to_index: HashMap<String, usize>,
}

impl CatalogIndexMaps {
    pub fn build_from_models(models: &[BusinessModel]) -> Self {
        Self {
            id_to_index: Self::build_id_index(models),
            category_to_index: Self::build_category_index(models),
        }
    }

    fn build_id_index(models: &[BusinessModel]) -> HashMap<u32, usize> {
        models
            .iter()
            .enumerate()
            .map(|(index, model)| (model.id, index))
            .collect()
    }

    fn build_category_index(models: &[BusinessModel]) -> HashMap<String, usize> {
        let mut category_to_index = HashMap::new();
        for (index, model) in models.iter().enumerate() {
            category_to_index.entry(model.category.clone()).or_insert(index);
        }
        category_to_index
    }
}

#[cfg(test)]
mod tests {
    use super::CatalogIndexMaps;
    use crate::validator::tests::model;

    use pretty_assertions::assert_eq;

    #[test]
    fn ids_map_to_positions() {
        let maps = CatalogIndexMaps::build_from_models(&[model(10, "SaaS"), model(4, "Marketplace")]);

        assert_eq!(maps.id_to_index.get(&10), Some(&0));
        assert_eq!(maps.id_to_index.get(&4), Some(&1));
    }

    #[test]
    fn repeated_category_keeps_first_position() {
        let maps = CatalogIndexMaps::build_from_models(&[model(10, "SaaS"), model(11, "Marketplace"), model(12, "SaaS")]);

        assert_eq!(maps.category_to_index.len(), 2);
        assert_eq!(maps.category_to_index.get("SaaS"), Some(&0));
    }
}
