use super::models::{BusinessModel, ExampleFacet, ModelFacet};
use super::repository::Repository;

use std::fmt;
use std::rc::Rc;
use tracing::debug;

const BLOB_SEPARATOR: &str = " ";

/// Whether a filter pass matched anything. An empty result is a normal
/// outcome that the presentation shows as an empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultState {
    NoMatches,
    Matches(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for CountSummary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.shown == 1 { "model" } else { "models" };
        write!(formatter, "Showing {shown} of {total} business {noun}", shown = self.shown, total = self.total)
    }
}

#[derive(Debug, Clone)]
pub struct FilterResults<'a> {
    models: &'a [BusinessModel],
    matches: Vec<usize>,
}

impl<'a> FilterResults<'a> {

    /// Catalog indices of the matching models, in catalog order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.matches
    }

    pub fn models(&self) -> impl Iterator<Item = &'a BusinessModel> + '_ {
        let models = self.models;
        self.matches.iter().map(move |&index| &models[index])
    }

    #[must_use]
    pub fn ids(&self) -> Vec<u32> {
        self.models().map(|model| model.id).collect()
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.matches.binary_search(&index).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.models.len()
    }

    #[must_use]
    pub fn state(&self) -> ResultState {
        if self.matches.is_empty() {
            ResultState::NoMatches
        } else {
            ResultState::Matches(self.matches.len())
        }
    }

    #[must_use]
    pub fn summary(&self) -> CountSummary {
        CountSummary {
            shown: self.len(),
            total: self.total(),
        }
    }
}

/// Text a model is searched by: category, description, every example
/// (name, description, then each facet in [`ExampleFacet::ALL`] order),
/// then the model facets.
#[must_use]
pub fn searchable_text(model: &BusinessModel) -> String {
    let mut parts = vec![model.category, model.description];

    for example in model.examples {
        parts.push(example.name);
        parts.push(example.description);

        for facet in ExampleFacet::ALL {
            parts.extend_from_slice(facet.entries(example));
        }
    }

    for facet in ModelFacet::ALL {
        parts.extend_from_slice(facet.entries(model));
    }

    parts.join(BLOB_SEPARATOR)
}

fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

/// An empty selector means "all categories", like `None`.
pub(crate) fn normalize_category(category: Option<&str>) -> Option<&str> {
    category.filter(|category| !category.is_empty())
}

fn matches_category(model: &BusinessModel, category: Option<&str>) -> bool {
    normalize_category(category).is_none_or(|category| model.category == category)
}

/// Stateless form of [`FilterEngine::filter`]: builds each blob on the fly.
#[must_use]
pub fn filter_models<'a>(models: &'a [BusinessModel], category: Option<&str>, query: &str) -> Vec<&'a BusinessModel> {
    let query = normalize_query(query);

    models
        .iter()
        .filter(|model| matches_category(model, category))
        .filter(|model| {
            query
                .as_deref()
                .is_none_or(|query| searchable_text(model).to_lowercase().contains(query))
        })
        .collect()
}

#[derive(Debug)]
struct SearchIndex<'a> {
    models: &'a [BusinessModel],
    blobs: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FilterEngine<'a> {
    index: Rc<SearchIndex<'a>>
}

impl<'a> FilterEngine<'a> {

    fn build_blobs(models: &[BusinessModel]) -> Vec<String> {
        models
            .iter()
            .map(|model| searchable_text(model).to_lowercase())
            .collect()
    }

    fn blob_matches(&self, index: usize, query: Option<&str>) -> bool {
        query.is_none_or(|query| self.index.blobs[index].contains(query))
    }

    #[must_use]
    pub fn new(models: &'a [BusinessModel]) -> Self {
        let blobs = Self::build_blobs(models);
        debug!(models = models.len(), "built search index");

        let index = Rc::new(SearchIndex { models, blobs });
        Self { index }
    }

    #[must_use]
    pub fn from_repository(repository: Repository<'a>) -> Self {
        Self::new(repository.models())
    }

    #[must_use]
    pub fn models(&self) -> &'a [BusinessModel] {
        self.index.models
    }

    /// Models matching `category` (exact) and `query` (case-insensitive
    /// substring), in catalog order. A blank query disables text matching.
    #[must_use]
    pub fn filter(&self, category: Option<&str>, query: &str) -> FilterResults<'a> {
        let query = normalize_query(query);
        let models = self.index.models;

        let matches = models
            .iter()
            .enumerate()
            .filter(|(index, model)| {
                matches_category(model, category) && self.blob_matches(*index, query.as_deref())
            })
            .map(|(index, _)| index)
            .collect();

        FilterResults { models, matches }
    }
}

#[cfg(test)]
mod tests {
    use super::{CountSummary, FilterEngine, ResultState, filter_models, searchable_text};
    use crate::fixtures::{DUPLICATED, SCENARIO};

    use pretty_assertions::assert_eq;

    fn ids(models: &[&crate::models::BusinessModel]) -> Vec<u32> {
        models.iter().map(|model| model.id).collect()
    }

    #[test]
    fn query_matches_description() {
        let engine = FilterEngine::new(SCENARIO);
        assert_eq!(engine.filter(None, "subscription").ids(), vec![2]);
    }

    #[test]
    fn category_without_query_selects_that_category() {
        let engine = FilterEngine::new(SCENARIO);
        assert_eq!(engine.filter(Some("Marketplace"), "").ids(), vec![3]);
    }

    #[test]
    fn category_and_query_combine_with_and() {
        let engine = FilterEngine::new(SCENARIO);
        let results = engine.filter(Some("SaaS"), "sell");

        assert!(results.is_empty());
        assert_eq!(results.state(), ResultState::NoMatches);
        assert!(engine.filter(Some("E-commerce"), "subscription").is_empty());
    }

    #[test]
    fn query_is_case_insensitive() {
        let engine = FilterEngine::new(SCENARIO);
        assert_eq!(engine.filter(None, "SAAS").ids(), vec![2]);
        assert_eq!(engine.filter(None, "kanban BOARDS").ids(), vec![2]);
    }

    #[test]
    fn category_match_is_exact_and_case_sensitive() {
        let engine = FilterEngine::new(SCENARIO);
        assert!(engine.filter(Some("saas"), "").is_empty());
        assert!(engine.filter(Some("Market"), "").is_empty());
        assert!(engine.filter(Some("Unknown"), "").is_empty());
    }

    #[test]
    fn empty_category_selects_everything() {
        let engine = FilterEngine::new(SCENARIO);
        assert_eq!(engine.filter(Some(""), "").ids(), vec![1, 2, 3]);
        assert_eq!(ids(&filter_models(SCENARIO, Some(""), "team")), vec![2]);
    }

    #[test]
    fn empty_and_blank_queries_do_not_filter() {
        let engine = FilterEngine::new(SCENARIO);
        assert_eq!(engine.filter(None, "").ids(), vec![1, 2, 3]);
        assert_eq!(engine.filter(None, "   \t").ids(), vec![1, 2, 3]);
        assert_eq!(engine.filter(Some("SaaS"), "  ").ids(), vec![2]);
    }

    #[test]
    fn category_filter_preserves_catalog_order() {
        let engine = FilterEngine::new(DUPLICATED);
        let results = engine.filter(Some("SaaS"), "");

        assert_eq!(results.ids(), vec![10, 12]);
        assert_eq!(results.indices(), &[0, 2]);
        assert!(results.models().all(|model| model.category == "SaaS"));
    }

    #[test]
    fn every_category_is_found_by_its_own_name() {
        let engine = FilterEngine::new(SCENARIO);
        for model in SCENARIO {
            assert!(engine.filter(None, model.category).ids().contains(&model.id));
        }
    }

    #[test]
    fn nested_example_facets_are_searchable() {
        let engine = FilterEngine::new(SCENARIO);
        assert_eq!(engine.filter(None, "quick view modal").ids(), vec![1]);
        assert_eq!(engine.filter(None, "pricing table").ids(), vec![2]);
        assert_eq!(engine.filter(None, "navigation rail").ids(), vec![2]);
    }

    #[test]
    fn non_blank_query_is_not_trimmed() {
        let engine = FilterEngine::new(SCENARIO);
        assert_eq!(engine.filter(None, " boards").ids(), vec![2]);
        assert_eq!(engine.filter(None, "button").ids(), vec![1]);
        assert!(engine.filter(None, "button ").is_empty());
    }

    #[test]
    fn searchable_text_follows_field_order() {
        let text = searchable_text(&SCENARIO[0]);
        assert_eq!(
            text,
            "E-commerce Sell goods online Fashion Store Apparel storefront with seasonal collections \
             Large product imagery Visible size guide Wishlist Size filters Browse collection Add to cart \
             Checkout Quick view modal Product card grid Alt text on product photos Sticky mobile cart button"
        );
    }

    #[test]
    fn repeated_filtering_is_stable() {
        let engine = FilterEngine::new(SCENARIO);
        let first = engine.filter(None, "e");
        let second = engine.filter(None, "e");
        assert_eq!(first.indices(), second.indices());
    }

    #[test]
    fn indexed_and_stateless_filters_agree() {
        let engine = FilterEngine::new(SCENARIO);
        let cases = [(None, ""), (None, "online"), (Some("SaaS"), "team"), (Some("Marketplace"), "x"), (None, "CART")];

        for (category, query) in cases {
            assert_eq!(engine.filter(category, query).ids(), ids(&filter_models(SCENARIO, category, query)));
        }
    }

    #[test]
    fn results_expose_membership_and_summary() {
        let engine = FilterEngine::new(SCENARIO);
        let results = engine.filter(None, "online");

        assert!(results.contains(0));
        assert!(!results.contains(1));
        assert_eq!(results.state(), ResultState::Matches(1));
        assert_eq!(results.summary(), CountSummary { shown: 1, total: 3 });
    }

    #[test]
    fn summary_pluralizes_on_shown_count() {
        assert_eq!(CountSummary { shown: 1, total: 3 }.to_string(), "Showing 1 of 3 business model");
        assert_eq!(CountSummary { shown: 3, total: 3 }.to_string(), "Showing 3 of 3 business models");
        assert_eq!(CountSummary { shown: 0, total: 3 }.to_string(), "Showing 0 of 3 business models");
    }
}
