use business_catalog::constants::APP_CATALOG;
use business_catalog::models::{ExampleFacet, Icon, ModelFacet};
use business_catalog::{FilterEngine, FilterState, Repository, ResultState};

use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn repository() -> Repository<'static> {
    Repository::new(&APP_CATALOG)
}

#[test]
fn shipped_catalog_has_unique_ids_and_categories() {
    let repository = repository();
    let ids = repository.models().iter().map(|model| model.id).collect::<HashSet<_>>();

    assert_eq!(repository.len(), 12);
    assert_eq!(ids.len(), repository.len());
    assert_eq!(repository.unique_categories(), repository.categories());
}

#[test]
fn lookups_resolve_through_generated_maps() {
    let repository = repository();

    for (index, model) in repository.models().iter().enumerate() {
        assert_eq!(repository.model_by_id(model.id).map(|found| found.id), Some(model.id));
        assert_eq!(repository.model_by_category(model.category).map(|found| found.id), Some(model.id));
        assert_eq!(repository.model(index).map(|found| found.id), Some(model.id));
    }

    assert!(repository.model_by_id(9_999).is_none());
    assert!(repository.model_by_category("saas").is_none());
}

#[test]
fn every_model_carries_examples_and_guidance() {
    for model in repository().models() {
        assert!(!model.examples.is_empty(), "{} has no examples", model.category);

        for facet in ModelFacet::ALL {
            assert!(!facet.entries(model).is_empty(), "{} lacks {}", model.category, facet.title());
        }

        for example in model.examples {
            for facet in ExampleFacet::ALL {
                assert!(!facet.entries(example).is_empty(), "{} lacks {}", example.name, facet.title());
            }
        }
    }
}

#[test]
fn authored_icons_resolve_to_specific_glyphs() {
    let repository = repository();

    assert_eq!(repository.model_by_category("E-commerce").map(|model| model.icon), Some(Icon::ShoppingCart));
    assert_eq!(repository.model_by_category("SaaS").map(|model| model.icon), Some(Icon::Cloud));
}

#[test]
fn every_category_finds_itself() {
    let engine = FilterEngine::from_repository(repository());

    for model in repository().models() {
        let results = engine.filter(None, model.category);
        assert!(results.ids().contains(&model.id), "searching {} missed it", model.category);

        let results = engine.filter(Some(model.category), "");
        assert_eq!(results.ids(), vec![model.id]);
    }
}

#[test]
fn uppercase_query_matches_mixed_case_text() {
    let engine = FilterEngine::from_repository(repository());
    assert_eq!(engine.filter(None, "SAAS").ids(), vec![2]);
    assert_eq!(engine.filter(None, "subscription").ids(), vec![2, 5]);
}

#[test]
fn nested_facets_are_searchable() {
    let engine = FilterEngine::from_repository(repository());
    assert_eq!(engine.filter(None, "escrow").ids(), vec![3, 7]);
    assert_eq!(engine.filter(None, "QR code").ids(), vec![9]);
}

#[test]
fn category_and_query_from_different_models_yield_empty_state() {
    let mut state = FilterState::new(FilterEngine::from_repository(repository()));
    state.set_active_category(Some("Crowdfunding"));
    state.set_query("kanban");

    assert_eq!(state.results().state(), ResultState::NoMatches);
    assert_eq!(state.summary().to_string(), "Showing 0 of 12 business models");

    state.reset();
    assert_eq!(state.summary().to_string(), "Showing 12 of 12 business models");
}
