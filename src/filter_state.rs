use super::filter_engine::{CountSummary, FilterEngine, FilterResults, normalize_category};

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
struct FilterKey {
    category: Option<String>,
    query: String,
}

#[derive(Debug)]
struct CachedResults<'a> {
    key: FilterKey,
    results: Rc<FilterResults<'a>>,
}

/// The search text and active category driving the visible catalog.
///
/// Results are memoized on both signals and recomputed only when one of
/// them changes.
#[derive(Debug)]
pub struct FilterState<'a> {
    engine: FilterEngine<'a>,
    active_category: Option<String>,
    query: String,
    cached: RefCell<Option<CachedResults<'a>>>,
}

impl<'a> FilterState<'a> {

    #[must_use]
    pub const fn new(engine: FilterEngine<'a>) -> Self {
        Self {
            engine,
            active_category: None,
            query: String::new(),
            cached: RefCell::new(None),
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &FilterEngine<'a> {
        &self.engine
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.active_category.is_some() || !self.query.is_empty()
    }

    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }

        query.clone_into(&mut self.query);
        true
    }

    /// An empty category is stored as `None`.
    pub fn set_active_category(&mut self, category: Option<&str>) -> bool {
        let category = normalize_category(category);
        if self.active_category.as_deref() == category {
            return false;
        }

        self.active_category = category.map(str::to_owned);
        true
    }

    /// Clears both signals, restoring the full catalog view.
    pub fn reset(&mut self) -> bool {
        let category_changed = self.set_active_category(None);
        let query_changed = self.set_query("");
        category_changed || query_changed
    }

    fn current_key(&self) -> FilterKey {
        FilterKey {
            category: self.active_category.clone(),
            query: self.query.clone(),
        }
    }

    #[must_use]
    pub fn results(&self) -> Rc<FilterResults<'a>> {
        let key = self.current_key();

        if let Some(cached) = self.cached.borrow().as_ref()
            && cached.key == key
        {
            trace!(query = %key.query, "filter results served from cache");
            return Rc::clone(&cached.results);
        }

        let results = Rc::new(self.engine.filter(key.category.as_deref(), &key.query));
        debug!(
            category = key.category.as_deref().unwrap_or("all"),
            query = %key.query,
            matches = results.len(),
            total = results.total(),
            "recomputed filter results"
        );

        self.cached.replace(Some(CachedResults {
            key,
            results: Rc::clone(&results),
        }));

        results
    }

    #[must_use]
    pub fn summary(&self) -> CountSummary {
        self.results().summary()
    }
}
