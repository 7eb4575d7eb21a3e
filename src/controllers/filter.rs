use business_catalog::{FilterEngine, FilterState, ResultState};

use super::super::ui::Ui;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::debug;

struct State {
    ui: Ui,
    filter: RefCell<FilterState<'static>>
}

pub struct WeakFilter {
    state: Weak<State>
}

impl WeakFilter {
    pub fn upgrade(&self) -> Option<Filter> {
        self.state.upgrade().map(|state| Filter { state })
    }
}

/// Keeps the visible rows, the summary line and the empty state in step
/// with the search text and the selected category.
#[derive(Clone)]
pub struct Filter {
    state: Rc<State>
}

impl Filter {

    pub fn new(ui: Ui, engine: FilterEngine<'static>) -> Self {
        let filter = RefCell::new(FilterState::new(engine));
        let this = Self { state: Rc::new(State { ui, filter }) };
        this.setup_search_changed();
        this.setup_category_selected();
        this.refresh();
        this
    }

    pub fn activate_search(&self) {
        self.state.ui.filter_bar().focus_search();
    }

    pub fn reset(&self) {
        let changed = self.state.filter.borrow_mut().reset();
        self.state.ui.filter_bar().reset();

        if changed {
            self.refresh();
        }
    }

    fn setup_search_changed(&self) {
        let this_weak = self.downgrade();
        self.state.ui.filter_bar().connect_search_changed(move |_, text| {
            if let Some(this) = this_weak.upgrade() {
                this.update_query(text);
            }
        });
    }

    fn setup_category_selected(&self) {
        let this_weak = self.downgrade();
        self.state.ui.filter_bar().connect_category_selected(move |_, category| {
            if let Some(this) = this_weak.upgrade() {
                this.update_category(category);
            }
        });
    }

    fn update_query(&self, query: &str) {
        let changed = self.state.filter.borrow_mut().set_query(query);
        if changed {
            self.refresh();
        }
    }

    fn update_category(&self, category: Option<&str>) {
        let changed = self.state.filter.borrow_mut().set_active_category(category);
        if changed {
            self.refresh();
        }
    }

    fn refresh(&self) {
        let results = self.state.filter.borrow().results();
        let window = self.state.ui.window();

        window.apply_row_filter(|row| {
            usize::try_from(row.index()).is_ok_and(|index| results.contains(index))
        });
        window.set_summary(&results.summary().to_string());

        match results.state() {
            ResultState::NoMatches => window.show_empty_state(),
            ResultState::Matches(_) => window.show_results(),
        }

        window.scroll_to_top();
        debug!(shown = results.len(), total = results.total(), "catalog view refreshed");
    }

    pub fn downgrade(&self) -> WeakFilter {
        let state = Rc::downgrade(&self.state);
        WeakFilter { state }
    }
}
