use crate::prelude::*;
use std::cell::RefCell;
use std::sync::OnceLock;

const CATEGORY_SELECTED_SIGNAL: &str = "category-selected";
const CATEGORY_CSS_CLASS: &str = "pill";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/dev/catalog/business_catalog/filter_bar.ui")]
    pub struct FilterBar {
        #[template_child(id = "filter-bar-search-entry")]
        pub search_entry: TemplateChild<gtk::SearchEntry>,
        #[template_child(id = "filter-bar-flow-box")]
        pub flow_box: TemplateChild<gtk::FlowBox>,
        #[template_child(id = "filter-bar-all-button")]
        pub all_button: TemplateChild<gtk::ToggleButton>,

        pub category_buttons: RefCell<Vec<(String, gtk::ToggleButton)>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for FilterBar {
        const NAME: &'static str = "FilterBar";
        type Type = super::FilterBar;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for FilterBar {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_all_button();
        }

        fn signals() -> &'static [glib::subclass::Signal] {
            static SIGNALS: OnceLock<[glib::subclass::Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    glib::subclass::Signal::builder(CATEGORY_SELECTED_SIGNAL)
                        .param_types([String::static_type()])
                        .build(),
                ]
            })
        }

        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for FilterBar {}
    impl BoxImpl for FilterBar {}
}

glib::wrapper! {
    /// Search entry plus a single-choice row of category toggles.
    ///
    /// "All Categories" is the group leader; selecting it reports `None`.
    pub struct FilterBar(ObjectSubclass<imp::FilterBar>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl FilterBar {

    fn setup_all_button(&self) {
        let this_weak = self.downgrade();
        self.imp().all_button.connect_toggled(move |button| {
            if button.is_active()
                && let Some(this) = this_weak.upgrade()
            {
                this.emit_category_selected(None);
            }
        });
    }

    fn emit_category_selected(&self, category: Option<&str>) {
        let category = category.map(str::to_owned);
        self.emit_by_name::<()>(CATEGORY_SELECTED_SIGNAL, &[&category]);
    }

    /// Adds one toggle per category, in the order given.
    pub fn set_categories(&self, categories: &[&str]) {
        let imp = self.imp();

        for category in categories {
            let button = gtk::ToggleButton::builder()
                .label(*category)
                .build();

            button.set_group(Some(&*imp.all_button));
            button.add_css_class(CATEGORY_CSS_CLASS);

            let name = (*category).to_owned();
            let this_weak = self.downgrade();
            button.connect_toggled(move |button| {
                if button.is_active()
                    && let Some(this) = this_weak.upgrade()
                {
                    this.emit_category_selected(Some(&name));
                }
            });

            imp.flow_box.append(&button);
            imp.category_buttons.borrow_mut().push(((*category).to_owned(), button));
        }
    }

    pub fn select_category(&self, category: Option<&str>) {
        let imp = self.imp();
        let Some(category) = category else {
            imp.all_button.set_active(true);
            return;
        };

        let button = imp.category_buttons
            .borrow()
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, button)| button.clone());

        if let Some(button) = button {
            button.set_active(true);
        }
    }

    pub fn clear_search(&self) {
        self.imp().search_entry.set_text("");
    }

    pub fn reset(&self) {
        self.clear_search();
        self.select_category(None);
    }

    pub fn focus_search(&self) {
        self.imp().search_entry.grab_focus();
    }

    pub fn connect_search_changed<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &str) + 'static,
    {
        let this_weak = self.downgrade();
        self.imp().search_entry.connect_search_changed(move |entry| {
            if let Some(this) = this_weak.upgrade() {
                callback(&this, &entry.text());
            }
        })
    }

    pub fn connect_category_selected<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, Option<&str>) + 'static,
    {
        self.connect_local(CATEGORY_SELECTED_SIGNAL, true, move |values| {
            let this = values[0].get::<Self>().ok()?;
            let category = values[1].get::<Option<String>>().ok()?;
            callback(&this, category.as_deref());
            None
        })
    }
}
