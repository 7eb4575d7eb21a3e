use crate::prelude::*;
use super::filter_bar::FilterBar;
use super::model_row::ModelRow;
use std::cell::{Ref, RefCell};

const RESULTS_PAGE: &str = "results";
const EMPTY_PAGE: &str = "empty";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/dev/catalog/business_catalog/catalog_window.ui")]
    pub struct CatalogWindow {
        #[template_child(id = "catalog-window-scrolled-window")]
        pub scrolled_window: TemplateChild<gtk::ScrolledWindow>,
        #[template_child(id = "catalog-window-filter-bar")]
        pub filter_bar: TemplateChild<FilterBar>,
        #[template_child(id = "catalog-window-stack")]
        pub stack: TemplateChild<gtk::Stack>,
        #[template_child(id = "catalog-window-summary")]
        pub summary: TemplateChild<gtk::Label>,
        #[template_child(id = "catalog-window-list-box")]
        pub list_box: TemplateChild<gtk::ListBox>,

        pub rows: RefCell<Vec<ModelRow>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CatalogWindow {
        const NAME: &'static str = "CatalogWindow";
        type Type = super::CatalogWindow;
        type ParentType = adw::ApplicationWindow;

        fn class_init(class: &mut Self::Class) {
            FilterBar::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for CatalogWindow {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for CatalogWindow {}
    impl WindowImpl for CatalogWindow {}
    impl ApplicationWindowImpl for CatalogWindow {}
    impl AdwApplicationWindowImpl for CatalogWindow {}
}

glib::wrapper! {
    pub struct CatalogWindow(ObjectSubclass<imp::CatalogWindow>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::gio::ActionGroup, gtk::gio::ActionMap, gtk::Accessible, gtk::Buildable,
                    gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager;
}

impl CatalogWindow {

    pub fn new(application: &adw::Application) -> Self {
        glib::Object::builder()
            .property("application", application)
            .build()
    }

    pub fn filter_bar(&self) -> &FilterBar {
        &self.imp().filter_bar
    }

    pub fn append_row(&self, row: ModelRow) {
        let imp = self.imp();
        imp.list_box.append(&row);
        imp.rows.borrow_mut().push(row);
    }

    pub fn rows(&self) -> Ref<'_, Vec<ModelRow>> {
        self.imp().rows.borrow()
    }

    pub fn apply_row_filter<F>(&self, predicate: F)
    where
        F: Fn(&ModelRow) -> bool,
    {
        for row in self.rows().iter() {
            row.set_visible(predicate(row));
        }
    }

    pub fn set_summary(&self, text: &str) {
        self.imp().summary.set_label(text);
    }

    pub fn show_results(&self) {
        self.imp().stack.set_visible_child_name(RESULTS_PAGE);
    }

    pub fn show_empty_state(&self) {
        self.imp().stack.set_visible_child_name(EMPTY_PAGE);
    }

    pub fn scroll_to_top(&self) {
        self.imp().scrolled_window.vadjustment().set_value(0.0);
    }
}
