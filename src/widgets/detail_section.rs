use crate::prelude::*;
use business_catalog::models::{BusinessModel, Example, ExampleFacet, ModelFacet};
use std::cell::RefCell;

const ENTRY_CSS_CLASS: &str = "detail-section-entry";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/dev/catalog/business_catalog/detail_section.ui")]
    #[properties(wrapper_type = super::DetailSection)]
    pub struct DetailSection {
        #[template_child(id = "detail-section-items")]
        pub items_box: TemplateChild<gtk::Box>,

        #[property(get, set)]
        pub title: RefCell<String>,
        #[property(get, set)]
        pub icon_name: RefCell<String>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for DetailSection {
        const NAME: &'static str = "DetailSection";
        type Type = super::DetailSection;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for DetailSection {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for DetailSection {}
    impl BoxImpl for DetailSection {}
}

glib::wrapper! {
    /// A titled bullet list, used for every facet of an example or a model.
    pub struct DetailSection(ObjectSubclass<imp::DetailSection>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl DetailSection {

    pub fn new(title: &str, icon_name: &str, entries: &[&str]) -> Self {
        let this: Self = glib::Object::builder()
            .property("title", title)
            .property("icon-name", icon_name)
            .build();

        for entry in entries {
            this.append_entry(entry);
        }

        this
    }

    pub fn from_example_facet(facet: ExampleFacet, example: &Example) -> Self {
        Self::new(facet.title(), facet.glyph_name(), facet.entries(example))
    }

    pub fn from_model_facet(facet: ModelFacet, model: &BusinessModel) -> Self {
        Self::new(facet.title(), facet.glyph_name(), facet.entries(model))
    }

    fn append_entry(&self, text: &str) {
        let label = gtk::Label::builder()
            .label(format!("• {text}"))
            .xalign(0.0)
            .wrap(true)
            .build();

        label.add_css_class(ENTRY_CSS_CLASS);
        self.imp().items_box.append(&label);
    }
}
