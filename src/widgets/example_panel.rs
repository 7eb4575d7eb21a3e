use crate::prelude::*;
use super::detail_section::DetailSection;
use business_catalog::models::{Example, ExampleFacet};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/dev/catalog/business_catalog/example_panel.ui")]
    pub struct ExamplePanel {
        #[template_child(id = "example-panel-title")]
        pub title: TemplateChild<gtk::Label>,
        #[template_child(id = "example-panel-description")]
        pub description: TemplateChild<gtk::Label>,
        #[template_child(id = "example-panel-sections")]
        pub sections: TemplateChild<gtk::Box>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ExamplePanel {
        const NAME: &'static str = "ExamplePanel";
        type Type = super::ExamplePanel;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for ExamplePanel {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for ExamplePanel {}
    impl BoxImpl for ExamplePanel {}
}

glib::wrapper! {
    pub struct ExamplePanel(ObjectSubclass<imp::ExamplePanel>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl ExamplePanel {

    /// `index` is zero-based; the heading shows it numbered from one.
    pub fn from_example(example: &Example, index: usize) -> Self {
        let this: Self = glib::Object::builder().build();
        let imp = this.imp();

        imp.title.set_label(&format!("{number}. {name}", number = index + 1, name = example.name));
        imp.description.set_label(example.description);

        for facet in ExampleFacet::ALL {
            if !facet.entries(example).is_empty() {
                imp.sections.append(&DetailSection::from_example_facet(facet, example));
            }
        }

        this
    }
}
