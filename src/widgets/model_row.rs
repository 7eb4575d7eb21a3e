use crate::prelude::*;
use super::detail_section::DetailSection;
use super::example_panel::ExamplePanel;
use business_catalog::models::{BusinessModel, ModelFacet};
use std::cell::Cell;

const EXAMPLES_HEADING: &str = "Business Examples";
const MODEL_FACET_CSS_CLASS: &str = "model-facet";

fn row_index(index: usize) -> Result<u32> {
    u32::try_from(index).context(format!("Catalog position {index} does not fit a row index"))
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/dev/catalog/business_catalog/model_row.ui")]
    #[properties(wrapper_type = super::ModelRow)]
    pub struct ModelRow {
        #[template_child(id = "model-row-icon")]
        pub icon: TemplateChild<gtk::Image>,

        #[property(get, construct_only)]
        pub index: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ModelRow {
        const NAME: &'static str = "ModelRow";
        type Type = super::ModelRow;
        type ParentType = adw::ExpanderRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for ModelRow {
        fn dispose(&self) {
            self.dispose_template();
        }
    }

    impl WidgetImpl for ModelRow {}
    impl ListBoxRowImpl for ModelRow {}
    impl PreferencesRowImpl for ModelRow {}
    impl ExpanderRowImpl for ModelRow {}
}

glib::wrapper! {
    pub struct ModelRow(ObjectSubclass<imp::ModelRow>)
        @extends adw::ExpanderRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Actionable;
}

impl ModelRow {

    /// `index` is the model's position in the catalog and keys the row for filtering.
    pub fn from_model(model: &BusinessModel, index: usize) -> Result<Self> {
        let position = row_index(index)?;
        let escaped_category = glib::markup_escape_text(model.category);
        let escaped_description = glib::markup_escape_text(model.description);

        let this: Self = glib::Object::builder()
            .property("title", escaped_category.as_str())
            .property("subtitle", escaped_description.as_str())
            .property("index", position)
            .build();

        this.imp().icon.set_icon_name(Some(model.icon.glyph_name()));
        this.set_tooltip_text(Some(&format!("Show details for {}", model.category)));
        this.populate_details(model);
        Ok(this)
    }

    fn populate_details(&self, model: &BusinessModel) {
        if !model.examples.is_empty() {
            self.add_row(&Self::heading(EXAMPLES_HEADING));
        }

        for (index, example) in model.examples.iter().enumerate() {
            self.add_row(&ExamplePanel::from_example(example, index));
        }

        for facet in ModelFacet::ALL {
            let section = DetailSection::from_model_facet(facet, model);
            section.add_css_class(MODEL_FACET_CSS_CLASS);
            self.add_row(&section);
        }
    }

    fn heading(text: &str) -> gtk::Label {
        let label = gtk::Label::builder()
            .label(text)
            .xalign(0.0)
            .margin_top(12)
            .margin_start(12)
            .build();

        label.add_css_class("title-3");
        label
    }
}

#[cfg(test)]
mod tests {
    use super::row_index;

    #[test]
    fn catalog_positions_become_row_indices() {
        assert_eq!(row_index(0).unwrap(), 0);
        assert_eq!(row_index(11).unwrap(), 11);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_positions_are_rejected() {
        assert!(row_index(usize::MAX).is_err());
    }
}
