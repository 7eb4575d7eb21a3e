use business_catalog::Repository;

use super::prelude::*;
use super::ui::Ui;
use super::widgets::ModelRowWidget;

pub struct Populator {}

impl Populator {

    pub fn populate(ui: &Ui, repository: Repository) -> Result<()> {
        Self::populate_category_filters(ui, repository);
        Self::populate_model_rows(ui, repository)
    }

    fn populate_category_filters(ui: &Ui, repository: Repository) {
        ui.filter_bar().set_categories(&repository.unique_categories());
    }

    fn populate_model_rows(ui: &Ui, repository: Repository) -> Result<()> {
        for (index, model) in repository.models().iter().enumerate() {
            let row = ModelRowWidget::from_model(model, index)?;
            ui.window().append_row(row);
        }
        Ok(())
    }
}
