mod detail_section;
mod example_panel;
mod filter_bar;
mod model_row;
mod window;

pub use self::filter_bar::FilterBar as FilterBarWidget;
pub use self::model_row::ModelRow as ModelRowWidget;
pub use self::window::CatalogWindow as CatalogWindowWidget;
