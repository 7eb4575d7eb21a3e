use super::widgets::{CatalogWindowWidget, FilterBarWidget};

use std::rc::Rc;

#[derive(Clone)]
pub struct Ui {
    window: Rc<CatalogWindowWidget>
}

impl Ui {

    pub fn new(window: CatalogWindowWidget) -> Self {
        Self { window: Rc::new(window) }
    }

    pub fn window(&self) -> &CatalogWindowWidget {
        &self.window
    }

    pub fn filter_bar(&self) -> &FilterBarWidget {
        self.window.filter_bar()
    }

    pub fn present(&self) {
        self.window.present();
    }
}
