use super::super::prelude::*;
use super::super::controllers::FilterController;
use business_catalog::constants;

pub struct Actions {
    application: adw::Application,
    filter_controller: FilterController,
}

impl Actions {
    pub fn new(application: adw::Application, filter_controller: FilterController) -> Self {
        let this = Self { application, filter_controller };
        this.setup_quit_action();
        this.setup_search_action();
        this.setup_reset_filters_action();
        this.setup_about_action();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gtk::gio::SimpleAction::new("quit", None);
        self.connect_quit_handler(&quit_action);
        self.application.add_action(&quit_action);
        self.application.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn connect_quit_handler(&self, quit_action: &gtk::gio::SimpleAction) {
        let application_weak = self.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });
    }

    fn setup_search_action(&self) {
        let search_action = gtk::gio::SimpleAction::new("search", None);
        self.connect_search_handler(&search_action);
        self.application.add_action(&search_action);
        self.application.set_accels_for_action("app.search", &["<Ctrl>f"]);
    }

    fn connect_search_handler(&self, search_action: &gtk::gio::SimpleAction) {
        let filter_controller_weak = self.filter_controller.downgrade();
        search_action.connect_activate(move |_action, _| {
            if let Some(filter_controller) = filter_controller_weak.upgrade() {
                filter_controller.activate_search();
            }
        });
    }

    fn setup_reset_filters_action(&self) {
        let reset_action = gtk::gio::SimpleAction::new("reset-filters", None);
        self.connect_reset_filters_handler(&reset_action);
        self.application.add_action(&reset_action);
        self.application.set_accels_for_action("app.reset-filters", &["<Ctrl>r"]);
    }

    fn connect_reset_filters_handler(&self, reset_action: &gtk::gio::SimpleAction) {
        let filter_controller_weak = self.filter_controller.downgrade();
        reset_action.connect_activate(move |_action, _| {
            if let Some(filter_controller) = filter_controller_weak.upgrade() {
                filter_controller.reset();
            }
        });
    }

    fn setup_about_action(&self) {
        let about_action = gtk::gio::SimpleAction::new("about", None);
        let application_weak = self.application.downgrade();
        about_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                Self::present_about_dialog(&application);
            }
        });
        self.application.add_action(&about_action);
    }

    fn present_about_dialog(application: &adw::Application) {
        let developers = constants::APP_AUTHORS.split(',').collect::<Vec<_>>();
        let dialog = adw::AboutDialog::builder()
            .application_name(constants::APP_TITLE)
            .application_icon(constants::APP_ID)
            .version(constants::APP_VERSION)
            .comments(constants::APP_DESCRIPTION)
            .build();

        dialog.set_developers(&developers);
        dialog.present(application.active_window().as_ref());
    }
}
