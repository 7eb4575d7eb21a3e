use std::cell::OnceCell;
use std::rc::Rc;

use business_catalog::constants;
use business_catalog::{FilterEngine, Repository};
use tracing::{error, info};

use super::prelude::*;
use super::controllers::{ActionsController, FilterController};
use super::populator::Populator;
use super::ui::Ui;
use super::widgets::CatalogWindowWidget;

struct Controllers {
    _filter: FilterController,
    _actions: ActionsController,
}

struct ApplicationState {
    application: adw::Application,
    repository: Repository<'static>,
    controllers: OnceCell<Controllers>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default()
        );

        let repository = Repository::new(&constants::APP_CATALOG);
        let state = Rc::new(ApplicationState {
            application,
            repository,
            controllers: OnceCell::new(),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            if let Err(error) = this.setup_ui() {
                error!("failed to build the catalog window: {error:#}");
                application.quit();
            }
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |application| {
            if let Err(error) = Self::setup_resources() {
                error!("failed to load application resources: {error:#}");
                application.quit();
            }
        });
    }

    fn setup_ui(&self) -> Result<()> {
        if let Some(window) = self.state.application.active_window() {
            window.present();
            return Ok(());
        }

        let repository = self.state.repository;
        let ui = Ui::new(CatalogWindowWidget::new(&self.state.application));
        Populator::populate(&ui, repository)?;

        let filter = FilterController::new(ui.clone(), FilterEngine::from_repository(repository));
        let actions = ActionsController::new(self.state.application.clone(), filter.clone());

        if self.state.controllers.set(Controllers { _filter: filter, _actions: actions }).is_err() {
            bail!("Catalog window controllers were already initialised");
        }

        ui.present();
        info!(models = repository.len(), version = constants::APP_VERSION, "catalog window ready");
        Ok(())
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));
        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)
            .context("Failed to register compiled resources")?;

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        let result = self.state.application.run();
        if result != adw::glib::ExitCode::SUCCESS {
            bail!("Application exited with {result:?}");
        }

        Ok(())
    }

}
