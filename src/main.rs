mod application;
mod controllers;
mod populator;
mod prelude;
mod ui;
mod widgets;

fn main() -> anyhow::Result<()> {
    business_catalog::logging::init();
    application::Application::new().activate()
}
