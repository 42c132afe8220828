use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod logging;
mod modal;
mod shell;

fn main() {
    logging::init();
    log::info!("starting inventory dashboard");
    yew::Renderer::<App>::new().render();
}
