mod app;
mod components;
mod pages;
mod runtime_config;
mod surface;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    macrolingo_core::telemetry::init_tracing();
    leptos::mount::mount_to_body(App);
}
