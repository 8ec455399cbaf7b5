mod bindings;
mod config;
mod controller;
mod dialogs;
mod dom;
mod editor;
mod error;
mod host;
mod routes;
mod view_state;

use leptos::logging::{error, log};

use crate::host::BrowserHost;

fn main() {
    console_error_panic_hook::set_once();

    let host = BrowserHost::new();
    let config = dom::load_config(&host);

    if let Err(err) = editor::install(&host, &config) {
        error!("editor bootstrap: {err}");
    }

    let failures = dom::mount(host, config);
    if failures.is_empty() {
        log!("page controllers mounted");
    }
}
