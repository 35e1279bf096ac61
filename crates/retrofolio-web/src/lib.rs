#![forbid(unsafe_code)]

//! Browser host for the Retrofolio page controller.
//!
//! The wasm entry point reads the optional embedded config, builds a
//! `web-sys` backed [`Page`](retrofolio_core::Page), and hands DOM events to
//! [`PageController`](retrofolio_core::PageController). All browser glue is
//! compiled on `wasm32` only; [`settings`] is shared with native tests.

pub mod settings;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo::events::EventListener;
    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::console;
    use crate::dom::DomPage;
    use crate::settings::{self, CONFIG_SCRIPT_ID};

    thread_local! {
        static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
    }

    fn boot() {
        let window = gloo::utils::window();
        let document = gloo::utils::document();
        let page = DomPage::new(window, document);
        let payload = page
            .document()
            .get_element_by_id(CONFIG_SCRIPT_ID)
            .and_then(|script| script.text_content());
        let config = settings::config_from_script(payload.as_deref());
        let app = App::new(page, config);
        app.boot();
        APP.with(|slot| *slot.borrow_mut() = Some(app));
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console::install_panic_hook();
        let search = gloo::utils::window().location().search().unwrap_or_default();
        console::init_logging(settings::log_level_from_query(&search));

        let document = gloo::utils::document();
        let ready_state = js_sys::Reflect::get(&document, &"readyState".into())
            .ok()
            .and_then(|state| state.as_string());
        if ready_state.as_deref() == Some("loading") {
            EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
        } else {
            boot();
        }
    }
}
