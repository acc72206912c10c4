//! Student Records entry point
//!
//! Handles platform-specific initialization and mounts the app.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    use student_records::consts::MOUNT_ELEMENT_ID;
    use student_records::platform::{self, PlatformStore};
    use student_records::{App, AppConfig};

    thread_local! {
        static APP: RefCell<Option<App<PlatformStore>>> = const { RefCell::new(None) };
    }

    /// Render the current location into the mount element.
    fn render_current() {
        let path = platform::current_path();
        let text = APP.with(|cell| match cell.borrow().as_ref() {
            Some(app) => match app.render(&path) {
                Ok(Some(text)) => text,
                Ok(None) => format!("Not found: {}", path),
                Err(e) => {
                    log::error!("Failed to render '{}': {}", path, e);
                    format!("Something went wrong: {}", e)
                }
            },
            None => {
                log::warn!("App not initialized");
                String::new()
            }
        });

        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(MOUNT_ELEMENT_ID))
        {
            el.set_text_content(Some(&text));
        }
    }

    /// Push `name`'s route onto the history stack and re-render.
    #[wasm_bindgen]
    pub fn navigate(name: &str) -> Result<(), JsValue> {
        let href = APP.with(|cell| cell.borrow().as_ref().and_then(|app| app.router().href(name)));
        let Some(href) = href else {
            log::warn!("Unknown route name '{}'", name);
            return Ok(());
        };
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&href))?;
        render_current();
        Ok(())
    }

    pub fn run() -> Result<(), JsValue> {
        let config = AppConfig::from_env();
        platform::init_logging(config.log_level);

        log::info!("Student Records starting (base '{}')", config.base_url);

        let store = platform::open_store().map_err(|e| JsValue::from_str(&e.to_string()))?;
        APP.with(|cell| *cell.borrow_mut() = Some(App::new(config, store)));
        render_current();

        // Back/forward buttons
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PopStateEvent| {
            render_current();
        });
        window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
        closure.forget();

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    web_app::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use student_records::{App, AppConfig, platform};

    let config = AppConfig::from_env();
    platform::init_logging(config.log_level);
    log::info!("Student Records (native) starting...");
    log::info!("Native mode keeps records in memory - run with `trunk serve` for the web version");

    let store = match platform::open_store() {
        Ok(store) => store,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let app = App::new(config, store);

    for route in app.router().routes() {
        let location = app.router().href(route.name).unwrap_or_default();
        match app.render(&location) {
            Ok(Some(text)) => println!("== {} ==\n{}\n", location, text),
            Ok(None) => println!("== {} == (no route)\n", location),
            Err(e) => log::error!("Failed to render '{}': {}", location, e),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
