//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, in-memory on native)
//! - Logger bootstrap
//! - Current location pathname

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStore;

/// Store used by the running app.
#[cfg(target_arch = "wasm32")]
pub type PlatformStore = LocalStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = crate::storage::MemoryStore;

/// Open the platform store.
#[cfg(target_arch = "wasm32")]
pub fn open_store() -> crate::error::Result<PlatformStore> {
    LocalStore::open()
}

/// Native builds have no durable store; lists live for the process only.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_store() -> crate::error::Result<PlatformStore> {
    Ok(crate::storage::MemoryStore::new())
}

/// Install the logger for this platform at `level`.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: log::Level) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str()),
    )
    .try_init();
}

/// Pathname of the current page (`window.location.pathname`).
#[cfg(target_arch = "wasm32")]
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> String {
    "/".to_string()
}
