use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

// the values kept here are read by the stylesheet-facing code as bare tokens, so they bypass
// gloo's json encoding and go through the raw Storage object
pub fn set_local_storage(key: &str, value: &str) {
    LocalStorage::raw()
        .set_item(key, value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
}

pub fn get_local_storage(key: &str) -> Option<String> {
    LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        None
    })
}
