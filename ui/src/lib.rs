pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod pages;
pub mod routes;

pub use crate::app::App;

#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App catalog=data::CatalogHandle::from_build()/> });
}
