use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{footer::Footer, navbar::Navbar, scroll::scroll_to_top};
use crate::config::PROFILE;
use crate::data::CatalogHandle;
use crate::routes::{AppState, PageOutlet};

/// The catalog provided by `App`. Panics outside the app tree.
pub fn use_catalog() -> CatalogHandle {
    expect_context::<CatalogHandle>()
}

#[component]
pub fn App(catalog: CatalogHandle) -> impl IntoView {
    provide_meta_context();
    provide_context(catalog);

    let state = AppState::new();

    // page changes start at the top, like a fresh load
    Effect::new(move |prev: Option<()>| {
        state.page();
        if prev.is_some() {
            scroll_to_top();
        }
    });

    view! {
        <Title text=move || format!("{} | {}", PROFILE.name, state.page().label())/>
        <Meta name="description" content=PROFILE.tagline/>

        <div class="min-h-screen bg-white font-sans">
            <Navbar state/>
            <main>
                <PageOutlet state/>
            </main>
            <Footer state/>
        </div>
    }
}
