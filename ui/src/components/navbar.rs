use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::config::PROFILE;
use crate::routes::{AppState, Page};

/// Vertical offset in px past which the bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

/// Open/closed state of the small-screen menu.
#[derive(Debug, Copy, Clone)]
pub struct MobileMenu {
    open: RwSignal<bool>,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self { open: RwSignal::new(false) }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn item_class(active: bool) -> &'static str {
    if active {
        "bg-purple-900 text-white"
    } else {
        "text-purple-900 hover:bg-purple-50"
    }
}

#[component]
pub fn Navbar(state: AppState) -> impl IntoView {
    let menu = MobileMenu::new();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    let desktop_item = move |page: Page| {
        view! {
            <button
                class=move || format!(
                    "px-4 py-2 rounded-lg font-semibold transition-all {}",
                    item_class(state.is_current(page))
                )
                on:click=move |_| state.navigate(page)
            >
                {page.label()}
            </button>
        }
    };

    let mobile_item = move |page: Page| {
        view! {
            <button
                class=move || format!(
                    "w-full text-right px-6 py-3 font-semibold transition-all {}",
                    item_class(state.is_current(page))
                )
                on:click=move |_| {
                    state.navigate(page);
                    menu.close();
                }
            >
                {page.label()}
            </button>
        }
    };

    view! {
        <nav class=move || format!(
            "fixed w-full z-50 transition-all duration-300 {}",
            if scrolled.get() { "bg-white shadow-lg" } else { "bg-transparent" }
        )>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-20">
                    <div
                        class="flex items-center gap-3 cursor-pointer"
                        on:click=move |_| state.navigate(Page::Home)
                    >
                        <div class="w-12 h-12 bg-gradient-to-br from-purple-900 to-indigo-900 rounded-full flex items-center justify-center text-2xl">
                            "📖"
                        </div>
                        <div>
                            <h1 class="text-xl font-bold text-purple-900">{PROFILE.name}</h1>
                            <p class="text-xs text-purple-600">{PROFILE.subject}</p>
                        </div>
                    </div>

                    <div class="hidden md:flex gap-1">
                        {Page::NAV.into_iter().map(desktop_item).collect_view()}
                    </div>

                    <button
                        class="md:hidden text-purple-900 text-3xl"
                        aria-label="menu"
                        on:click=move |_| menu.toggle()
                    >
                        {move || if menu.is_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu.is_open()>
                <div class="md:hidden bg-white border-t shadow-lg">
                    {Page::NAV.into_iter().map(mobile_item).collect_view()}
                </div>
            </Show>
        </nav>
    }
}
