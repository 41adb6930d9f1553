use leptos::prelude::*;

/// White rounded panel. Cards with an `on_click` lift on hover.
#[component]
pub fn Card(
    #[prop(optional)] on_click: Option<Callback<()>>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let hover = if on_click.is_some() {
        "hover:shadow-2xl hover:-translate-y-2 cursor-pointer"
    } else {
        ""
    };

    view! {
        <div
            class=format!(
                "bg-white rounded-xl shadow-lg p-6 transition-all duration-300 {hover} {class}"
            )
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </div>
    }
}

/// Page body below the fixed navbar.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="pt-32 pb-20 min-h-screen bg-purple-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">{children()}</div>
        </div>
    }
}

#[component]
pub fn PageHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h1 class="text-5xl font-bold text-purple-900 mb-4">{title}</h1>
            <p class="text-xl text-purple-600">{subtitle}</p>
        </div>
    }
}

/// Pill toggle used by the list filters.
#[component]
pub fn FilterChip(
    label: String,
    active: Signal<bool>,
    on_select: impl FnMut(leptos::ev::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            class=move || format!(
                "px-6 py-3 rounded-lg font-semibold transition-all {}",
                if active.get() {
                    "bg-purple-900 text-white"
                } else {
                    "bg-white text-purple-900 hover:bg-purple-100"
                }
            )
            on:click=on_select
        >
            {label}
        </button>
    }
}
