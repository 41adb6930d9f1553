use leptos::html;
use leptos::prelude::*;
use leptos_use::use_intersection_observer;

/// Smooth-scrolls the element with the given id into view.
#[cfg(feature = "web")]
pub fn scroll_to_section(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        leptos::logging::warn!("no section #{id} to scroll to");
        return;
    };

    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[cfg(not(feature = "web"))]
pub fn scroll_to_section(_id: &str) {}

/// Jumps back to the top of the document, like a fresh page load.
#[cfg(feature = "web")]
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

#[cfg(not(feature = "web"))]
pub fn scroll_to_top() {}

/// Fades its children in the first time they enter the viewport.
#[component]
pub fn Reveal(
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let target: NodeRef<html::Div> = NodeRef::new();
    let seen = RwSignal::new(false);

    use_intersection_observer(target, move |entries, _| {
        // latch: once shown, never hide again
        if entries.iter().any(|e| e.is_intersecting()) {
            seen.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            id=id
            class=move || format!(
                "transition-all duration-700 {} {}",
                if seen.get() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-6" },
                class,
            )
        >
            {children()}
        </div>
    }
}
