use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl Variant {
    pub fn classes(&self) -> &'static str {
        match self {
            Variant::Primary => {
                "bg-gradient-to-r from-purple-900 to-indigo-900 text-white hover:from-purple-800 hover:to-indigo-800"
            }
            Variant::Secondary => "bg-purple-100 text-purple-900 hover:bg-purple-200",
            Variant::Outline => "border-2 border-purple-900 text-purple-900 hover:bg-purple-50",
        }
    }
}

#[component]
pub fn Button(
    on_click: impl FnMut(MouseEvent) + 'static,
    #[prop(optional)] variant: Variant,
    /// extra classes appended after the variant's
    #[prop(optional)]
    class: &'static str,
    /// glyph rendered before the label
    #[prop(optional)]
    icon: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=format!(
                "px-6 py-3 rounded-lg font-semibold transition-all duration-300 flex items-center gap-2 {} {}",
                variant.classes(),
                class,
            )
            on:click=on_click
        >
            {icon.map(|glyph| view! { <span aria-hidden="true">{glyph}</span> })}
            {children()}
        </button>
    }
}
