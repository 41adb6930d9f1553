use leptos::prelude::*;

const FIELD_CLASS: &str =
    "w-full px-4 py-3 border-2 border-purple-200 rounded-lg focus:border-purple-600 focus:outline-none transition-colors";

#[component]
fn FieldLabel(label: &'static str, required: bool) -> impl IntoView {
    view! {
        <label class="block text-purple-900 font-semibold mb-2">
            {label}
            {required.then(|| view! { " " <span class="text-red-500">"*"</span> })}
        </label>
    }
}

/// Labelled single-line input bound to `value`.
#[component]
pub fn Input(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <FieldLabel label required/>
            <input
                type=kind
                placeholder=placeholder
                required=required
                class=FIELD_CLASS
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn Textarea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="mb-4">
            <FieldLabel label required/>
            <textarea
                placeholder=placeholder
                required=required
                rows=rows
                class=format!("{FIELD_CLASS} resize-none")
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
