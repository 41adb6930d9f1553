use leptos::prelude::*;

use crate::error::Error;

#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="pt-32 pb-20 text-center text-purple-900">"جاري التحميل..."</div> }
}

#[component]
pub fn LoadFailed(error: Error) -> impl IntoView {
    leptos::logging::error!("load failed: {error}");

    view! {
        <div class="max-w-xl mx-auto my-12 p-6 rounded-xl bg-red-50 border border-red-200 text-center">
            <p class="text-red-700 font-semibold mb-2">"تعذر تحميل البيانات. حاول مرة أخرى لاحقاً."</p>
            <p class="text-sm text-red-500" dir="ltr">{error.to_string()}</p>
        </div>
    }
}
