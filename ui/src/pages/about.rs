use leptos::prelude::*;

use crate::components::{
    button::Button,
    card::{Card, PageHeader, PageShell},
    scroll::Reveal,
};
use crate::config::PROFILE;
use crate::routes::{AppState, Page};

#[component]
pub fn AboutPage(state: AppState) -> impl IntoView {
    view! {
        <PageShell>
            <PageHeader title="من أنا" subtitle=PROFILE.subject/>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <Card class="lg:col-span-2">
                    <h2 class="text-2xl font-bold text-purple-900 mb-4">{PROFILE.name}</h2>
                    {PROFILE
                        .bio
                        .iter()
                        .map(|para| view! { <p class="text-lg text-purple-700 mb-4 leading-relaxed">{*para}</p> })
                        .collect_view()}
                </Card>

                <Card>
                    <h2 class="text-2xl font-bold text-purple-900 mb-4">"المؤهلات"</h2>
                    <ul class="space-y-3">
                        {PROFILE
                            .qualifications
                            .iter()
                            .map(|q| view! {
                                <li class="flex items-start gap-2 text-purple-700">
                                    <span class="text-purple-500">"✔"</span>
                                    <span>{*q}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </Card>
            </div>

            <Reveal class="mt-12">
                <h2 class="text-3xl font-bold text-purple-900 mb-8 text-center">"طريقتي في التدريس"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {PROFILE
                        .approach
                        .iter()
                        .map(|(glyph, text)| view! {
                            <Card class="text-center">
                                <div class="text-5xl mb-4">{*glyph}</div>
                                <p class="text-lg font-semibold text-purple-900">{*text}</p>
                            </Card>
                        })
                        .collect_view()}
                </div>
            </Reveal>

            <div class="flex justify-center mt-12">
                <Button on_click=move |_| state.navigate(Page::Contact)>"احجز حصتك الآن"</Button>
            </div>
        </PageShell>
    }
}
