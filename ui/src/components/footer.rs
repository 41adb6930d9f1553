use leptos::prelude::AriaAttributes;
use leptos::prelude::ClassAttribute;
use leptos::prelude::CollectView;
use leptos::prelude::ElementChild;
use leptos::prelude::GlobalAttributes;
use leptos::prelude::OnAttribute;
use leptos::{IntoView, component, view};

use crate::config::PROFILE;
use crate::routes::{AppState, Page};

const QUICK_LINKS: [Page; 4] = [Page::Lessons, Page::Files, Page::Videos, Page::Contact];

#[component]
pub fn Footer(state: AppState) -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-r from-purple-900 to-indigo-900 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-xl font-bold mb-4">{PROFILE.name}</h3>
                        <p class="text-purple-200">{PROFILE.blurb}</p>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4">"روابط سريعة"</h3>
                        <ul class="space-y-2 text-purple-200">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|page| view! {
                                    <li
                                        class="hover:text-white cursor-pointer transition-colors"
                                        on:click=move |_| state.navigate(page)
                                    >
                                        {page.label()}
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4">"تواصل معنا"</h3>
                        <div class="space-y-3 text-purple-200">
                            <div class="flex items-center gap-2">
                                <span aria-hidden="true">"☎"</span>
                                <span dir="ltr">{PROFILE.phone}</span>
                            </div>
                            <div class="flex items-center gap-2">
                                <span aria-hidden="true">"✉"</span>
                                <span>{PROFILE.email}</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="border-t border-purple-700 mt-8 pt-8 text-center text-purple-200">
                    <p>"© " {PROFILE.copyright_year} " " {PROFILE.name} ". جميع الحقوق محفوظة."</p>
                </div>
            </div>
        </footer>
    }
}
