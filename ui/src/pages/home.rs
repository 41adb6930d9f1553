use leptos::prelude::*;

use crate::app::use_catalog;
use crate::components::{
    button::{Button, Variant},
    card::Card,
    scroll::{Reveal, scroll_to_section},
    status::{LoadFailed, Loading},
};
use crate::config::PROFILE;
use crate::data::Lesson;
use crate::pages::load;
use crate::routes::{AppState, Page};

pub const FEATURED_COUNT: usize = 4;

/// The first lessons in catalog order.
pub fn featured(lessons: &[Lesson]) -> Vec<Lesson> {
    lessons.iter().take(FEATURED_COUNT).cloned().collect()
}

#[component]
fn Hero(state: AppState) -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center bg-gradient-to-br from-purple-900 via-indigo-900 to-purple-800 text-white pt-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                    <Reveal class="space-y-6">
                        <h1 class="text-5xl md:text-6xl font-bold leading-tight">
                            "مرحباً بكم في"
                            <span class="block text-purple-300">"منصة " {PROFILE.name}</span>
                        </h1>
                        <p class="text-xl text-purple-100">{PROFILE.tagline}</p>
                        <div class="flex flex-wrap gap-4">
                            <Button icon="📘" on_click=move |_| state.navigate(Page::Lessons)>
                                "استكشف الدروس"
                            </Button>
                            <Button
                                variant=Variant::Outline
                                class="bg-white/10 border-white text-white hover:bg-white/20"
                                on_click=move |_| state.navigate(Page::Contact)
                            >
                                "تواصل معنا"
                            </Button>
                        </div>
                    </Reveal>

                    <div class="relative">
                        <div class="w-full h-96 bg-white/10 backdrop-blur-lg rounded-2xl flex items-center justify-center">
                            <div class="text-center">
                                <div class="text-8xl mb-4">"📚"</div>
                                <p class="text-2xl font-semibold">"التعليم بشغف"</p>
                            </div>
                        </div>
                    </div>
                </div>

                <button
                    class="mx-auto mt-12 block text-4xl text-purple-200 animate-bounce"
                    aria-label="scroll"
                    on:click=move |_| scroll_to_section("featured")
                >
                    "⌄"
                </button>
            </div>
        </section>
    }
}

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="py-20 bg-purple-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {PROFILE
                        .stats
                        .iter()
                        .map(|stat| view! {
                            <Card class="text-center">
                                <div class="text-4xl flex justify-center mb-3">{stat.glyph}</div>
                                <div class="text-3xl font-bold text-purple-900 mb-2">{stat.number}</div>
                                <div class="text-purple-600 font-semibold">{stat.label}</div>
                            </Card>
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn FeaturedCard(lesson: Lesson, state: AppState) -> impl IntoView {
    let id = lesson.id;
    view! {
        <Card on_click=Callback::new(move |_| state.open_lesson(id))>
            <div class="text-6xl mb-4 text-center">{lesson.thumbnail}</div>
            <h3 class="text-lg font-bold text-purple-900 mb-2">{lesson.title}</h3>
            <p class="text-purple-600 text-sm mb-4">{lesson.description}</p>
            <div class="flex justify-between text-sm text-purple-500">
                <span>"🎥 " {lesson.videos_count}</span>
                <span>"📄 " {lesson.files_count}</span>
            </div>
        </Card>
    }
}

#[component]
fn FeaturedLessons(state: AppState) -> impl IntoView {
    let catalog = use_catalog();
    let lessons = LocalResource::new(move || load::lessons(catalog.clone()));

    view! {
        <section id="featured" class="py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-4xl font-bold text-purple-900 mb-4">"الدروس المميزة"</h2>
                    <p class="text-xl text-purple-600">"اكتشف أحدث الدروس والشروحات"</p>
                </div>

                <Suspense fallback=|| view! { <Loading/> }>
                    {move || match lessons.get() {
                        Some(Ok(list)) => view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                                <For
                                    each=move || featured(&list)
                                    key=|lesson| lesson.id
                                    children=move |lesson| view! { <FeaturedCard lesson state/> }
                                />
                            </div>
                        }
                        .into_any(),
                        Some(Err(error)) => view! { <LoadFailed error/> }.into_any(),
                        None => ().into_any(),
                    }}
                </Suspense>

                <div class="flex justify-center mt-12">
                    <Button on_click=move |_| state.navigate(Page::Lessons)>"عرض جميع الدروس"</Button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactCta(state: AppState) -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-r from-purple-900 to-indigo-900 text-white">
            <Reveal class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="text-4xl font-bold mb-6">"هل لديك استفسار؟"</h2>
                <p class="text-xl text-purple-100 mb-8">
                    "نحن هنا لمساعدتك. تواصل معنا الآن وسنجيب على جميع أسئلتك."
                </p>
                <div class="flex justify-center">
                    <Button
                        variant=Variant::Outline
                        class="bg-white text-purple-900 hover:bg-purple-50"
                        on_click=move |_| state.navigate(Page::Contact)
                    >
                        "تواصل معنا الآن"
                    </Button>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn HomePage(state: AppState) -> impl IntoView {
    view! {
        <div>
            <Hero state/>
            <Stats/>
            <FeaturedLessons state/>
            <ContactCta state/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pollster::block_on;

    use super::*;
    use crate::data::{Catalog, MockCatalog};

    #[test]
    fn featured_are_first_four_in_catalog_order() {
        let lessons = block_on(MockCatalog.list_lessons()).unwrap();
        let picked = featured(&lessons);

        assert_eq!(picked.len(), FEATURED_COUNT);
        assert_eq!(picked, lessons[..FEATURED_COUNT].to_vec());
        assert_eq!(picked[1].videos_count, 5);
        assert_eq!(picked[3].files_count, 4);
    }

    #[test]
    fn featured_handles_short_catalogs() {
        let lessons = block_on(MockCatalog.list_lessons()).unwrap();
        assert_eq!(featured(&lessons[..2]).len(), 2);
        assert!(featured(&[]).is_empty());
    }
}
