use leptos::prelude::*;

use crate::app::use_catalog;
use crate::components::{
    button::{Button, Variant},
    card::{Card, PageShell},
    status::{LoadFailed, Loading},
};
use crate::data::{LessonDetail, LessonId};
use crate::error::Error;
use crate::pages::{files::FileRow, load, videos::VideoEmbed};
use crate::routes::{AppState, Page};

#[component]
fn BackToLessons(state: AppState) -> impl IntoView {
    view! {
        <button
            class="mb-6 text-purple-900 hover:text-purple-700 font-semibold flex items-center gap-2"
            on:click=move |_| state.navigate(Page::Lessons)
        >
            "→ العودة للدروس"
        </button>
    }
}

#[component]
fn DetailBody(detail: LessonDetail) -> impl IntoView {
    let LessonDetail { title, description, videos, files, .. } = detail;

    view! {
        <Card class="mb-8">
            <h1 class="text-4xl font-bold text-purple-900 mb-4">{title}</h1>
            <p class="text-lg text-purple-600">{description}</p>
        </Card>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
            <div>
                <h2 class="text-2xl font-bold text-purple-900 mb-6">"الفيديوهات"</h2>
                <div class="space-y-6">
                    <For
                        each=move || videos.clone()
                        key=|video| video.id
                        children=|video| view! { <VideoEmbed video/> }
                    />
                </div>
            </div>
            <div>
                <h2 class="text-2xl font-bold text-purple-900 mb-6">"الملفات"</h2>
                <div class="space-y-4">
                    <For
                        each=move || files.clone()
                        key=|file| file.id
                        children=|file| view! { <FileRow file/> }
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
fn LessonMissing(lesson_id: LessonId) -> impl IntoView {
    view! {
        <Card class="text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <p class="text-xl text-purple-900 font-semibold">"هذا الدرس غير متوفر"</p>
            <p class="text-sm text-purple-500 mt-2">"#" {lesson_id}</p>
        </Card>
    }
}

/// Loads and shows the lesson picked on the lessons or home page.
#[component]
pub fn LessonDetailsPage(state: AppState, lesson_id: LessonId) -> impl IntoView {
    let catalog = use_catalog();
    let detail = LocalResource::new(move || load::lesson_detail(catalog.clone(), lesson_id));

    view! {
        <PageShell>
            <BackToLessons state/>
            <Suspense fallback=|| view! { <Loading/> }>
                {move || match detail.get() {
                    Some(Ok(detail)) => view! { <DetailBody detail/> }.into_any(),
                    Some(Err(Error::NotFound(id))) => view! { <LessonMissing lesson_id=id/> }.into_any(),
                    Some(Err(error)) => view! { <LoadFailed error/> }.into_any(),
                    None => ().into_any(),
                }}
            </Suspense>
        </PageShell>
    }
}

/// Shown when the details page is reached before any lesson was picked.
#[component]
pub fn NoLessonSelected(state: AppState) -> impl IntoView {
    view! {
        <PageShell>
            <Card class="text-center max-w-xl mx-auto">
                <div class="text-6xl mb-4">"📚"</div>
                <p class="text-xl text-purple-900 font-semibold mb-6">"اختر درساً من قائمة الدروس"</p>
                <div class="flex justify-center">
                    <Button variant=Variant::Secondary on_click=move |_| state.navigate(Page::Lessons)>
                        "عرض الدروس"
                    </Button>
                </div>
            </Card>
        </PageShell>
    }
}
