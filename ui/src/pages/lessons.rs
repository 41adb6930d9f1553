use leptos::prelude::*;

use crate::app::use_catalog;
use crate::components::{
    card::{Card, FilterChip, PageHeader, PageShell},
    status::{LoadFailed, Loading},
};
use crate::data::{Lesson, Level};
use crate::pages::load;
use crate::routes::AppState;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(Level),
}

impl LevelFilter {
    pub fn options() -> impl Iterator<Item = LevelFilter> {
        std::iter::once(LevelFilter::All).chain(Level::ALL.into_iter().map(LevelFilter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            LevelFilter::All => "الكل",
            LevelFilter::Only(level) => level.label(),
        }
    }

    pub fn matches(&self, lesson: &Lesson) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(level) => lesson.level == *level,
        }
    }

    /// Keeps catalog order.
    pub fn apply(&self, lessons: &[Lesson]) -> Vec<Lesson> {
        lessons.iter().filter(|l| self.matches(l)).cloned().collect()
    }
}

#[component]
fn LessonCard(lesson: Lesson, state: AppState) -> impl IntoView {
    let id = lesson.id;
    view! {
        <Card on_click=Callback::new(move |_| state.open_lesson(id))>
            <div class="text-7xl mb-4 text-center">{lesson.thumbnail}</div>
            <div class="mb-2">
                <span class="bg-purple-100 text-purple-900 px-3 py-1 rounded-full text-sm font-semibold">
                    {lesson.level.label()}
                </span>
            </div>
            <h3 class="text-xl font-bold text-purple-900 mb-2">{lesson.title}</h3>
            <p class="text-purple-600 mb-4">{lesson.description}</p>
            <div class="flex justify-between text-purple-500 border-t pt-4">
                <span>"🎥 " {lesson.videos_count} " فيديو"</span>
                <span>"📄 " {lesson.files_count} " ملف"</span>
            </div>
        </Card>
    }
}

#[component]
pub fn LessonsPage(state: AppState) -> impl IntoView {
    let catalog = use_catalog();
    let lessons = LocalResource::new(move || load::lessons(catalog.clone()));
    let filter = RwSignal::new(LevelFilter::All);

    view! {
        <PageShell>
            <PageHeader title="جميع الدروس" subtitle="اختر الدرس المناسب لمستواك"/>

            <div class="flex flex-wrap justify-center gap-4 mb-12">
                {LevelFilter::options()
                    .map(|option| view! {
                        <FilterChip
                            label=option.label().to_owned()
                            active=Signal::derive(move || filter.get() == option)
                            on_select=move |_| filter.set(option)
                        />
                    })
                    .collect_view()}
            </div>

            <Suspense fallback=|| view! { <Loading/> }>
                {move || match lessons.get() {
                    Some(Ok(list)) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            <For
                                each=move || filter.get().apply(&list)
                                key=|lesson| lesson.id
                                children=move |lesson| view! { <LessonCard lesson state/> }
                            />
                        </div>
                    }
                    .into_any(),
                    Some(Err(error)) => view! { <LoadFailed error/> }.into_any(),
                    None => ().into_any(),
                }}
            </Suspense>
        </PageShell>
    }
}

#[cfg(test)]
mod tests {
    use pollster::block_on;

    use super::*;
    use crate::data::{Catalog, MockCatalog};

    fn lessons() -> Vec<Lesson> {
        block_on(MockCatalog.list_lessons()).unwrap()
    }

    #[test]
    fn all_is_identity() {
        let lessons = lessons();
        assert_eq!(LevelFilter::All.apply(&lessons), lessons);
    }

    #[test]
    fn level_filter_keeps_exact_matches_in_order() {
        let lessons = lessons();
        for level in Level::ALL {
            let picked = LevelFilter::Only(level).apply(&lessons);
            let expected: Vec<_> = lessons.iter().filter(|l| l.level == level).cloned().collect();
            assert_eq!(picked, expected);
        }

        let ids: Vec<_> = LevelFilter::Only(Level::SecondBac)
            .apply(&lessons)
            .iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn level_subsets_partition_the_catalog() {
        let lessons = lessons();
        let total: usize = Level::ALL
            .into_iter()
            .map(|level| LevelFilter::Only(level).apply(&lessons).len())
            .sum();
        assert_eq!(total, lessons.len());
    }

    #[test]
    fn options_start_with_all() {
        let options: Vec<_> = LevelFilter::options().collect();
        assert_eq!(options[0], LevelFilter::All);
        assert_eq!(options.len(), 1 + Level::ALL.len());
    }
}
