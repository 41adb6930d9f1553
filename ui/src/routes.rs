// ui/src/routes.rs
use leptos::logging::log;
use leptos::prelude::*;

use crate::data::LessonId;
use crate::pages::{
    about::AboutPage, contact::ContactPage, files::FilesPage, home::HomePage,
    lesson_details::{LessonDetailsPage, NoLessonSelected}, lessons::LessonsPage,
    reviews::ReviewsPage, videos::VideosPage,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Lessons,
    LessonDetails,
    Files,
    Videos,
    Reviews,
    About,
    Contact,
}

impl Page {
    /// Order of the navbar entries. `LessonDetails` is only reachable from a card.
    pub const NAV: [Page; 7] = [
        Page::Home,
        Page::Lessons,
        Page::Files,
        Page::Videos,
        Page::Reviews,
        Page::About,
        Page::Contact,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Lessons => "lessons",
            Page::LessonDetails => "lesson-details",
            Page::Files => "files",
            Page::Videos => "videos",
            Page::Reviews => "reviews",
            Page::About => "about",
            Page::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "الرئيسية",
            Page::Lessons => "الدروس",
            Page::LessonDetails => "تفاصيل الدرس",
            Page::Files => "الملفات",
            Page::Videos => "الفيديوهات",
            Page::Reviews => "التقييمات",
            Page::About => "من أنا",
            Page::Contact => "تواصل",
        }
    }
}

/// Which page is showing and, for `LessonDetails`, which lesson.
///
/// The only writable top-level state. Copy it into any component that needs to
/// navigate; every transition is a plain signal write and takes effect at once.
#[derive(Debug, Copy, Clone)]
pub struct AppState {
    page: RwSignal<Page>,
    selected_lesson: RwSignal<Option<LessonId>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Home),
            selected_lesson: RwSignal::new(None),
        }
    }

    pub fn page(&self) -> Page {
        self.page.get()
    }

    pub fn selected_lesson(&self) -> Option<LessonId> {
        self.selected_lesson.get()
    }

    pub fn is_current(&self, page: Page) -> bool {
        self.page.get() == page
    }

    pub fn navigate(&self, page: Page) {
        log!("navigate -> {}", page.slug());
        self.page.set(page);
    }

    pub fn open_lesson(&self, id: LessonId) {
        self.selected_lesson.set(Some(id));
        self.navigate(Page::LessonDetails);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn PageOutlet(state: AppState) -> impl IntoView {
    view! {
        {move || match state.page() {
            Page::Home => view! { <HomePage state/> }.into_any(),
            Page::Lessons => view! { <LessonsPage state/> }.into_any(),
            Page::LessonDetails => match state.selected_lesson() {
                Some(lesson_id) => view! { <LessonDetailsPage state lesson_id/> }.into_any(),
                None => view! { <NoLessonSelected state/> }.into_any(),
            },
            Page::Files => view! { <FilesPage/> }.into_any(),
            Page::Videos => view! { <VideosPage/> }.into_any(),
            Page::Reviews => view! { <ReviewsPage/> }.into_any(),
            Page::About => view! { <AboutPage state/> }.into_any(),
            Page::Contact => view! { <ContactPage/> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::Owner;

    use super::*;

    fn with_state(f: impl FnOnce(AppState)) {
        Owner::new().with(|| f(AppState::new()));
    }

    #[test]
    fn starts_home_without_selection() {
        with_state(|state| {
            assert_eq!(state.page.get_untracked(), Page::Home);
            assert_eq!(state.selected_lesson.get_untracked(), None);
        });
    }

    #[test]
    fn navigate_is_immediate_for_every_page() {
        with_state(|state| {
            for page in Page::NAV.into_iter().chain([Page::LessonDetails]).rev() {
                state.navigate(page);
                assert_eq!(state.page.get_untracked(), page);
            }
        });
    }

    #[test]
    fn open_lesson_selects_then_shows_details() {
        with_state(|state| {
            state.open_lesson(3);
            assert_eq!(state.selected_lesson.get_untracked(), Some(3));
            assert_eq!(state.page.get_untracked(), Page::LessonDetails);

            state.open_lesson(1);
            assert_eq!(state.selected_lesson.get_untracked(), Some(1));
        });
    }

    #[test]
    fn leaving_details_keeps_the_selection() {
        with_state(|state| {
            state.open_lesson(2);
            state.navigate(Page::Lessons);
            assert_eq!(state.page.get_untracked(), Page::Lessons);
            assert_eq!(state.selected_lesson.get_untracked(), Some(2));
        });
    }

    #[test]
    fn nav_entries_are_distinct_and_exclude_details() {
        assert!(!Page::NAV.contains(&Page::LessonDetails));
        let mut slugs: Vec<_> = Page::NAV.iter().map(Page::slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), Page::NAV.len());
    }
}
