//! The fetch each page makes when it becomes active.
//!
//! Pages build their `LocalResource` from these, so every activation asks the
//! catalog again; nothing is kept between visits.

use leptos::logging::log;

use crate::data::{CatalogHandle, FileItem, Lesson, LessonDetail, LessonId, Review, Video};
use crate::error::Result;

pub async fn lessons(catalog: CatalogHandle) -> Result<Vec<Lesson>> {
    log!("loading lessons");
    catalog.list_lessons().await
}

pub async fn lesson_detail(catalog: CatalogHandle, id: LessonId) -> Result<LessonDetail> {
    log!("loading lesson {id}");
    catalog.lesson_detail(id).await
}

pub async fn files(catalog: CatalogHandle) -> Result<Vec<FileItem>> {
    log!("loading files");
    catalog.list_files().await
}

pub async fn videos(catalog: CatalogHandle) -> Result<Vec<Video>> {
    log!("loading videos");
    catalog.list_videos().await
}

pub async fn reviews(catalog: CatalogHandle) -> Result<Vec<Review>> {
    log!("loading reviews");
    catalog.list_reviews().await
}

#[cfg(test)]
mod tests {
    use leptos::prelude::Owner;
    use pollster::block_on;

    use super::*;
    use crate::data::recording::{Call, RecordingCatalog};
    use crate::error::Error;
    use crate::routes::{AppState, Page};

    #[test]
    fn opening_a_lesson_loads_that_id() {
        let (catalog, calls) = RecordingCatalog::handle();
        Owner::new().with(|| {
            let state = AppState::new();
            state.open_lesson(3);
            assert_eq!(state.page(), Page::LessonDetails);

            let id = state.selected_lesson().unwrap();
            let detail = block_on(lesson_detail(catalog.clone(), id)).unwrap();
            assert_eq!(detail.id, 3);
        });
        assert_eq!(calls.take(), vec![Call::LessonDetail(3)]);
    }

    #[test]
    fn every_visit_loads_again() {
        let (catalog, calls) = RecordingCatalog::handle();
        Owner::new().with(|| {
            let state = AppState::new();

            state.open_lesson(2);
            block_on(lesson_detail(catalog.clone(), state.selected_lesson().unwrap())).unwrap();
            state.navigate(Page::Lessons);
            block_on(lessons(catalog.clone())).unwrap();
            state.navigate(Page::LessonDetails);
            block_on(lesson_detail(catalog.clone(), state.selected_lesson().unwrap())).unwrap();
        });
        assert_eq!(
            calls.take(),
            vec![Call::LessonDetail(2), Call::Lessons, Call::LessonDetail(2)]
        );
    }

    #[test]
    fn each_listing_asks_its_own_operation_once() {
        let (catalog, calls) = RecordingCatalog::handle();
        block_on(async {
            files(catalog.clone()).await.unwrap();
            videos(catalog.clone()).await.unwrap();
            reviews(catalog.clone()).await.unwrap();
        });
        assert_eq!(calls.take(), vec![Call::Files, Call::Videos, Call::Reviews]);
    }

    #[test]
    fn unknown_lesson_is_still_one_load() {
        let (catalog, calls) = RecordingCatalog::handle();
        let err = block_on(lesson_detail(catalog, 42)).unwrap_err();
        assert_eq!(err, Error::NotFound(42));
        assert_eq!(calls.take(), vec![Call::LessonDetail(42)]);
    }
}
