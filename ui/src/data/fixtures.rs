use async_trait::async_trait;
use leptos::logging::log;
use once_cell::sync::Lazy;
use serde::Deserialize;

use super::{Catalog, ContactMessage, FileItem, Lesson, LessonDetail, LessonId, Review, Video};
use crate::error::{Error, Result};

const JSON: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Deserialize)]
pub(crate) struct Fixtures {
    pub lessons: Vec<Lesson>,
    pub details: Vec<LessonDetail>,
    pub files: Vec<FileItem>,
    pub videos: Vec<Video>,
    pub reviews: Vec<Review>,
}

pub(crate) static FIXTURES: Lazy<Fixtures> =
    Lazy::new(|| serde_json::from_str(JSON).expect("parse catalog.json"));

/// Placeholder catalog answering from the bundled fixture document.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCatalog;

#[async_trait(?Send)]
impl Catalog for MockCatalog {
    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        Ok(FIXTURES.lessons.clone())
    }

    async fn lesson_detail(&self, id: LessonId) -> Result<LessonDetail> {
        FIXTURES
            .details
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    async fn list_files(&self) -> Result<Vec<FileItem>> {
        Ok(FIXTURES.files.clone())
    }

    async fn list_videos(&self) -> Result<Vec<Video>> {
        Ok(FIXTURES.videos.clone())
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        Ok(FIXTURES.reviews.clone())
    }

    async fn send_message(&self, message: &ContactMessage) -> Result<()> {
        message.validate()?;
        log!("contact message from {} <{}> accepted", message.name, message.email);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pollster::block_on;

    use super::*;
    use crate::data::{average_rating, ContactField, Level, Platform};

    #[test]
    fn fixture_document_parses() {
        assert_eq!(FIXTURES.lessons.len(), 4);
        assert_eq!(FIXTURES.details.len(), 4);
        assert_eq!(FIXTURES.files.len(), 4);
        assert_eq!(FIXTURES.videos.len(), 3);
        assert_eq!(FIXTURES.reviews.len(), 4);
    }

    #[test]
    fn lesson_ids_are_unique() {
        let ids: HashSet<_> = FIXTURES.lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), FIXTURES.lessons.len());
    }

    #[test]
    fn lessons_keep_document_order() {
        let lessons = block_on(MockCatalog.list_lessons()).unwrap();
        let ids: Vec<_> = lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(lessons[2].level, Level::FirstBac);
        assert_eq!(lessons[0].thumbnail, "📐");
    }

    #[test]
    fn detail_matches_requested_lesson() {
        for lesson in block_on(MockCatalog.list_lessons()).unwrap() {
            let detail = block_on(MockCatalog.lesson_detail(lesson.id)).unwrap();
            assert_eq!(detail.id, lesson.id);
            assert_eq!(detail.title, lesson.title);
        }
    }

    #[test]
    fn unknown_lesson_is_not_found() {
        assert_eq!(block_on(MockCatalog.lesson_detail(99)), Err(Error::NotFound(99)));
    }

    #[test]
    fn videos_carry_platform_and_views() {
        let videos = block_on(MockCatalog.list_videos()).unwrap();
        assert_eq!(videos[2].platform, Platform::Tiktok);
        assert_eq!(videos[0].views_label().as_deref(), Some("1.2K"));
        assert_eq!(videos[1].views_label().as_deref(), Some("890"));
    }

    #[test]
    fn reviews_average_out() {
        let reviews = block_on(MockCatalog.list_reviews()).unwrap();
        assert_eq!(average_rating(&reviews), Some(4.8));
        assert!(reviews.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn files_list_is_fixture_copy() {
        let files = block_on(MockCatalog.list_files()).unwrap();
        assert_eq!(files, FIXTURES.files);
        assert_eq!(files[2].downloads, 428);
    }

    #[test]
    fn send_message_validates_first() {
        let bad = ContactMessage { name: "x".into(), email: "x".into(), ..Default::default() };
        assert_eq!(
            block_on(MockCatalog.send_message(&bad)),
            Err(Error::Validation { field: ContactField::Email })
        );

        let good = ContactMessage {
            name: "x".into(),
            email: "x@example.com".into(),
            phone: None,
            message: "hello".into(),
        };
        assert!(block_on(MockCatalog.send_message(&good)).is_ok());
    }
}
