//! Test catalog that answers from the fixtures and remembers every call.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{
    Catalog, CatalogHandle, ContactMessage, FileItem, Lesson, LessonDetail, LessonId, MockCatalog,
    Review, Video,
};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Lessons,
    LessonDetail(LessonId),
    Files,
    Videos,
    Reviews,
    SendMessage,
}

#[derive(Debug, Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<Call>>>);

impl Calls {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    /// Calls so far, oldest first; the log is emptied.
    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingCatalog {
    calls: Calls,
}

impl RecordingCatalog {
    pub fn handle() -> (CatalogHandle, Calls) {
        let catalog = Self::default();
        let calls = catalog.calls.clone();
        (CatalogHandle::new(catalog), calls)
    }
}

#[async_trait(?Send)]
impl Catalog for RecordingCatalog {
    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        self.calls.push(Call::Lessons);
        MockCatalog.list_lessons().await
    }

    async fn lesson_detail(&self, id: LessonId) -> Result<LessonDetail> {
        self.calls.push(Call::LessonDetail(id));
        MockCatalog.lesson_detail(id).await
    }

    async fn list_files(&self) -> Result<Vec<FileItem>> {
        self.calls.push(Call::Files);
        MockCatalog.list_files().await
    }

    async fn list_videos(&self) -> Result<Vec<Video>> {
        self.calls.push(Call::Videos);
        MockCatalog.list_videos().await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.calls.push(Call::Reviews);
        MockCatalog.list_reviews().await
    }

    async fn send_message(&self, message: &ContactMessage) -> Result<()> {
        self.calls.push(Call::SendMessage);
        MockCatalog.send_message(message).await
    }
}
