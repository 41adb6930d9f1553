//! Data access: the entities the site shows and the `Catalog` capability
//! that loads them.

mod contact;
mod fixtures;
mod models;
#[cfg(test)]
pub(crate) mod recording;
mod remote;

use std::sync::Arc;

use async_trait::async_trait;

pub use contact::{ContactField, ContactMessage};
pub use fixtures::MockCatalog;
pub use models::*;
pub use remote::HttpCatalog;

use crate::error::Result;

/// Async lookups backing every page. Futures are `?Send`: in the browser they
/// run on the single UI thread.
#[async_trait(?Send)]
pub trait Catalog {
    async fn list_lessons(&self) -> Result<Vec<Lesson>>;
    async fn lesson_detail(&self, id: LessonId) -> Result<LessonDetail>;
    async fn list_files(&self) -> Result<Vec<FileItem>>;
    async fn list_videos(&self) -> Result<Vec<Video>>;
    async fn list_reviews(&self) -> Result<Vec<Review>>;
    async fn send_message(&self, message: &ContactMessage) -> Result<()>;
}

/// Shared handle put into the component tree's context.
#[derive(Clone)]
pub struct CatalogHandle(Arc<dyn Catalog + Send + Sync>);

impl CatalogHandle {
    pub fn new(catalog: impl Catalog + Send + Sync + 'static) -> Self {
        Self(Arc::new(catalog))
    }

    /// `HttpCatalog` with the `remote` feature, bundled fixtures otherwise.
    pub fn from_build() -> Self {
        if cfg!(feature = "remote") {
            Self::new(HttpCatalog::new(option_env!("TUTOR_API_BASE").unwrap_or_default()))
        } else {
            Self::new(MockCatalog)
        }
    }
}

impl std::ops::Deref for CatalogHandle {
    type Target = dyn Catalog + Send + Sync;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
