use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::logging::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::{Catalog, ContactField, ContactMessage, FileItem, Lesson, LessonDetail, LessonId, Review, Video};
use crate::error::{Error, Result};

/// Catalog backed by the `site` JSON API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base: String,
}

#[derive(Deserialize)]
struct RejectedField {
    field: ContactField,
}

impl HttpCatalog {
    /// `base` is prefixed to every `/api/...` path; empty means same origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        decode(expect_ok(resp, url)?).await
    }
}

fn expect_ok(resp: Response, url: String) -> Result<Response> {
    if resp.ok() {
        Ok(resp)
    } else {
        warn!("{} answered {}", url, resp.status());
        Err(Error::Status { status: resp.status(), url })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json::<T>().await.map_err(|e| Error::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl Catalog for HttpCatalog {
    async fn list_lessons(&self) -> Result<Vec<Lesson>> {
        self.get_json("lessons").await
    }

    async fn lesson_detail(&self, id: LessonId) -> Result<LessonDetail> {
        match self.get_json(&format!("lessons/{id}")).await {
            Err(Error::Status { status: 404, .. }) => Err(Error::NotFound(id)),
            other => other,
        }
    }

    async fn list_files(&self) -> Result<Vec<FileItem>> {
        self.get_json("files").await
    }

    async fn list_videos(&self) -> Result<Vec<Video>> {
        self.get_json("videos").await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.get_json("reviews").await
    }

    async fn send_message(&self, message: &ContactMessage) -> Result<()> {
        message.validate()?;

        let url = self.url("contact");
        let resp = Request::post(&url)
            .json(message)
            .map_err(|e| Error::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if resp.status() == 400 {
            let rejected: RejectedField = decode(resp).await?;
            return Err(Error::Validation { field: rejected.field });
        }
        expect_ok(resp, url).map(|_| ())
    }
}
