use actix_web::{HttpResponse, get, post, web};
use log::{info, warn};
use tutor_ui::data::{CatalogHandle, ContactMessage, FileItem, Lesson, LessonDetail, LessonId, Review, Video};
use tutor_ui::error::Error;

fn to_http(err: Error) -> actix_web::Error {
    match err {
        Error::NotFound(_) => actix_web::error::ErrorNotFound(err.to_string()),
        Error::Validation { .. } => actix_web::error::ErrorBadRequest(err.to_string()),
        other => {
            warn!("catalog error: {other}");
            actix_web::error::ErrorInternalServerError(other.to_string())
        }
    }
}

#[get("/api/lessons")]
async fn lessons(catalog: web::Data<CatalogHandle>) -> actix_web::Result<web::Json<Vec<Lesson>>> {
    catalog.list_lessons().await.map(web::Json).map_err(to_http)
}

#[get("/api/lessons/{id}")]
async fn lesson(
    catalog: web::Data<CatalogHandle>,
    id: web::Path<LessonId>,
) -> actix_web::Result<web::Json<LessonDetail>> {
    catalog.lesson_detail(id.into_inner()).await.map(web::Json).map_err(to_http)
}

#[get("/api/files")]
async fn files(catalog: web::Data<CatalogHandle>) -> actix_web::Result<web::Json<Vec<FileItem>>> {
    catalog.list_files().await.map(web::Json).map_err(to_http)
}

#[get("/api/videos")]
async fn videos(catalog: web::Data<CatalogHandle>) -> actix_web::Result<web::Json<Vec<Video>>> {
    catalog.list_videos().await.map(web::Json).map_err(to_http)
}

#[get("/api/reviews")]
async fn reviews(catalog: web::Data<CatalogHandle>) -> actix_web::Result<web::Json<Vec<Review>>> {
    catalog.list_reviews().await.map(web::Json).map_err(to_http)
}

/// 202 when accepted, 400 with `{"field": ...}` naming the rejected field.
#[post("/api/contact")]
async fn contact(
    catalog: web::Data<CatalogHandle>,
    message: web::Json<ContactMessage>,
) -> actix_web::Result<HttpResponse> {
    match catalog.send_message(&message).await {
        Ok(()) => {
            info!("contact message from {} <{}>", message.name, message.email);
            Ok(HttpResponse::Accepted().finish())
        }
        Err(Error::Validation { field }) => {
            warn!("contact message rejected on {}", field.key());
            Ok(HttpResponse::BadRequest().json(serde_json::json!({ "field": field })))
        }
        Err(e) => Err(to_http(e)),
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(lessons)
        .service(lesson)
        .service(files)
        .service(videos)
        .service(reviews)
        .service(contact);
}
