mod api;
mod config;

use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::info;
use tutor_ui::data::{CatalogHandle, MockCatalog};

use crate::config::SiteConfig;

/// Any path the bundle doesn't have is a client-side page.
async fn spa(config: web::Data<SiteConfig>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(config.index_html()).await?)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    info!("serving {} on http://{}", config.dist_dir.display(), config.bind);

    let bind = config.bind;
    let config = web::Data::new(config);
    let catalog = web::Data::new(CatalogHandle::new(MockCatalog));

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(catalog.clone())
            // ① JSON API
            .configure(api::routes)
            // ② static assets
            .service(Files::new("/assets", config.assets_dir.clone()))
            // ③ the Trunk bundle, falling back to the SPA shell
            .service(
                Files::new("/", config.dist_dir.clone())
                    .index_file("index.html")
                    .default_handler(web::get().to(spa)),
            )
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
