#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::provider::http::HttpDataProvider;
#[cfg(feature = "server")]
use crate::routes::api::data_provider;
#[cfg(feature = "server")]
use crate::routes::phonebook::{
    create_contact, delete_contact, save_contact, show_create, show_edit, show_list,
};

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod provider;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

/// Builds and runs the Actix-Web admin server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let provider = HttpDataProvider::new(&server_config.api_url)
        .map_err(|e| std::io::Error::other(format!("Invalid API url: {e}")))?;
    log::info!("Using phonebook API at {}", provider.collection_url());

    // Signing key for flash message cookies.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    let provider = web::Data::new(provider);
    let tera = web::Data::new(tera);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .wrap(Cors::permissive())
                    .service(data_provider),
            )
            .service(show_list)
            .service(show_create)
            .service(create_contact)
            .service(show_edit)
            .service(save_contact)
            .service(delete_contact)
            .app_data(tera.clone())
            .app_data(provider.clone())
    })
    .bind(bind_address)?
    .run()
    .await
}
