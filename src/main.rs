mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;

use crate::config::CONFIG;
use crate::repositories::{PostRepository, UserRepository};
use crate::services::UserSummaryService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to MongoDB
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri)
        .await
        .map_err(std::io::Error::other)?;

    let db = client.database(&CONFIG.database_name);

    // Test MongoDB connection
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(std::io::Error::other)?;
    info!("Connected to MongoDB successfully!");

    let users = UserRepository::new(&db);
    let posts = PostRepository::new(&db);
    posts.create_indexes().await.map_err(std::io::Error::other)?;

    // Initialize services
    let summary_service = web::Data::new(UserSummaryService::new(
        Arc::new(users),
        Arc::new(posts),
    ));

    // Start HTTP server
    let server_addr = CONFIG.server_addr();
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(summary_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
