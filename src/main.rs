mod config;
mod dtos;
mod error;
mod handler;
mod middleware;
mod models;
mod routes;
mod service;
mod store;
mod utils;

use std::sync::Arc;

use axum::http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use config::Config;
use dotenv::dotenv;
use routes::create_router;
use service::chatbot::ChatClassifier;
use store::ListingStore;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug)]
pub struct AppState {
    pub env: Config,
    pub store: Arc<ListingStore>,
    pub chatbot: ChatClassifier,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            env: config,
            // Seeded once; the catalogue is the only data this service has.
            store: Arc::new(ListingStore::seeded()),
            // Trained once at startup on the fixed corpus.
            chatbot: ChatClassifier::train(),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    dotenv().ok();

    let config = Config::init();

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT]);

    let app_state = Arc::new(AppState::new(config.clone()));

    println!(
        "🏠 Catalogue seeded with {} properties",
        app_state.store.property_count().await
    );

    let app = create_router(app_state.clone()).layer(cors);

    // Keep stored auction statuses in step with their deadlines.
    let sweep_state = app_state.clone();
    tokio::spawn(async move {
        service::background_jobs::start_auction_sweep_job(sweep_state).await;
    });

    println!("🚀 Server is running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", &config.port))
        .await
        .unwrap();

    axum::serve(listener, app).await.unwrap();
}
