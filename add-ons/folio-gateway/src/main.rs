//! Axum-based gateway for the portfolio diary. Config-driven via CoreConfig.

mod handlers;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use folio_core::{CoreConfig, PortfolioProfile, QuestionRouter, SearchBackend};
use folio_skills::AlgoliaSearch;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) router: Arc<QuestionRouter>,
}

/// Pre-flight check: config loads, profile resolves, credentials present, port free.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    print!("Checking portfolio profile... ");
    let profile = match config.profile_path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => PortfolioProfile::load_json_path(path).map_err(|e| e.to_string())?,
        None => PortfolioProfile::builtin(),
    };
    println!(
        "OK ({}: {} skills, {} links)",
        profile.name,
        profile.skills.len(),
        profile.links.len()
    );

    print!("Checking search credentials... ");
    if config.search.has_credentials() {
        println!("OK ({})", config.search.query_url());
    } else {
        // Not fatal: local rules still answer, search fallback will return 500s.
        println!("MISSING (set VITE_ALGOLIA_APP_ID, VITE_ALGOLIA_SEARCH_API_KEY, VITE_ALGOLIA_INDEX_NAME)");
    }
    AlgoliaSearch::new(&config.search).map_err(|e| format!("Search client init failed: {}", e))?;

    let addr = config.bind_addr();
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(&addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("{} BLOCKED: {}", addr, e));
        }
    }

    println!("\n✅ SUCCESS: Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[folio-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match CoreConfig::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!("Failed to load CoreConfig: {}", e);
            std::process::exit(1);
        }
    };
    if !config.search.has_credentials() {
        tracing::warn!("Search credentials incomplete; fallback searches will fail");
    }

    let profile = Arc::new(PortfolioProfile::load_or_builtin(config.profile_path.as_deref()));
    let search: Arc<dyn SearchBackend> = match AlgoliaSearch::new(&config.search) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!("Failed to build search client: {}", e);
            std::process::exit(1);
        }
    };
    let router = Arc::new(
        QuestionRouter::new(profile, search).with_hits_per_page(config.search.hits_per_page),
    );

    let app = build_app(AppState {
        config: Arc::clone(&config),
        router,
    });

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("📖 Diary chatbot running on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn build_app(state: AppState) -> Router {
    // CORS: any origin may call the API.
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/ask", post(handlers::ask::ask))
        .route("/health", get(health))
        .with_state(state)
        .layer(cors)
}

/// GET /health – identity and knowledge store size.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let profile = state.router.profile();
    Json(serde_json::json!({
        "status": "ok",
        "app": state.config.app_name,
        "search_backend": state.router.search_backend_name(),
        "links": profile.links.len(),
        "skills": profile.skills.len(),
    }))
}
