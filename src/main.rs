use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use dotenv::dotenv;
use std::env;
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

mod articles;
mod normalize;
mod prompt;
mod provider;
mod validate;

use normalize::Extraction;
use validate::ValidationRequest;

const INDEX_HTML: &str = include_str!("../static/index.html");

struct AppState {
    groq_api_key: String,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let groq_api_key = env::var("GROQ_API_KEY").unwrap_or_else(|_| {
        println!("⚠️ GROQ_API_KEY not set! Get a free key from https://console.groq.com");
        println!("⚠️ The server will start, but /validate calls will fail until it is set.");
        String::new()
    });

    let state = Arc::new(AppState { groq_api_key });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .route("/validate", post(validate_compliance))
        .route("/articles", get(list_articles))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 5000));
    let listener = TcpListener::bind(addr).await.unwrap();
    println!("✅ Listening on http://{}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap();
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn list_articles() -> Json<serde_json::Value> {
    Json(articles::catalog_json())
}

async fn validate_compliance(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidationRequest>,
) -> impl IntoResponse {
    let scenario = match payload.into_scenario() {
        Ok(scenario) => scenario,
        Err(missing) => {
            eprintln!("❌ Rejected request, missing fields: {}", missing.join(", "));
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Missing required fields" })),
            )
                .into_response();
        }
    };

    println!(
        "📨 Validating article {} ({}) response after {} days",
        scenario.article, scenario.request_type, scenario.response_time
    );

    let prompt = prompt::build_prompt(&scenario);

    match provider::complete(&state.groq_api_key, &prompt).await {
        Ok(raw) => {
            let extraction = normalize::extract(&raw);
            println!(
                "📄 Model output {} for article {}",
                extraction.label(),
                scenario.article
            );
            let result = match extraction {
                Extraction::Parsed(partial) | Extraction::Synthesized(partial) => {
                    normalize::apply_defaults(partial)
                }
            };
            Json(result).into_response()
        }
        Err(e) => {
            eprintln!("❌ Provider call error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": format!("Validation error: {}", e) })),
            )
                .into_response()
        }
    }
}
