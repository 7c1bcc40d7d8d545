use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::SharedPassword;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::participants::handlers::list_participants,
        features::scores::handlers::list_history,
        features::scores::handlers::record_scores,
        features::scores::handlers::delete_score,
        features::scores::handlers::restore_score,
        features::leaderboard::handlers::get_leaderboard,
        features::leaderboard::handlers::get_top_scorer,
    ),
    components(
        schemas(
            storage::dto::participant::ParticipantResponse,
            storage::dto::score::RecordScoresRequest,
            storage::dto::score::RestoreScoreRequest,
            storage::dto::score::ScoreEventResponse,
            storage::dto::leaderboard::TotalsEntry,
            storage::dto::leaderboard::TopScorerResponse,
            storage::models::Participant,
            storage::models::ScoreEvent,
            storage::models::Sex,
        )
    ),
    tags(
        (name = "participants", description = "Public participant endpoints"),
        (name = "scores", description = "Score history, awards, deletion and undo"),
        (name = "leaderboard", description = "Ranked totals and top scorer"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Shared password")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting points leaderboard API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let password = SharedPassword::new(&config.app_password);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/participants", features::participants::routes::routes())
        .nest("/api/scores", features::scores::routes::routes(password))
        .nest("/api/leaderboard", features::leaderboard::routes::routes())
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
