//! Serve command - Starts the HTTP server.

use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::domain::CreateUser;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Connect and apply pending migrations before accepting traffic
    let db = Arc::new(Database::connect(&config).await?);

    // Create application state with centralized service container
    let app_state = AppState::from_database(db);

    seed_demo_user(&app_state).await?;

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Insert a demo user on first start so the API has data to show.
async fn seed_demo_user(state: &AppState) -> AppResult<()> {
    let existing = state.user_service.get_list(1, 1).await?;
    if existing.total > 0 {
        return Ok(());
    }

    let user = state
        .user_service
        .create_user(CreateUser {
            name: "user".to_string(),
            surname: "test".to_string(),
            password: "123456".to_string(),
        })
        .await?;

    tracing::info!(id = user.id, "Seeded demo user");
    Ok(())
}
