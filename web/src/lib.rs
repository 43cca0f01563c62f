/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post, put};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use eolimp_core::types::ServerState;
use std::sync::Arc;

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);

    let app = Router::new()
        .route("/api/user", get(endpoints::user::get))
        .route("/api/group", put(endpoints::groups::put))
        .route(
            "/api/problem",
            get(endpoints::problems::get).put(endpoints::problems::put),
        )
        .route("/api/problem/{problem}", get(endpoints::problems::get_problem))
        .route(
            "/api/problem/{problem}/solution",
            get(endpoints::solutions::get).post(endpoints::solutions::post),
        )
        .route(
            "/api/lecture",
            get(endpoints::lectures::get).put(endpoints::lectures::put),
        )
        .route("/api/lecture/{lecture}", get(endpoints::lectures::get_lecture))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/group", get(endpoints::groups::get))
        .route("/api/user/login", post(endpoints::auth::post_login))
        .route("/api/user/logout", post(endpoints::auth::post_logout))
        .route(
            "/api/user/register/teacher",
            post(endpoints::auth::post_teacher_register),
        )
        .route(
            "/api/user/register/student",
            post(endpoints::auth::post_student_register),
        )
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
