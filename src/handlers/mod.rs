// handlers/mod.rs - admin routes over auto-filled mappers
//
// Public: /health
// Protected (bearer JWT, actor bound per request): /admin/*

pub mod admin;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::autofill::AutoFillEngine;
use crate::mapper::{AutoFilled, InMemoryMapper};
use crate::middleware::actor_context_middleware;
use crate::models::{Category, Employee};

/// Mappers shared by all handlers, each wrapped by the auto-fill engine
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<AutoFilled<InMemoryMapper<Employee>>>,
    pub categories: Arc<AutoFilled<InMemoryMapper<Category>>>,
}

impl AppState {
    pub fn new(engine: Arc<AutoFillEngine>) -> Self {
        Self {
            employees: Arc::new(engine.clone().wrap(InMemoryMapper::new("employee"))),
            categories: Arc::new(engine.wrap(InMemoryMapper::new("category"))),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(admin_routes(state))
}

fn admin_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/admin/employee",
            post(admin::employee::create).put(admin::employee::update),
        )
        .route("/admin/employee/:id", get(admin::employee::get))
        .route(
            "/admin/category",
            post(admin::category::create).put(admin::category::update),
        )
        .route_layer(from_fn(actor_context_middleware))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
