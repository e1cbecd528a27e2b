#![forbid(unsafe_code)]
//! Axum application: routes, state, and page handlers for the
//! collection point registry.

mod config;
mod flash;
mod http;
mod render;

pub use config::ServerConfig;
pub use flash::{Flash, FlashKind};

use axum::routing::{get, post};
use axum::Router;
use recicla_model::MaterialTaxonomy;
use recicla_store::Store;
use std::sync::Arc;

pub const CRATE_NAME: &str = "recicla-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub taxonomy: Arc<MaterialTaxonomy>,
    flash_secret: Arc<Vec<u8>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, flash_secret: &[u8]) -> Self {
        Self {
            store: Arc::new(store),
            taxonomy: Arc::new(MaterialTaxonomy::default()),
            flash_secret: Arc::new(flash_secret.to_vec()),
        }
    }

    pub(crate) fn flash_secret(&self) -> &[u8] {
        &self.flash_secret
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::home_handler))
        .route("/pontos", get(http::handlers::pontos_handler))
        .route(
            "/cadastro",
            get(http::handlers::cadastro_form_handler).post(http::handlers::cadastro_submit_handler),
        )
        .route(
            "/editar/:id",
            get(http::handlers::editar_form_handler).post(http::handlers::editar_submit_handler),
        )
        .route("/delete/:id", post(http::handlers::delete_handler))
        .route("/educacao", get(http::handlers::educacao_handler))
        .route("/sobre", get(http::handlers::sobre_handler))
        .with_state(state)
}
