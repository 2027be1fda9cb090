use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::{handlers, member_handlers, tree_handlers};
use crate::store::traits::Store;

/// Full application router. Every route accepts cross-origin requests from any origin.
pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes::<S>())
        .layer(CorsLayer::permissive())
}

fn api_routes<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Family trees
        .route(
            "/trees",
            get(tree_handlers::list_trees::<S>).post(tree_handlers::create_tree::<S>),
        )
        .route("/trees/:tree_id", get(tree_handlers::get_tree::<S>))
        // Members, always scoped to a tree
        .route(
            "/trees/:tree_id/members",
            get(member_handlers::list_members::<S>).post(member_handlers::create_member::<S>),
        )
        .route(
            "/trees/:tree_id/members/:member_id",
            get(member_handlers::get_member::<S>)
                .put(member_handlers::update_member::<S>)
                .delete(member_handlers::delete_member::<S>),
        )
}
