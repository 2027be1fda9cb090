use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::api::handlers::{internal_error, not_found, parse_body, ApiError, AppState};
use crate::model::{parse_id, FamilyTree, NewFamilyTree, NewMember};
use crate::store::traits::Store;

pub async fn list_trees<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<FamilyTree>>, ApiError> {
    let trees = store.list_trees().await.map_err(internal_error)?;
    Ok(Json(trees))
}

/// Create a tree and plant its default root member.
///
/// The two inserts are independent: if the root member cannot be written the
/// tree is still returned, just without a root. A `null` body counts as `{}`.
pub async fn create_tree<S: Store>(
    State(store): State<AppState<S>>,
    body: Result<Json<Option<NewFamilyTree>>, JsonRejection>,
) -> Result<Json<FamilyTree>, ApiError> {
    let new_tree = parse_body(body)?.unwrap_or_default();
    let tree = store.create_tree(new_tree).await.map_err(internal_error)?;
    log::info!("Created family tree {} ({:?})", tree.id, tree.name);

    if let Err(e) = store.create_member(NewMember::root(tree.id)).await {
        log::warn!("Tree {} has no root member: {:#}", tree.id, e);
    }

    Ok(Json(tree))
}

pub async fn get_tree<S: Store>(
    State(store): State<AppState<S>>,
    Path(tree_id): Path<String>,
) -> Result<Json<FamilyTree>, ApiError> {
    let Some(tree_id) = parse_id(&tree_id) else {
        return Err(not_found("Tree not found"));
    };

    match store.get_tree(tree_id).await {
        Ok(Some(tree)) => Ok(Json(tree)),
        Ok(None) => Err(not_found("Tree not found")),
        Err(e) => Err(internal_error(e)),
    }
}
