use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};

use crate::api::handlers::{
    bad_request, internal_error, not_found, parse_body, ApiError, AppState,
};
use crate::model::{parse_id, unix_now, Id, Member, MemberUpdate, NewMember};
use crate::store::traits::Store;

/// Resolve a `(tree_id, member_id)` path pair. Either half failing to parse
/// means no row can match.
fn member_key(tree_id: &str, member_id: &str) -> Option<(Id, Id)> {
    Some((parse_id(tree_id)?, parse_id(member_id)?))
}

/// All members of a tree. An unknown tree is just an empty list.
pub async fn list_members<S: Store>(
    State(store): State<AppState<S>>,
    Path(tree_id): Path<String>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let Some(tree_id) = parse_id(&tree_id) else {
        return Ok(Json(Vec::new()));
    };

    let members = store
        .list_members_for_tree(tree_id)
        .await
        .map_err(internal_error)?;
    Ok(Json(members))
}

pub async fn get_member<S: Store>(
    State(store): State<AppState<S>>,
    Path((tree_id, member_id)): Path<(String, String)>,
) -> Result<Json<Member>, ApiError> {
    let Some((tree_id, member_id)) = member_key(&tree_id, &member_id) else {
        return Err(not_found("Member not found"));
    };

    match store.get_member(tree_id, member_id).await {
        Ok(Some(member)) => Ok(Json(member)),
        Ok(None) => Err(not_found("Member not found")),
        Err(e) => Err(internal_error(e)),
    }
}

pub async fn create_member<S: Store>(
    State(store): State<AppState<S>>,
    Path(tree_id): Path<String>,
    body: Result<Json<NewMember>, JsonRejection>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let new_member = parse_body(body)?;
    let Some(tree_id) = parse_id(&tree_id) else {
        return Err(bad_request(&format!("invalid tree id: {tree_id}")));
    };

    let member = store
        .create_member(new_member.stamped(tree_id, unix_now()))
        .await
        .map_err(internal_error)?;
    log::info!("Created member {} in tree {}", member.id, member.tree_id);

    Ok((StatusCode::CREATED, Json(member)))
}

/// Replace the editable fields of a member.
///
/// The row is looked up before the body is inspected, so a missing member wins
/// over a malformed body.
pub async fn update_member<S: Store>(
    State(store): State<AppState<S>>,
    Path((tree_id, member_id)): Path<(String, String)>,
    body: Result<Json<MemberUpdate>, JsonRejection>,
) -> Result<Json<Member>, ApiError> {
    let Some((tree_id, member_id)) = member_key(&tree_id, &member_id) else {
        return Err(not_found("Member not found"));
    };

    let mut member = match store.get_member(tree_id, member_id).await {
        Ok(Some(member)) => member,
        Ok(None) => return Err(not_found("Member not found")),
        Err(e) => return Err(internal_error(e)),
    };

    let update = parse_body(body)?;
    member.apply_update(update, unix_now());

    let member = store.save_member(member).await.map_err(internal_error)?;
    log::info!("Updated member {} in tree {}", member.id, member.tree_id);

    Ok(Json(member))
}

/// Delete a member. Deleting something that is not there still succeeds.
pub async fn delete_member<S: Store>(
    State(store): State<AppState<S>>,
    Path((tree_id, member_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let Some((tree_id, member_id)) = member_key(&tree_id, &member_id) else {
        return Ok(StatusCode::NO_CONTENT);
    };

    let removed = store
        .delete_member(tree_id, member_id)
        .await
        .map_err(internal_error)?;
    if removed {
        log::info!("Deleted member {} from tree {}", member_id, tree_id);
    } else {
        log::debug!("No member {} in tree {} to delete", member_id, tree_id);
    }

    Ok(StatusCode::NO_CONTENT)
}
