use crate::model::{Id, RelationIds, RelationParseError};
use serde::{Deserialize, Serialize};

pub const ROOT_MEMBER_NAME: &str = "Root Person";
pub const ROOT_MEMBER_X: i64 = 400;
pub const ROOT_MEMBER_Y: i64 = 300;

/// One person in a tree, with canvas position and relationship references.
///
/// `parent_ids` and `children` are comma-separated member ids. They are stored
/// and returned exactly as the client sent them; use [`Member::parent_list`] and
/// [`Member::child_list`] to read them as ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: Id,
    pub tree_id: Id,
    pub name: String,
    pub generation: i64,
    pub x: i64,
    pub y: i64,
    pub parent_ids: String,
    pub children: String,
    pub spouse_id: Option<Id>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Member {
    pub fn parent_list(&self) -> Result<RelationIds, RelationParseError> {
        RelationIds::decode(&self.parent_ids)
    }

    pub fn child_list(&self) -> Result<RelationIds, RelationParseError> {
        RelationIds::decode(&self.children)
    }

    /// Overwrite the editable fields from an update body.
    /// `id`, `tree_id` and `created_at` are left untouched.
    pub fn apply_update(&mut self, update: MemberUpdate, now: i64) {
        self.name = update.name;
        self.generation = update.generation;
        self.x = update.x;
        self.y = update.y;
        self.parent_ids = update.parent_ids;
        self.children = update.children;
        self.spouse_id = update.spouse_id;
        self.updated_at = now;
    }
}

/// Body of a create request. Any `id` in the body is ignored; the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMember {
    pub tree_id: Id,
    pub name: String,
    pub generation: i64,
    pub x: i64,
    pub y: i64,
    pub parent_ids: String,
    pub children: String,
    pub spouse_id: Option<Id>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl NewMember {
    /// The default member planted in every freshly created tree.
    /// Timestamps stay at zero, unlike members created through the API.
    pub fn root(tree_id: Id) -> Self {
        Self {
            tree_id,
            name: ROOT_MEMBER_NAME.to_string(),
            generation: 0,
            x: ROOT_MEMBER_X,
            y: ROOT_MEMBER_Y,
            parent_ids: String::new(),
            children: String::new(),
            spouse_id: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    /// Scope the member to `tree_id` and stamp both timestamps with `now`.
    pub fn stamped(mut self, tree_id: Id, now: i64) -> Self {
        self.tree_id = tree_id;
        self.created_at = now;
        self.updated_at = now;
        self
    }

    pub fn into_member(self, id: Id) -> Member {
        Member {
            id,
            tree_id: self.tree_id,
            name: self.name,
            generation: self.generation,
            x: self.x,
            y: self.y,
            parent_ids: self.parent_ids,
            children: self.children,
            spouse_id: self.spouse_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Body of an update request. Omitted fields fall back to zero values and
/// still overwrite the stored row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberUpdate {
    pub name: String,
    pub generation: i64,
    pub x: i64,
    pub y: i64,
    pub parent_ids: String,
    pub children: String,
    pub spouse_id: Option<Id>,
}
