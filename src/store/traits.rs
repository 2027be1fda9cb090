use crate::model::{FamilyTree, Id, Member, NewFamilyTree, NewMember};
use anyhow::Result;

#[async_trait::async_trait]
pub trait TreeStore: Send + Sync {
    async fn list_trees(&self) -> Result<Vec<FamilyTree>>;
    async fn get_tree(&self, id: Id) -> Result<Option<FamilyTree>>;
    /// Insert a tree and return it with its assigned id
    async fn create_tree(&self, tree: NewFamilyTree) -> Result<FamilyTree>;
}

/// Member rows are always addressed through their owning tree
#[async_trait::async_trait]
pub trait MemberStore: Send + Sync {
    async fn list_members_for_tree(&self, tree_id: Id) -> Result<Vec<Member>>;
    async fn get_member(&self, tree_id: Id, id: Id) -> Result<Option<Member>>;
    /// Insert a member and return it with its assigned id
    async fn create_member(&self, member: NewMember) -> Result<Member>;
    /// Write every column of `member`, inserting the row if its id is unknown
    async fn save_member(&self, member: Member) -> Result<Member>;
    /// Returns whether a row was removed
    async fn delete_member(&self, tree_id: Id, id: Id) -> Result<bool>;
}

pub trait Store: TreeStore + MemberStore + Send + Sync {}
impl<T: TreeStore + MemberStore> Store for T {}
