use anyhow::Result;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::model::{FamilyTree, Id, Member, NewFamilyTree, NewMember};
use crate::store::traits::{MemberStore, TreeStore};

#[derive(Debug, Default)]
struct MemoryState {
    trees: BTreeMap<Id, FamilyTree>,
    members: BTreeMap<Id, Member>,
    last_tree_id: Id,
    last_member_id: Id,
}

/// Process-local store with the same semantics as [`PostgresStore`](crate::store::PostgresStore).
///
/// Ids start at 1 and are never reused. Data lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TreeStore for MemoryStore {
    async fn list_trees(&self) -> Result<Vec<FamilyTree>> {
        Ok(self.state.read().trees.values().cloned().collect())
    }

    async fn get_tree(&self, id: Id) -> Result<Option<FamilyTree>> {
        Ok(self.state.read().trees.get(&id).cloned())
    }

    async fn create_tree(&self, tree: NewFamilyTree) -> Result<FamilyTree> {
        let mut state = self.state.write();
        state.last_tree_id += 1;
        let tree = tree.into_tree(state.last_tree_id);
        state.trees.insert(tree.id, tree.clone());
        Ok(tree)
    }
}

#[async_trait::async_trait]
impl MemberStore for MemoryStore {
    async fn list_members_for_tree(&self, tree_id: Id) -> Result<Vec<Member>> {
        Ok(self
            .state
            .read()
            .members
            .values()
            .filter(|member| member.tree_id == tree_id)
            .cloned()
            .collect())
    }

    async fn get_member(&self, tree_id: Id, id: Id) -> Result<Option<Member>> {
        Ok(self
            .state
            .read()
            .members
            .get(&id)
            .filter(|member| member.tree_id == tree_id)
            .cloned())
    }

    async fn create_member(&self, member: NewMember) -> Result<Member> {
        let mut state = self.state.write();
        state.last_member_id += 1;
        let member = member.into_member(state.last_member_id);
        state.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn save_member(&self, member: Member) -> Result<Member> {
        let mut state = self.state.write();
        state.last_member_id = state.last_member_id.max(member.id);
        state.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn delete_member(&self, tree_id: Id, id: Id) -> Result<bool> {
        let mut state = self.state.write();
        let owned = state
            .members
            .get(&id)
            .is_some_and(|member| member.tree_id == tree_id);
        if owned {
            state.members.remove(&id);
        }
        Ok(owned)
    }
}
