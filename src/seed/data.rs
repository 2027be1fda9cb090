use crate::model::{unix_now, FamilyTree, Id, Member, NewFamilyTree, NewMember, RelationIds};
use crate::store::traits::Store;
use anyhow::{Context, Result};

/// Helper function to create a member with fresh timestamps
fn person(tree_id: Id, name: &str, generation: i64, x: i64, y: i64) -> NewMember {
    NewMember {
        name: name.to_string(),
        generation,
        x,
        y,
        ..NewMember::default()
    }
    .stamped(tree_id, unix_now())
}

/// Seed a small demo family: the default root person, a spouse and two children.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<FamilyTree> {
    let tree = store
        .create_tree(NewFamilyTree::new("Demo Family"))
        .await
        .context("Failed to create demo tree")?;

    let mut root = store
        .create_member(NewMember::root(tree.id))
        .await
        .context("Failed to create demo root member")?;

    let mut spouse = store
        .create_member(person(tree.id, "Spouse", 0, 600, 300))
        .await
        .context("Failed to create demo spouse")?;

    let parents = RelationIds::new(vec![root.id, spouse.id]).encode();
    let mut children = RelationIds::default();
    let mut created: Vec<Member> = Vec::new();
    for (offset, name) in ["First Child", "Second Child"].into_iter().enumerate() {
        let mut child = person(tree.id, name, 1, 400 + 200 * offset as i64, 450);
        child.parent_ids = parents.clone();
        let child = store
            .create_member(child)
            .await
            .with_context(|| format!("Failed to create demo member {name:?}"))?;
        children.push(child.id);
        created.push(child);
    }

    root.spouse_id = Some(spouse.id);
    root.children = children.encode();
    spouse.spouse_id = Some(root.id);
    spouse.children = children.encode();
    store
        .save_member(root)
        .await
        .context("Failed to link demo root member")?;
    store
        .save_member(spouse)
        .await
        .context("Failed to link demo spouse")?;

    log::info!(
        "Seeded tree {} with {} members",
        tree.id,
        created.len() + 2
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemberStore, MemoryStore};

    #[tokio::test]
    async fn test_seed_links_family_both_ways() {
        let store = MemoryStore::new();
        let tree = load_seed_data(&store).await.unwrap();
        let members = store.list_members_for_tree(tree.id).await.unwrap();
        assert_eq!(members.len(), 4);

        let root = members.iter().find(|m| m.name == "Root Person").unwrap();
        let spouse = members.iter().find(|m| m.name == "Spouse").unwrap();
        assert_eq!(root.spouse_id, Some(spouse.id));
        assert_eq!(spouse.spouse_id, Some(root.id));

        let children = root.child_list().unwrap();
        assert_eq!(children.len(), 2);
        for child_id in children.ids() {
            let child = members.iter().find(|m| m.id == *child_id).unwrap();
            assert_eq!(child.generation, 1);
            let parents = child.parent_list().unwrap();
            assert!(parents.contains(root.id) && parents.contains(spouse.id));
        }
    }
}
