use crate::model::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyTree {
    pub id: Id,
    pub name: String,
}

/// Request body for creating a tree. Every field is optional so `{}` is accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewFamilyTree {
    pub name: String,
}

impl NewFamilyTree {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn into_tree(self, id: Id) -> FamilyTree {
        FamilyTree {
            id,
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_a_valid_new_tree() {
        let tree: NewFamilyTree = serde_json::from_str("{}").unwrap();
        assert_eq!(tree.name, "");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let tree: NewFamilyTree =
            serde_json::from_str(r#"{"name": "Smiths", "id": 99, "owner": "x"}"#).unwrap();
        assert_eq!(tree.into_tree(3), FamilyTree { id: 3, name: "Smiths".to_string() });
    }
}
