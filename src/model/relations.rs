use crate::model::Id;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid member id {segment:?} at position {position} in relation list")]
pub struct RelationParseError {
    pub segment: String,
    pub position: usize,
}

/// Ordered list of member ids, stored at rest as comma-separated text.
///
/// Members keep `parentIds` and `children` as plain strings on the wire and in
/// the database. This type is the one place that text is turned into ids and
/// back, so anything that wants to walk the tree goes through it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationIds(Vec<Id>);

impl RelationIds {
    pub fn new(ids: Vec<Id>) -> Self {
        Self(ids)
    }

    /// Decode the at-rest form. Empty segments are skipped, so `""`, `","`
    /// and `"1,,2,"` are all accepted.
    pub fn decode(text: &str) -> Result<Self, RelationParseError> {
        text.split(',')
            .map(str::trim)
            .enumerate()
            .filter(|(_, segment)| !segment.is_empty())
            .map(|(position, segment)| {
                segment.parse::<Id>().map_err(|_| RelationParseError {
                    segment: segment.to_string(),
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(Id::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn ids(&self) -> &[Id] {
        &self.0
    }

    pub fn contains(&self, id: Id) -> bool {
        self.0.contains(&id)
    }

    pub fn push(&mut self, id: Id) {
        self.0.push(id);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Id>> for RelationIds {
    fn from(ids: Vec<Id>) -> Self {
        Self(ids)
    }
}

impl FromStr for RelationIds {
    type Err = RelationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for RelationIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
