pub type Id = i64;

/// Current time as whole seconds since the Unix epoch
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Parse an identifier taken from a request path.
///
/// Anything that is not a non-negative integer can never match a stored row,
/// so callers treat `None` as "no such entity".
pub fn parse_id(raw: &str) -> Option<Id> {
    raw.trim().parse::<u64>().ok().and_then(|id| Id::try_from(id).ok())
}
