use web_sys::{window, Storage};

/// Query-string parameter and localStorage key holding the auth token.
pub const TOKEN_KEY: &str = "token";

/// `search` is `location.search`, with or without the leading `?`.
pub fn token_from_query(search: &str) -> Option<String> {
    let query = search.trim_start_matches('?');
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == TOKEN_KEY)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Query string wins over storage; empty values count as absent.
/// `persisted` only runs when the query has no token.
pub fn resolve_token(
    search: &str,
    persisted: impl FnOnce() -> Option<String>,
) -> Option<String> {
    token_from_query(search).or_else(|| persisted().filter(|t| !t.is_empty()))
}

pub fn sidebar_visible(search: &str, persisted: impl FnOnce() -> Option<String>) -> bool {
    resolve_token(search, persisted).is_some()
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Raw read: the token is stored as a plain string, not JSON. Blocked or
/// missing storage reads as no token.
pub fn read_persisted_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}
