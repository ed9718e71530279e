/// Pick the bearer token out of the two places a request may carry it.
///
/// The `token` query parameter wins when present and non-empty. Otherwise the
/// `Authorization` header must consist of exactly two whitespace-separated
/// parts, `Bearer <token>`. Every other shape means no token was presented;
/// it is never reported as a malformed token.
///
/// # Arguments
/// * `query_token` - Value of the `token` query parameter, if any
/// * `authorization` - Raw `Authorization` header value, if any
///
/// # Returns
/// The token string, or `None` when the request carries no usable token
pub fn extract_token<'a>(
    query_token: Option<&'a str>,
    authorization: Option<&'a str>,
) -> Option<&'a str> {
    if let Some(token) = query_token.filter(|t| !t.is_empty()) {
        return Some(token);
    }

    let mut parts = authorization?.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => Some(token),
        _ => None,
    }
}
