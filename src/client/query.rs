//! Query string and request URL construction.

/// Encode `params` as `k=v` pairs joined by `&`, preserving input order.
pub fn query(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Join `prefix` and `path`, appending `?query` when `params` is non-empty.
pub fn request_url(prefix: &str, path: &str, params: &[(String, String)]) -> String {
    let query = query(params);
    if query.is_empty() {
        format!("{prefix}{path}")
    } else {
        format!("{prefix}{path}?{query}")
    }
}
