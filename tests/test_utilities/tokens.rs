use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// 2026-01-01T00:00:00Z in milliseconds, the "now" of most tests
pub const NOW_MILLIS: i64 = 1_767_225_600_000;

/// An hour after `NOW_MILLIS`, in seconds
pub const IN_ONE_HOUR: i64 = NOW_MILLIS / 1000 + 3600;

/// An hour before `NOW_MILLIS`, in seconds
pub const ONE_HOUR_AGO: i64 = NOW_MILLIS / 1000 - 3600;

/// Builds an unsigned token carrying the given claims
pub fn make_token(sub: &str, roles: &[&str], exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = serde_json::json!({ "sub": sub, "roles": roles, "exp": exp });
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{}.{}.signature", header, payload)
}

pub fn reader_token(sub: &str) -> String {
    make_token(sub, &["reader"], IN_ONE_HOUR)
}

pub fn author_token(sub: &str) -> String {
    make_token(sub, &["reader", "author"], IN_ONE_HOUR)
}
