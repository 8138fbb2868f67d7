//! Cookie demo endpoints. The token is a fixed placeholder: nothing here
//! issues, rotates or checks credentials.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;

pub const AUTH_COOKIE: &str = "auth_token";
pub const PLACEHOLDER_TOKEN: &str = "your-secure-token-here";
/// 7 days
pub const MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// `GET /api/cookie`
pub async fn set_cookie(jar: CookieJar) -> (CookieJar, &'static str) {
    let mut cookie = Cookie::new(AUTH_COOKIE, PLACEHOLDER_TOKEN);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_max_age(Duration::seconds(MAX_AGE_SECS));
    (jar.add(cookie), "Cookie has been set")
}

/// `GET /api/cookie/read`: an empty cookie counts as missing.
pub async fn read_cookie(jar: CookieJar) -> String {
    match jar.get(AUTH_COOKIE).map(|c| c.value()).filter(|v| !v.is_empty()) {
        Some(token) => format!("Auth Token: {token}"),
        None => "Auth Token: No token found".to_string(),
    }
}
