/// Browser-emulation headers for the tunneling service API.
///
/// The remote endpoint sits behind anti-bot filtering and rejects requests
/// that do not look like they came out of the web console. None of these
/// values carry domain meaning; the contract is "must be present".

/// Single pinned user agent. The endpoint does not care which browser, only
/// that a plausible one is claimed, so no rotation is done here.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Full header set attached to every outgoing request.
///
/// Origin/Referer are derived from `api_base` so the fingerprint stays
/// consistent when the sweep is pointed at a different host (tests do this).
pub fn stealth_headers(api_base: &str) -> Vec<(String, String)> {
    let origin = origin_of(api_base);
    vec![
        ("User-Agent".to_string(), USER_AGENT.to_string()),
        (
            "Accept".to_string(),
            "application/json, text/plain, */*".to_string(),
        ),
        ("Accept-Language".to_string(), "en-US,en;q=0.9".to_string()),
        ("DNT".to_string(), "1".to_string()),
        ("Origin".to_string(), origin.clone()),
        ("Referer".to_string(), format!("{}/", origin)),
        ("Sec-Fetch-Dest".to_string(), "empty".to_string()),
        ("Sec-Fetch-Mode".to_string(), "cors".to_string()),
        ("Sec-Fetch-Site".to_string(), "same-origin".to_string()),
    ]
}

/// `scheme://host[:port]` of the API root, falling back to the raw string
/// when it does not parse as a URL.
fn origin_of(api_base: &str) -> String {
    match url::Url::parse(api_base) {
        Ok(u) => {
            let mut origin = format!("{}://{}", u.scheme(), u.host_str().unwrap_or_default());
            if let Some(port) = u.port() {
                origin.push_str(&format!(":{}", port));
            }
            origin
        }
        Err(_) => api_base.trim_end_matches('/').to_string(),
    }
}
