use std::time::Duration;

// ---------------------------------------------------------------------------
// SweepConfig — fixed API target with env-var overrides for operational tuning
// ---------------------------------------------------------------------------

/// API root of the remote tunneling service. Not owned by this tool.
pub const DEFAULT_API_BASE: &str = "https://api.zrok.io/api/v1";

pub const ENV_API_BASE: &str = "TUNNEL_SWEEP_API_BASE";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
pub const ENV_HTTP_CONNECT_TIMEOUT_SECS: &str = "HTTP_CONNECT_TIMEOUT_SECS";

/// Everything the sweep needs besides the credential itself.
///
/// The credential is deliberately NOT part of this struct — it arrives on the
/// command line and is threaded into the client at construction, so nothing
/// here can end up in logs with a token in it.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// API root, no trailing slash. `{api_base}/overview`, `{api_base}/disable`.
    pub api_base: String,
    /// Overall request timeout.
    pub http_timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Browser-emulation header set attached to every request. Opaque to the
    /// sweep logic; the remote endpoint just expects them to be present.
    pub headers: Vec<(String, String)>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            http_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            headers: crate::stealth::stealth_headers(DEFAULT_API_BASE),
        }
    }
}

impl SweepConfig {
    /// Resolve config from the environment, falling back to defaults.
    ///
    /// `TUNNEL_SWEEP_API_BASE` overrides the API root (trailing slash is
    /// trimmed, empty value ignored). `HTTP_TIMEOUT_SECS` and
    /// `HTTP_CONNECT_TIMEOUT_SECS` tune the client timeouts.
    pub fn from_env() -> Self {
        let api_base = resolve_api_base();
        Self {
            http_timeout: Duration::from_secs(env_secs(ENV_HTTP_TIMEOUT_SECS, 30)),
            connect_timeout: Duration::from_secs(env_secs(ENV_HTTP_CONNECT_TIMEOUT_SECS, 10)),
            headers: crate::stealth::stealth_headers(&api_base),
            api_base,
        }
    }

    /// Point the sweep at a different API root (used by the test suite to
    /// target a local server). Rebuilds the header set so origin/referer
    /// stay consistent with the new root.
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self.headers = crate::stealth::stealth_headers(&self.api_base);
        self
    }
}

/// API base: `TUNNEL_SWEEP_API_BASE` env var → built-in constant.
fn resolve_api_base() -> String {
    normalize_api_base(std::env::var(ENV_API_BASE).ok())
}

/// Trim whitespace and any trailing slash; unset or blank falls back to the
/// built-in constant.
fn normalize_api_base(raw: Option<String>) -> String {
    raw.map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

fn env_secs(key: &str, default: u64) -> u64 {
    parse_secs(std::env::var(key).ok(), default)
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
