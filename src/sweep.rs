use crate::client::{ApiClient, SweepError};
use tracing::info;

/// What the sweep actually did, for callers that want more than stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Identifiers the overview call yielded.
    pub listed: usize,
    /// Ids a disable call was issued for, in issue order — always the full
    /// listed sequence, duplicates included, exactly once each.
    pub attempted: Vec<String>,
}

/// Pull the credential out of the argument list (`tunnel-sweep <token>`).
///
/// Anything beyond the first argument is ignored. An absent or empty token is
/// a usage error; no network activity happens before this check.
pub fn resolve_token<I>(mut args: I) -> Result<String, SweepError>
where
    I: Iterator<Item = String>,
{
    // args[0] is the program name
    let _ = args.next();
    match args.next() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(SweepError::MissingToken),
    }
}

/// Fetch-then-disable workflow: list every environment on the account, then
/// disable each one sequentially, in the order the service returned them.
///
/// Progress lines on stdout are for humans. A disable call that fails at the
/// HTTP level is still reported as done — the service is the source of truth
/// and re-running the sweep is the recovery path.
pub async fn run_sweep(client: &ApiClient) -> Result<SweepReport, SweepError> {
    println!("Fetching environments...");
    let ids = client.list_environments().await;
    let listed = ids.len();
    println!("Found {} environment(s)", listed);

    let mut attempted = Vec::with_capacity(listed);
    for z_id in ids {
        println!("Disabling environment {}...", z_id);
        client.disable_environment(&z_id).await?;
        println!("Disabled {}", z_id);
        attempted.push(z_id);
    }

    println!("All environments disabled. Done.");
    info!(
        "sweep finished: {} listed, {} attempted",
        listed,
        attempted.len()
    );

    Ok(SweepReport { listed, attempted })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> impl Iterator<Item = String> {
        v.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_missing_token_is_usage_error() {
        let err = resolve_token(args(&["tunnel-sweep"])).unwrap_err();
        assert_eq!(err.to_string(), "usage: tunnel-sweep <token>");
    }

    #[test]
    fn test_empty_token_is_usage_error() {
        assert!(resolve_token(args(&["tunnel-sweep", ""])).is_err());
    }

    #[test]
    fn test_token_passed_through_verbatim() {
        let token = resolve_token(args(&["tunnel-sweep", "  tok+en==  "])).unwrap();
        // no trimming, no normalization
        assert_eq!(token, "  tok+en==  ");
    }

    #[test]
    fn test_extra_args_ignored() {
        let token = resolve_token(args(&["tunnel-sweep", "t", "--verbose"])).unwrap();
        assert_eq!(token, "t");
    }
}
