use serde::{Deserialize, Serialize};
use tracing::warn;

/// Account overview as returned by `GET /overview`.
///
/// Entries are kept as raw JSON and mined leniently: the service has shipped
/// schema changes around the environment object before, and one odd entry
/// must not take the whole sweep down.
#[derive(Debug, Default, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub environments: Vec<serde_json::Value>,
}

impl Overview {
    /// Extract `environment.zId` from every entry, in response order.
    ///
    /// Entries without a usable identifier are skipped with a warning and
    /// contribute nothing. No deduplication: if the service reports the same
    /// zId twice, it gets disabled twice.
    pub fn environment_ids(&self) -> Vec<String> {
        let mut ids = Vec::with_capacity(self.environments.len());
        for (idx, entry) in self.environments.iter().enumerate() {
            match entry
                .pointer("/environment/zId")
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
            {
                Some(z_id) => ids.push(z_id.to_string()),
                None => warn!(
                    "overview entry {} has no usable environment.zId, skipping",
                    idx
                ),
            }
        }
        ids
    }
}

/// Body of `POST /disable`.
#[derive(Debug, Serialize)]
pub struct DisableRequest<'a> {
    pub identity: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overview_from(json: &str) -> Overview {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_extracts_ids_in_order() {
        let overview = overview_from(
            r#"{"environments":[
                {"environment":{"zId":"a","description":"laptop"}},
                {"environment":{"zId":"b"}},
                {"environment":{"zId":"c"},"shares":[{"token":"x"}]}
            ]}"#,
        );
        assert_eq!(overview.environment_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let overview = overview_from(
            r#"{"environments":[{"environment":{"zId":"a"}},{"environment":{"zId":"a"}}]}"#,
        );
        assert_eq!(overview.environment_ids(), vec!["a", "a"]);
    }

    #[test]
    fn test_skips_malformed_entries() {
        let overview = overview_from(
            r#"{"environments":[
                {"environment":{"zId":"a"}},
                {"environment":"not-an-object"},
                {"unrelated":true},
                {"environment":{"zId":42}},
                {"environment":{"zId":""}},
                {"environment":{"zId":"b"}}
            ]}"#,
        );
        assert_eq!(overview.environment_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_environments_field() {
        let overview = overview_from(r#"{}"#);
        assert!(overview.environment_ids().is_empty());
    }

    #[test]
    fn test_disable_request_body_shape() {
        let body = serde_json::to_string(&DisableRequest { identity: "a" }).unwrap();
        assert_eq!(body, r#"{"identity":"a"}"#);
    }
}
