//! # Job Context
//!
//! The host framework owns job configuration. The switchers only need to read
//! string settings from it, which is what [`Context`] expresses.
//!
//! [`JobContext`] is a small in-memory implementation for hosts without their
//! own configuration object, and for tests.

use std::collections::HashMap;

/// Setting holding the dataset version the job runs over.
pub const DATASET_VERSION_KEY: &str = "dataset_version";

/// Read access to job-level settings.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a job context",
    label = "missing `Context` implementation",
    note = "Implement `Context::get` to look up job settings by key."
)]
pub trait Context {
    /// Look up a setting by key.
    fn get(&self, key: &str) -> Option<&str>;
}

impl<C: Context + ?Sized> Context for &C {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

impl Context for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

/// An in-memory job context.
///
/// # Example
///
/// ```rust
/// use eraswitch_core::{Context, JobContext, Year};
///
/// let ctx = JobContext::new().with("dataset_version", "RunII_102X_v2_2017v2");
/// assert_eq!(ctx.get("dataset_version"), Some("RunII_102X_v2_2017v2"));
/// assert_eq!(Year::from_context(&ctx).unwrap(), Year::Y2017v2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobContext {
    settings: HashMap<String, String>,
}

impl JobContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting, builder style. Later values override earlier ones.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Add or replace a setting.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.insert(key.into(), value.into());
    }

    /// Number of settings.
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Check if the context holds no settings.
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

impl Context for JobContext {
    fn get(&self, key: &str) -> Option<&str> {
        self.settings.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for JobContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            settings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_context_override() {
        let ctx = JobContext::new()
            .with(DATASET_VERSION_KEY, "2016v2")
            .with(DATASET_VERSION_KEY, "2016v3");
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.get(DATASET_VERSION_KEY), Some("2016v3"));
        assert_eq!(ctx.get("lumi_file"), None);
    }

    #[test]
    fn test_hashmap_context() {
        let mut map = HashMap::new();
        map.insert(DATASET_VERSION_KEY.to_string(), "2018".to_string());
        assert_eq!(Context::get(&map, DATASET_VERSION_KEY), Some("2018"));
    }

    #[test]
    fn test_from_iter() {
        let ctx: JobContext = [("dataset_version", "2017v1"), ("channel", "muon")]
            .into_iter()
            .collect();
        assert_eq!(ctx.get("channel"), Some("muon"));
        assert!(!ctx.is_empty());
    }
}
