//! Request descriptors and attempts
//!
//! A [`RequestDescriptor`] is the immutable description of one logical call;
//! an [`Attempt`] is one try at executing it. The replay flag lives on the
//! attempt, produced fresh per try, so concurrent attempts of different
//! requests never share mutable state.

use reqwest::Method;
use serde_json::Value;

/// Immutable description of a single logical API call
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<Value>,
}

impl RequestDescriptor {
    /// Describe a call to `path` (relative to the client base URL).
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), headers: Vec::new(), body: None }
    }

    /// Attach query-string pairs.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a request header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

/// One try at executing a descriptor
///
/// `retried` is what keeps renewal-driven replays from looping: a replay
/// attempt can never classify as session-expired again.
#[derive(Debug, Clone, Copy)]
pub struct Attempt<'a> {
    descriptor: &'a RequestDescriptor,
    retried: bool,
}

impl<'a> Attempt<'a> {
    /// First execution of a descriptor.
    #[must_use]
    pub fn first(descriptor: &'a RequestDescriptor) -> Self {
        Self { descriptor, retried: false }
    }

    /// Replay after a successful session renewal.
    #[must_use]
    pub fn replay(descriptor: &'a RequestDescriptor) -> Self {
        Self { descriptor, retried: true }
    }

    pub fn descriptor(&self) -> &RequestDescriptor {
        self.descriptor
    }

    pub fn retried(&self) -> bool {
        self.retried
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_attempt_is_marked_retried() {
        let descriptor = RequestDescriptor::new(Method::GET, "/wallet/my-wallet");

        assert!(!Attempt::first(&descriptor).retried());
        assert!(Attempt::replay(&descriptor).retried());
    }

    #[test]
    fn descriptor_builder_accumulates_query_and_body() {
        let descriptor = RequestDescriptor::new(Method::POST, "/wallet/send-money")
            .with_query(vec![("dryRun".to_string(), "true".to_string())])
            .with_body(serde_json::json!({"amount": 10}));

        assert_eq!(descriptor.path(), "/wallet/send-money");
        assert_eq!(descriptor.query().len(), 1);
        assert!(descriptor.body().is_some());
    }
}
