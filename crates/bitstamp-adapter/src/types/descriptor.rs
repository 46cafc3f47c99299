/*
[INPUT]:  Endpoint path, verb, version and parameters for one call
[OUTPUT]: Immutable request descriptor consumed by the dispatcher
[POS]:    Data layer - per-call request description
[UPDATE]: When the dispatcher needs new per-request options
*/

use std::collections::BTreeMap;

use super::enums::{ApiVersion, HttpMethod};

/// Form or query parameters, keyed by wire name
pub type Params = BTreeMap<String, String>;

/// Everything the dispatcher needs to issue a single request
///
/// Built fresh for every call. The builder methods consume `self`, so a
/// descriptor handed to the dispatcher cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    path: String,
    method: HttpMethod,
    version: u8,
    params: Params,
    structured: bool,
}

impl RequestDescriptor {
    /// Create a descriptor targeting API v2 that expects a JSON body
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            version: ApiVersion::V2.number(),
            params: Params::new(),
            structured: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Target another API version. The value is validated at dispatch time.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<u8>) -> Self {
        self.version = version.into();
        self
    }

    /// Merge parameters; later values replace earlier ones on key collision
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params.extend(params);
        self
    }

    /// Merge parameters underneath the existing ones; existing keys win
    #[must_use]
    pub fn with_defaults(mut self, mut defaults: Params) -> Self {
        defaults.append(&mut self.params);
        self.params = defaults;
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }

    /// Return the raw response instead of decoding it as JSON
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.structured = false;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn expects_structured_response(&self) -> bool {
        self.structured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_defaults() {
        let descriptor = RequestDescriptor::post("/cancel_order/");
        assert_eq!(descriptor.method(), HttpMethod::Post);
        assert_eq!(descriptor.version(), 2);
        assert!(descriptor.params().is_empty());
        assert!(descriptor.expects_structured_response());
    }

    #[test]
    fn test_descriptor_params_later_wins() {
        let mut extra = Params::new();
        extra.insert("id".to_string(), "2".to_string());

        let descriptor = RequestDescriptor::get("/x/")
            .with_version(ApiVersion::V1)
            .with_param("id", 1)
            .with_params(extra)
            .raw();

        assert_eq!(descriptor.version(), 1);
        assert_eq!(descriptor.params().get("id").map(String::as_str), Some("2"));
        assert!(!descriptor.expects_structured_response());
    }

    #[test]
    fn test_descriptor_defaults_lose_to_existing() {
        let mut defaults = Params::new();
        defaults.insert("key".to_string(), "base".to_string());
        defaults.insert("nonce".to_string(), "1".to_string());

        let descriptor = RequestDescriptor::post("/x/")
            .with_param("key", "extra")
            .with_defaults(defaults);

        assert_eq!(descriptor.params().get("key").map(String::as_str), Some("extra"));
        assert_eq!(descriptor.params().get("nonce").map(String::as_str), Some("1"));
    }
}
