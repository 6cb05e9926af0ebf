//! Endpoint descriptors and the full endpoint set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldDef;

/// One documented endpoint: method/path/title plus four independent field
/// collections. Nested field nodes are owned exclusively, never shared
/// across endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDef {
    /// HTTP method (e.g. `GET`). Kept verbatim, not validated against a
    /// method vocabulary.
    pub method: String,

    /// URL path (e.g. `/api/users/{id}`). Placeholders are not checked
    /// against `params`.
    pub path: String,

    /// Display title. Defaults to the endpoint key at batch load.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Permission string required to call this endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, FieldDef>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: BTreeMap<String, FieldDef>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub returns: BTreeMap<String, FieldDef>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, FieldDef>,
}

impl EndpointDef {
    /// Look up a header field by name.
    pub fn header(&self, name: &str) -> Option<&FieldDef> {
        self.headers.get(name)
    }

    /// Look up a params field by name.
    pub fn param(&self, name: &str) -> Option<&FieldDef> {
        self.params.get(name)
    }

    /// Look up a return field by name.
    pub fn ret(&self, name: &str) -> Option<&FieldDef> {
        self.returns.get(name)
    }

    /// Look up an error field by name.
    pub fn error(&self, name: &str) -> Option<&FieldDef> {
        self.errors.get(name)
    }
}

/// All endpoints of one API document, keyed by endpoint name.
/// This is the aggregate downstream tooling consumes and serializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSet {
    pub endpoints: BTreeMap<String, EndpointDef>,
}

impl ApiSet {
    /// Find an endpoint by key.
    pub fn endpoint(&self, key: &str) -> Option<&EndpointDef> {
        self.endpoints.get(key)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldVariant;

    fn sample_endpoint() -> EndpointDef {
        let mut params = BTreeMap::new();
        params.insert(
            "id".to_string(),
            FieldDef {
                ty: "uuid".into(),
                group: None,
                description: Some("User id.".into()),
                fields: BTreeMap::new(),
                variant: FieldVariant::Params {
                    default: None,
                    restrict_to_values: vec![],
                },
            },
        );

        EndpointDef {
            method: "GET".into(),
            path: "/api/users/{id}".into(),
            title: "GetUser".into(),
            description: None,
            permission: Some("auth:user:read".into()),
            headers: BTreeMap::new(),
            params,
            returns: BTreeMap::new(),
            errors: BTreeMap::new(),
        }
    }

    #[test]
    fn collection_lookup() {
        let endpoint = sample_endpoint();
        assert!(endpoint.param("id").is_some());
        assert!(endpoint.param("other").is_none());
        assert!(endpoint.header("id").is_none());
        assert!(endpoint.ret("id").is_none());
        assert!(endpoint.error("id").is_none());
    }

    #[test]
    fn api_set_lookup() {
        let mut endpoints = BTreeMap::new();
        endpoints.insert("get_user".to_string(), sample_endpoint());
        let api = ApiSet { endpoints };

        assert_eq!(api.len(), 1);
        assert!(!api.is_empty());
        assert_eq!(api.endpoint("get_user").unwrap().title, "GetUser");
        assert!(api.endpoint("nonexistent").is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let mut endpoints = BTreeMap::new();
        endpoints.insert("get_user".to_string(), sample_endpoint());
        let api = ApiSet { endpoints };

        let json = serde_json::to_string_pretty(&api).unwrap();
        let back: ApiSet = serde_json::from_str(&json).unwrap();
        assert_eq!(api, back);
    }
}
