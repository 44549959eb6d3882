//! Canonical request model.
//!
//! Every inbound call is normalized into a [`Request`]: a slash-delimited
//! resource path plus an ordered list of string arguments. Older clients that
//! still send the flat `{"equipmentSlot": ...}` shape are accepted through
//! [`InboundRequest`] and adapted by [`LegacyRequest`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::legacy::LegacyRequest;

/// Separator between resource path segments
pub const PATH_SEPARATOR: char = '/';

/// A resource path plus its arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct Request {
    resource: String,
    arguments: Vec<String>,
}

/// Wire shape before validation. `arguments` may be omitted or null.
#[derive(Deserialize)]
struct RawRequest {
    resource: String,
    #[serde(default)]
    arguments: Option<Vec<String>>,
}

impl TryFrom<RawRequest> for Request {
    type Error = Error;

    fn try_from(raw: RawRequest) -> Result<Self> {
        Request::new(raw.resource, raw.arguments.unwrap_or_default())
    }
}

impl Request {
    /// Create a request, rejecting an empty or blank resource
    pub fn new(resource: impl Into<String>, arguments: Vec<String>) -> Result<Self> {
        let resource = resource.into();
        if resource.trim().is_empty() {
            return Err(Error::EmptyResource);
        }
        Ok(Self {
            resource,
            arguments,
        })
    }

    /// Build a request for a resource already known to be non-empty.
    pub(crate) fn from_resource(resource: String) -> Self {
        debug_assert!(!resource.trim().is_empty());
        Self {
            resource,
            arguments: Vec::new(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Split the resource on the first separator into `(root, remainder)`.
    ///
    /// The remainder is empty when the resource has no separator.
    pub fn split_resource(&self) -> (&str, &str) {
        self.resource
            .split_once(PATH_SEPARATOR)
            .unwrap_or((self.resource.as_str(), ""))
    }

    /// Root segment of the resource (e.g. `character` for `character/current`)
    pub fn root(&self) -> &str {
        self.split_resource().0
    }

    /// Arguments as seen by a handler: the non-empty path segments after the
    /// root, followed by the explicit arguments.
    ///
    /// `character/current` and `character` with `["current"]` therefore
    /// produce the same list.
    pub fn handler_arguments(&self) -> Vec<String> {
        let (_, remainder) = self.split_resource();
        remainder
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .chain(self.arguments.iter().cloned())
            .collect()
    }
}

/// Any request shape accepted on the wire
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum InboundRequest {
    Canonical(Request),
    Legacy(LegacyRequest),
}

impl InboundRequest {
    /// Parse one JSON-encoded inbound request
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    /// Normalize into the canonical form
    pub fn into_request(self) -> Request {
        match self {
            Self::Canonical(request) => request,
            Self::Legacy(legacy) => legacy.into_request(),
        }
    }
}

impl From<InboundRequest> for Request {
    fn from(inbound: InboundRequest) -> Self {
        inbound.into_request()
    }
}
