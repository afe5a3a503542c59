//! Static resources exposed to MCP clients.
//!
//! Only one resource exists: the cuisine list at [`CUISINES_URI`].

use serde::Serialize;

use crate::cuisines::{cuisines_json, CUISINES_URI};
use crate::error::{DinnerError, Result};

/// MIME type of the cuisine-list payload.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Registered name of the cuisine-list resource.
pub const CUISINES_RESOURCE_NAME: &str = "cuisineList";

/// One entry of the resource listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    pub uri: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

/// Contents returned for a resource read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDocument {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// All registered resources.
pub fn list_resources() -> Vec<ResourceDescriptor> {
    vec![ResourceDescriptor {
        uri: CUISINES_URI,
        name: CUISINES_RESOURCE_NAME,
        description: "Cuisines the dinner planner picks from when none is given",
        mime_type: JSON_MIME_TYPE,
    }]
}

/// Read a resource by identifier, echoing the identifier back as `uri`.
///
/// # Errors
///
/// [`DinnerError::UnknownResource`] for anything other than [`CUISINES_URI`].
pub fn read_resource(uri: &str) -> Result<ResourceDocument> {
    if uri != CUISINES_URI {
        tracing::debug!(uri, "rejecting unknown resource");
        return Err(DinnerError::UnknownResource(uri.to_string()));
    }
    Ok(ResourceDocument {
        uri: uri.to_string(),
        mime_type: JSON_MIME_TYPE.to_string(),
        text: cuisines_json()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_uri_is_rejected() {
        let err = read_resource("config://wines").unwrap_err();
        assert!(matches!(err, DinnerError::UnknownResource(ref u) if u == "config://wines"));
        assert_eq!(err.to_string(), "unknown resource 'config://wines'");
    }

    #[test]
    fn listing_matches_readable_resource() {
        for desc in list_resources() {
            let doc = read_resource(desc.uri).expect("listed resource must be readable");
            assert_eq!(doc.mime_type, desc.mime_type);
        }
    }
}
