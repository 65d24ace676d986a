//! Static MCP resources.
//!
//! Only one resource exists: the category catalog at `expense:///categories`.

use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents};

use crate::catalog::{CategoryCatalog, CATEGORIES_MIME_TYPE, CATEGORIES_NAME, CATEGORIES_URI};
use crate::error::McpError;

/// Resources advertised by `resources/list`.
#[must_use]
pub fn list_catalog_resources() -> Vec<Resource> {
    let mut raw = RawResource::new(CATEGORIES_URI, CATEGORIES_NAME);
    raw.description = Some("Available expense categories".to_string());
    raw.mime_type = Some(CATEGORIES_MIME_TYPE.to_string());
    vec![raw.no_annotation()]
}

/// Serve a `resources/read` request.
///
/// # Errors
///
/// Returns [`McpError::UnknownResource`] for any URI other than the catalog.
pub fn read_catalog(uri: &str) -> Result<ReadResourceResult, McpError> {
    if uri != CATEGORIES_URI {
        return Err(McpError::UnknownResource {
            uri: uri.to_string(),
        });
    }

    let mut contents = ResourceContents::text(CategoryCatalog::default().to_json(), uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(CATEGORIES_MIME_TYPE.to_string());
    }

    Ok(ReadResourceResult {
        contents: vec![contents],
    })
}
