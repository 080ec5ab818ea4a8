//! The only public way to build a [`FileRequest`].

use cclkit_core::{DomainResult, require_present};

use crate::request::FileRequest;
use crate::uri::Uri;

const SOURCE_REQUIRED: &str = "Source file must not be null";
const TARGET_REQUIRED: &str = "Target file must not be null";

/// Create a request for copying `source` to `target`.
///
/// Every call returns a new value; nothing is cached or interned.
pub fn create(source: Option<Uri>, target: Option<Uri>) -> DomainResult<FileRequest> {
    let source = require_present(source, SOURCE_REQUIRED)?;
    let target = require_present(target, TARGET_REQUIRED)?;

    tracing::debug!(source = %source, target = %target, "file request created");
    Ok(FileRequest::new(source, target))
}

/// Parse both locations, then delegate to [`create`].
pub fn create_from_str(source: &str, target: &str) -> DomainResult<FileRequest> {
    create(Some(Uri::parse(source)?), Some(Uri::parse(target)?))
}
