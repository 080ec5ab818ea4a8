use serde::Serialize;

use cclkit_core::ValueObject;

use crate::uri::Uri;

/// Describes one file transfer: where the file is read from and where it is
/// written to.
///
/// Instances are only created by [`crate::file_request_factory::create`].
/// Two requests are equal iff the text of both URIs matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileRequest {
    source_file: Uri,
    target_file: Uri,
}

impl FileRequest {
    pub(crate) fn new(source_file: Uri, target_file: Uri) -> Self {
        Self {
            source_file,
            target_file,
        }
    }

    pub fn source_file(&self) -> &Uri {
        &self.source_file
    }

    pub fn target_file(&self) -> &Uri {
        &self.target_file
    }
}

impl ValueObject for FileRequest {}

impl core::fmt::Display for FileRequest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} => {}", self.source_file, self.target_file)
    }
}
