// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Local file encoding for upload payloads

use std::io;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, Result};

/// A local file ready to be embedded in a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFile {
    /// Final path component of the source file
    pub name: String,
    /// Standard base64 of the file contents
    pub content_b64: String,
}

/// Read `path` and base64 encode its contents.
pub async fn encode_file(path: impl AsRef<Path>) -> Result<EncodedFile> {
    let path = path.as_ref();
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::File {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
        })?;

    let data = tokio::fs::read(path).await.map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(EncodedFile {
        name,
        content_b64: STANDARD.encode(data),
    })
}
