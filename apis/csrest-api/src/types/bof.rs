// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Beacon Object File (BOF) execution requests
//!
//! The server accepts three argument encodings for `inline-execute`:
//!
//! - **string**: a single argument string parsed server-side
//! - **packed**: arguments already packed by the caller, base64 encoded
//! - **pack**: a typed argument list packed by the server
//!
//! Every variant may reference uploaded files as `@files/<name>`, with the
//! base64 content carried in `files`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Map of file name to base64 encoded content
pub type FileMap = BTreeMap<String, String>;

/// BOF execution with a single argument string
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineExecuteString {
    /// BOF object file, usually an `@files/` reference
    pub bof: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    #[serde(default, skip_serializing_if = "FileMap::is_empty")]
    pub files: FileMap,
}

/// BOF execution with caller-packed, base64 encoded arguments
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineExecutePacked {
    pub bof: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,
    /// base64 encoded packed argument buffer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<String>,
    #[serde(default, skip_serializing_if = "FileMap::is_empty")]
    pub files: FileMap,
}

/// BOF execution with a typed argument list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InlineExecutePack {
    pub bof: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<BofArgument>,
    #[serde(default, skip_serializing_if = "FileMap::is_empty")]
    pub files: FileMap,
}

/// A single typed BOF argument, encoded as `{"type": ..., "value": ...}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum BofArgument {
    /// Raw bytes, base64 encoded
    Binary(String),
    Int(i32),
    Short(i16),
    String(String),
    /// UTF-16 wide string
    #[serde(rename = "wstring")]
    WString(String),
}
