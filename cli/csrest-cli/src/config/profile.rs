// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Connection profile

use std::path::Path;

use anyhow::Context;
use csrest_client::ClientConfig;
use serde::{Deserialize, Serialize};

/// Contents of config.json
///
/// ```json
/// {
///   "host": "teamserver.example.com",
///   "port": 50443,
///   "insecure": true,
///   "username": "operator"
/// }
/// ```
///
/// The password is never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    #[serde(flatten)]
    pub connection: ClientConfig,

    /// Operator login name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Profile {
    /// Load the profile from the default location; a missing file yields
    /// the defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&super::paths::config_file())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let profile: Profile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(profile)
    }
}
