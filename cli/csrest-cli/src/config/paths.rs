// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::PathBuf;

/// Get the csrest configuration directory
///
/// Priority:
/// 1. CSREST_CONFIG_DIR environment variable
/// 2. Platform config dir (~/.config/csrest/ on Linux)
/// 3. ~/.csrest/
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CSREST_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::config_dir()
        .map(|dir| dir.join("csrest"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".csrest")
        })
}

/// Get the path to the config file
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}
