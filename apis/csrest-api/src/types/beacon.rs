// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Beacon types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Beacon sleep configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sleep {
    /// Sleep time in seconds
    pub sleep: u64,
    /// Jitter percentage (0-99)
    pub jitter: u8,
}

/// A beacon as reported by `GET /api/v1/beacons`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Beacon {
    /// Beacon ID
    pub bid: String,
    /// Parent beacon ID (for linked beacons)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pbid: Option<String>,
    pub computer: String,
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonated: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    pub process: String,
    pub pid: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Internal IP address
    pub internal: String,
    /// External IP address
    pub external: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_arch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacon_arch: Option<String>,
    /// Session type (e.g. "beacon")
    pub session: String,
    /// Listener the beacon checks in through
    pub listener: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub alive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_state: Option<String>,
    pub last_checkin_time: DateTime<Utc>,
    /// Milliseconds since the last check-in
    pub last_checkin_ms: u64,
    pub last_checkin_formatted: String,
    pub sleep: Sleep,
    pub supports_sleep: bool,
}
