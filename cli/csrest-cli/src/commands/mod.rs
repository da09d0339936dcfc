// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI commands

pub mod beacon;
pub mod exec;
pub mod task;

use csrest_client::{CancellationToken, Client};

/// State shared by every command once a session is open
pub struct Session {
    pub client: Client,
    pub cancel: CancellationToken,
    pub use_json: bool,
}
