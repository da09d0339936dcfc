// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Cobalt Strike REST API types
//!
//! Request and response bodies exchanged with the team server's REST API.
//! These are plain schemas: path building, authentication and retries live
//! in `csrest-client`.
//!
//! Field names follow the server's wire format (mostly camelCase, with a
//! few snake_case exceptions on the authentication endpoints).

pub mod types;
pub use types::*;
