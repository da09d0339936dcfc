// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! REST API type definitions

pub mod auth;
pub mod beacon;
pub mod bof;
pub mod command;
pub mod task;

pub use auth::*;
pub use beacon::*;
pub use bof::*;
pub use command::*;
pub use task::*;
