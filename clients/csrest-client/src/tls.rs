// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! rustls crypto provider setup
//!
//! reqwest is built with `rustls-no-provider`, so a process-wide provider
//! must be installed before the first reqwest client is built. The workspace
//! standardises on `ring`; see the root Cargo.toml.

use std::sync::Once;

static INSTALL: Once = Once::new();

/// Install the `ring` provider as the process default, once.
///
/// A provider installed earlier by the embedding application is left alone.
pub fn install_crypto_provider() {
    INSTALL.call_once(|| {
        if rustls::crypto::CryptoProvider::get_default().is_none()
            && rustls::crypto::ring::default_provider()
                .install_default()
                .is_err()
        {
            tracing::debug!("crypto provider installed concurrently by another caller");
        }
    });
}
