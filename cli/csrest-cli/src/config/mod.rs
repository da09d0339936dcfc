// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use paths::config_file;
pub use profile::Profile;

use anyhow::Result;
use csrest_client::ClientConfig;
use secrecy::SecretString;

/// Connection settings given on the command line or in the environment
#[derive(Debug, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    pub insecure: bool,
}

/// Everything needed to open a session
#[derive(Debug)]
pub struct Settings {
    pub connection: ClientConfig,
    pub username: String,
    /// `None` means the password still has to be prompted for
    pub password: Option<SecretString>,
}

/// Layer CLI/env overrides on top of the profile.
///
/// Priority:
/// 1. Command line flags and `CSREST_*` environment variables
/// 2. The profile in config.json
/// 3. Built-in defaults
pub fn resolve(profile: Profile, overrides: Overrides) -> Result<Settings> {
    let mut connection = profile.connection;
    if let Some(host) = overrides.host {
        connection.host = host;
    }
    if let Some(port) = overrides.port {
        connection.port = port;
    }
    if overrides.insecure {
        connection.insecure = true;
    }

    let username = overrides.user.or(profile.username).ok_or_else(|| {
        anyhow::anyhow!(
            "No username configured. Use --user, set CSREST_USER, or add \"username\" to {}",
            config_file().display()
        )
    })?;

    Ok(Settings {
        connection,
        username,
        password: overrides.password,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn profile() -> Profile {
        Profile {
            connection: ClientConfig {
                host: "ts.example.com".to_string(),
                port: 8443,
                ..Default::default()
            },
            username: Some("operator".to_string()),
        }
    }

    #[test]
    fn profile_values_used_without_overrides() {
        let settings = resolve(profile(), Overrides::default()).unwrap();
        assert_eq!(settings.connection.host, "ts.example.com");
        assert_eq!(settings.connection.port, 8443);
        assert_eq!(settings.username, "operator");
        assert!(settings.password.is_none());
    }

    #[test]
    fn overrides_win_over_profile() {
        let overrides = Overrides {
            host: Some("10.0.0.1".to_string()),
            port: Some(50443),
            user: Some("admin".to_string()),
            password: Some(SecretString::from("pw".to_string())),
            insecure: true,
        };
        let settings = resolve(profile(), overrides).unwrap();
        assert_eq!(settings.connection.host, "10.0.0.1");
        assert_eq!(settings.connection.port, 50443);
        assert!(settings.connection.insecure);
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.password.unwrap().expose_secret(), "pw");
    }

    #[test]
    fn missing_username_is_an_error() {
        let err = resolve(Profile::default(), Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("No username configured"));
    }
}
