// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Output formatting utilities

pub mod table;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Short age of a timestamp relative to now ("45s", "3m", "2h", "5d")
pub fn format_age(when: &DateTime<Utc>) -> String {
    let secs = Utc::now().signed_duration_since(*when).num_seconds().max(0);
    if secs >= 86_400 {
        format!("{}d", secs / 86_400)
    } else if secs >= 3_600 {
        format!("{}h", secs / 3_600)
    } else if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn age_uses_largest_whole_unit() {
        let now = Utc::now();
        assert_eq!(format_age(&(now - Duration::days(3))), "3d");
        assert_eq!(format_age(&(now - Duration::hours(5))), "5h");
        assert_eq!(format_age(&(now - Duration::minutes(7))), "7m");
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        assert_eq!(format_age(&(Utc::now() + Duration::hours(1))), "0s");
    }
}
