// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Table output formatting

use comfy_table::{ContentArrangement, Table, presets::NOTHING};

/// Widest a free-text column (task commands, process names) may get
pub const MAX_TEXT_WIDTH: usize = 48;

/// Create a borderless table with headers
pub fn create_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers);
    table
}

pub fn print_table(table: Table) {
    println!("{table}");
}

/// Cut `text` to at most `max` characters, ending in "..." when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("whoami", 10), "whoami");
    }

    #[test]
    fn long_text_is_marked() {
        assert_eq!(truncate("powershell Get-Process", 10), "powersh...");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(truncate("ääääää", 5), "ää...");
    }
}
