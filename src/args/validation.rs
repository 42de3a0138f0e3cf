use regex::Regex;
use std::{fs, path::PathBuf};

use crate::model::{Roster, RosterEntry};

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a valid roster
pub fn check_readable_roster_file(file: &str) -> Result<Roster, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The roster file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The roster file '{file}' could not be read: {e}"))?;
    let entries: Vec<RosterEntry> = serde_json::from_str(&contents).map_err(|e| {
        format!(
            "The roster file '{file}' is not in the correct format. Expected [{{\"nickname\": \"...\", \"card_id\": \"...\"}}]: {e}"
        )
    })?;
    validate_roster(&entries)?;
    Ok(Roster(entries))
}

/// Card ids end up in element ids and query strings, so they are limited to
/// `[A-Za-z0-9_-]` and must be unique. `json` is reserved by the cards endpoint.
///
/// # Errors
///
/// Will return `Err` if the roster is empty or an entry is invalid
pub fn validate_roster(entries: &[RosterEntry]) -> Result<(), String> {
    if entries.is_empty() {
        return Err("The roster must contain at least one player.".to_string());
    }

    let card_id_re = Regex::new(r"^[A-Za-z0-9_-]+$").map_err(|e| e.to_string())?;
    let mut seen = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.nickname.trim().is_empty() {
            return Err(format!("Card '{}' has an empty nickname.", entry.card_id));
        }
        if !card_id_re.is_match(&entry.card_id) {
            return Err(format!(
                "Card id '{}' may only contain letters, digits, '_' and '-'.",
                entry.card_id
            ));
        }
        if entry.card_id == "json" {
            return Err("Card id 'json' is reserved.".to_string());
        }
        if seen.contains(&entry.card_id.as_str()) {
            return Err(format!("Card id '{}' is used twice.", entry.card_id));
        }
        seen.push(entry.card_id.as_str());
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the key is blank
pub fn check_api_key(key: &str) -> Result<String, String> {
    let key = key.trim();
    if key.is_empty() {
        return Err("The FACEIT api key is empty. Set --api-key or FACEIT_API_KEY.".to_string());
    }
    Ok(key.to_string())
}
