// src/profile/entry_id.rs
use std::fmt;

const NEW_SENTINEL: &str = "new";
const TEMP_PREFIX: &str = "temp_";

/// Identity of one repeating-section entry (education, experience, project).
///
/// The wire format is stringly typed: the sentinel `"new"` for a blank row,
/// `"temp_<timestamp>"` for a row added this session, or the backend primary
/// key as a numeric string. Carrying the distinction as an enum makes the
/// save/delete dispatch exhaustive instead of prefix-sniffed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryId {
    /// Blank placeholder row, never given an identity.
    Unsaved,
    /// Added this session, not yet confirmed by the backend.
    Pending { local_key: i64 },
    /// Row with a backend primary key.
    Persisted { server_id: i64 },
    /// Anything else coming off the wire. Never dispatched remotely.
    Unknown(String),
}

/// Remote operation required to save one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAction {
    Create,
    Update { server_id: i64 },
    Skip,
}

impl EntryId {
    /// Classify a raw id string. Evaluation order matters: the sentinel
    /// first, then the temp prefix, then a numeric primary key.
    pub fn parse(raw: &str) -> Self {
        if raw == NEW_SENTINEL {
            return EntryId::Unsaved;
        }
        if let Some(rest) = raw.strip_prefix(TEMP_PREFIX) {
            if let Ok(local_key) = rest.parse::<i64>() {
                return EntryId::Pending { local_key };
            }
        }
        if let Ok(server_id) = raw.parse::<i64>() {
            return EntryId::Persisted { server_id };
        }
        EntryId::Unknown(raw.to_string())
    }

    /// Fresh client-only placeholder keyed by the current timestamp.
    pub fn pending_now() -> Self {
        EntryId::Pending {
            local_key: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn server_id(&self) -> Option<i64> {
        match self {
            EntryId::Persisted { server_id } => Some(*server_id),
            _ => None,
        }
    }

    /// Only persisted entries have a backend counterpart to delete.
    pub fn requires_remote_delete(&self) -> bool {
        matches!(self, EntryId::Persisted { .. })
    }

    /// Decide the remote operation for a save pass. A blank placeholder row
    /// is skipped rather than persisted as an empty record; an unsaved row
    /// the user actually filled in is created like a pending one.
    pub fn save_action(&self, is_blank: bool) -> SaveAction {
        match self {
            EntryId::Unsaved if is_blank => SaveAction::Skip,
            EntryId::Unsaved | EntryId::Pending { .. } => SaveAction::Create,
            EntryId::Persisted { server_id } => SaveAction::Update {
                server_id: *server_id,
            },
            EntryId::Unknown(_) => SaveAction::Skip,
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Unsaved => write!(f, "{}", NEW_SENTINEL),
            EntryId::Pending { local_key } => write!(f, "{}{}", TEMP_PREFIX, local_key),
            EntryId::Persisted { server_id } => write!(f, "{}", server_id),
            EntryId::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classifies_all_shapes() {
        assert_eq!(EntryId::parse("new"), EntryId::Unsaved);
        assert_eq!(
            EntryId::parse("temp_1714688000123"),
            EntryId::Pending {
                local_key: 1714688000123
            }
        );
        assert_eq!(EntryId::parse("42"), EntryId::Persisted { server_id: 42 });
        assert_eq!(
            EntryId::parse("abc"),
            EntryId::Unknown("abc".to_string())
        );
        // Malformed temp suffix is not a pending key
        assert_eq!(
            EntryId::parse("temp_x"),
            EntryId::Unknown("temp_x".to_string())
        );
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["new", "temp_99", "17", "weird-id"] {
            assert_eq!(EntryId::parse(raw).to_string(), raw);
        }
    }

    #[test]
    fn test_unsaved_and_pending_never_hit_numeric_paths() {
        assert!(!EntryId::Unsaved.requires_remote_delete());
        assert!(!EntryId::Pending { local_key: 1 }.requires_remote_delete());
        assert_eq!(EntryId::Unsaved.server_id(), None);
        assert_eq!(EntryId::Pending { local_key: 1 }.server_id(), None);

        assert_eq!(
            EntryId::Pending { local_key: 1 }.save_action(false),
            SaveAction::Create
        );
        assert_eq!(
            EntryId::Pending { local_key: 1 }.save_action(true),
            SaveAction::Create
        );
    }

    #[test]
    fn test_persisted_updates_and_deletes_remotely() {
        let id = EntryId::Persisted { server_id: 7 };
        assert!(id.requires_remote_delete());
        assert_eq!(id.save_action(false), SaveAction::Update { server_id: 7 });
        assert_eq!(id.save_action(true), SaveAction::Update { server_id: 7 });
    }

    #[test]
    fn test_blank_placeholder_is_skipped() {
        assert_eq!(EntryId::Unsaved.save_action(true), SaveAction::Skip);
        assert_eq!(EntryId::Unsaved.save_action(false), SaveAction::Create);
        assert_eq!(
            EntryId::Unknown("x".to_string()).save_action(false),
            SaveAction::Skip
        );
    }
}
