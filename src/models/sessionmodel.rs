use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

/// Per-visitor UI state the frontend previously kept in ambient globals.
/// Lives and dies with the process.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionState {
    pub session_id: Uuid,
    pub favorites: HashSet<Uuid>,
    pub language: Language,
    pub theme: Theme,
}

impl SessionState {
    pub fn new(session_id: Uuid) -> Self {
        SessionState {
            session_id,
            favorites: HashSet::new(),
            language: Language::En,
            theme: Theme::Light,
        }
    }
}
