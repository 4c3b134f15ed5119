use serde::Deserialize;

use crate::models::sessionmodel::{Language, Theme};

/// Both fields optional; only what is sent gets updated.
#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesDto {
    pub language: Option<Language>,
    pub theme: Option<Theme>,
}
