//! Master-management payloads and the roster list render model.

use serde::{Deserialize, Serialize};

use crate::api::ShipId;

/// Raw create/update payload as submitted by the master form.
///
/// `full_draft` arrives as the raw text-field content; validation turns it
/// into a typed value instead of silently storing whatever parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mmsi: String,
    #[serde(default)]
    pub imo: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub manager: String,
    /// Full draft in metres, as entered. Empty or absent means "not set".
    #[serde(default)]
    pub full_draft: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Validation failure for a [`ShipForm`] submission.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShipFormError {
    #[error("Ship name is required")]
    MissingName,
    #[error("MMSI is required")]
    MissingMmsi,
    #[error("Full draft is not a number: {0:?}")]
    InvalidFullDraft(String),
    #[error("Full draft must be positive, got {0}")]
    NonPositiveFullDraft(f64),
}

/// A validated, typed roster mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedShip {
    pub name: String,
    pub mmsi: String,
    pub imo: String,
    pub flag: String,
    pub manager: String,
    pub full_draft: Option<f64>,
    pub active: bool,
}

impl ShipForm {
    /// Validate the form into a typed mutation.
    ///
    /// Fields are whitespace-trimmed. `name` and `mmsi` must be non-empty;
    /// an empty draft field means no draft, anything else must parse to a
    /// positive number.
    pub fn validate(&self) -> Result<ValidatedShip, ShipFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ShipFormError::MissingName);
        }

        let mmsi = self.mmsi.trim();
        if mmsi.is_empty() {
            return Err(ShipFormError::MissingMmsi);
        }

        let full_draft = match self.full_draft.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let value: f64 = raw
                    .parse()
                    .map_err(|_| ShipFormError::InvalidFullDraft(raw.to_string()))?;
                if value <= 0.0 {
                    return Err(ShipFormError::NonPositiveFullDraft(value));
                }
                Some(value)
            }
        };

        Ok(ValidatedShip {
            name: name.to_string(),
            mmsi: mmsi.to_string(),
            imo: self.imo.trim().to_string(),
            flag: self.flag.trim().to_string(),
            manager: self.manager.trim().to_string(),
            full_draft,
            active: self.active,
        })
    }
}

/// One row of the master list panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterRow {
    pub id: ShipId,
    pub name: String,
    pub active: bool,
    /// "MMSI: ... / IMO: ... / Flag: ..."
    pub identity_line: String,
    /// "Manager: ... / Full draft: ... m"
    pub management_line: String,
}

/// Master list render model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterListData {
    pub rows: Vec<RosterRow>,
    /// Message shown instead of rows when the roster is empty.
    pub placeholder: Option<String>,
    pub total: usize,
}

/// Route function name constants
pub const LIST_ROSTER: &str = "list_roster";
pub const SAVE_SHIP: &str = "save_ship";
pub const DELETE_SHIP: &str = "delete_ship";
