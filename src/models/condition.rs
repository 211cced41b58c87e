//! Loading-condition classification.
//!
//! A ship's loading condition is derived from the ratio of its current draft
//! to its full (design) draft. The thresholds match the operational rule of
//! thumb used by the fleet team: at or above 70% of full draft a ship is
//! considered laden, at or below 30% in ballast.

use serde::{Deserialize, Serialize};

/// Categorical loading state of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    Laden,
    Ballast,
    Partly,
    Unknown,
}

impl Condition {
    /// Classify a loading condition from current and full draft (metres).
    ///
    /// Returns [`Condition::Unknown`] when either draft is absent.
    /// Non-positive drafts are treated as absent. The 0.7 and 0.3 ratio
    /// boundaries are inclusive on the classified side.
    pub fn classify(current_draft: Option<f64>, full_draft: Option<f64>) -> Self {
        let (current, full) = match (current_draft, full_draft) {
            (Some(c), Some(f)) if c > 0.0 && f > 0.0 => (c, f),
            _ => return Condition::Unknown,
        };

        let ratio = current / full;
        if ratio >= 0.7 {
            Condition::Laden
        } else if ratio <= 0.3 {
            Condition::Ballast
        } else {
            Condition::Partly
        }
    }

    /// Display label for list rows and the detail panel.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Laden => "LADEN",
            Condition::Ballast => "BALLAST",
            Condition::Partly => "PARTLY LADEN",
            Condition::Unknown => "UNKNOWN",
        }
    }

    /// CSS badge class used by the frontend for the condition chip.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Condition::Laden => "badge-laden",
            Condition::Ballast => "badge-ballast",
            Condition::Partly => "badge-partly",
            Condition::Unknown => "badge-unknown",
        }
    }
}
