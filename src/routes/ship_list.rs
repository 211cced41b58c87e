use serde::{Deserialize, Serialize};

use crate::api::ShipId;
use crate::models::Condition;

/// One row of the fleet list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipListRow {
    pub id: ShipId,
    pub name: String,
    pub manager: String,
    pub condition: Condition,
    pub condition_label: String,
    /// CSS class for the condition chip.
    pub badge_class: String,
    /// Draft ratio as a whole percentage, or the placeholder dash.
    pub ratio_text: String,
    pub destination: String,
    pub eta: String,
}

/// Fleet list view render model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipListData {
    pub rows: Vec<ShipListRow>,
    /// Message shown instead of rows when there is nothing to display.
    pub placeholder: Option<String>,
    pub total: usize,
}

/// Route function name constant
pub const GET_SHIP_LIST_DATA: &str = "get_ship_list_data";
