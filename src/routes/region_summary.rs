use serde::{Deserialize, Serialize};

/// One region summary card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCard {
    pub region_id: String,
    pub name: String,
    /// Ships whose resolved region is this one.
    pub ship_count: usize,
}

/// Region summary render model, one card per fixed region.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummaryData {
    pub cards: Vec<RegionCard>,
    /// Total snapshots this cycle, including ships outside every region.
    pub total_tracked: usize,
}

/// Route function name constant
pub const GET_REGION_SUMMARY_DATA: &str = "get_region_summary_data";
