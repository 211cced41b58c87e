//! Region summary card builder.

use crate::api::{RegionCard, RegionSummaryData};
use crate::models::{resolve_region, ShipSnapshot, REGIONS};

/// Count snapshots per fixed region and build the card collection.
///
/// Ships that resolve to no region are counted only in `total_tracked`.
pub fn build_region_summary_data(snapshots: &[ShipSnapshot]) -> RegionSummaryData {
    let cards = REGIONS
        .iter()
        .map(|region| {
            let ship_count = snapshots
                .iter()
                .filter(|ship| {
                    resolve_region(ship.lat, ship.lng).map(|r| r.id) == Some(region.id)
                })
                .count();

            RegionCard {
                region_id: region.id.to_string(),
                name: region.name.to_string(),
                ship_count,
            }
        })
        .collect();

    RegionSummaryData {
        cards,
        total_tracked: snapshots.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ShipId;
    use crate::models::Condition;
    use chrono::Utc;

    fn snapshot_at(id: i64, lat: f64, lng: f64) -> ShipSnapshot {
        ShipSnapshot {
            id: ShipId::new(id),
            name: format!("SHIP {}", id),
            manager: String::new(),
            mmsi: format!("{:09}", id),
            imo: String::new(),
            flag: String::new(),
            full_draft: None,
            current_draft: None,
            condition: Condition::Unknown,
            lat,
            lng,
            sog: 11.0,
            cog: 180,
            destination: "TBN".to_string(),
            eta: String::new(),
            last_update: Utc::now(),
        }
    }

    #[test]
    fn test_always_four_cards_in_table_order() {
        let data = build_region_summary_data(&[]);
        let ids: Vec<&str> = data.cards.iter().map(|c| c.region_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["west-pacific", "east-pacific", "atlantic", "indian"]
        );
        assert!(data.cards.iter().all(|c| c.ship_count == 0));
    }

    #[test]
    fn test_counts_by_resolved_region() {
        let fleet = vec![
            snapshot_at(1, 20.0, 150.0),  // west-pacific
            snapshot_at(2, 10.0, 130.0),  // west-pacific
            snapshot_at(3, 20.0, -140.0), // east-pacific
            snapshot_at(4, 0.0, 80.0),    // indian
        ];
        let data = build_region_summary_data(&fleet);

        assert_eq!(data.cards[0].ship_count, 2);
        assert_eq!(data.cards[1].ship_count, 1);
        assert_eq!(data.cards[2].ship_count, 0);
        assert_eq!(data.cards[3].ship_count, 1);
        assert_eq!(data.total_tracked, 4);
    }

    #[test]
    fn test_unresolved_ship_counted_nowhere() {
        // 80N is outside every region box
        let data = build_region_summary_data(&[snapshot_at(1, 80.0, 0.0)]);
        let counted: usize = data.cards.iter().map(|c| c.ship_count).sum();
        assert_eq!(counted, 0);
        assert_eq!(data.total_tracked, 1);
    }

    #[test]
    fn test_counts_use_longitude_normalization() {
        // 220E normalizes to -140, i.e. east-pacific
        let data = build_region_summary_data(&[snapshot_at(1, 20.0, 220.0)]);
        assert_eq!(data.cards[1].ship_count, 1);
    }
}
