pub mod map_view;
pub mod region_summary;
pub mod roster;
pub mod ship_list;

#[cfg(test)]
mod tests {
    #[test]
    fn test_module_structure() {
        // Test that all route module constants are accessible
        assert_eq!(super::roster::LIST_ROSTER, "list_roster");
        assert_eq!(super::roster::SAVE_SHIP, "save_ship");
        assert_eq!(super::roster::DELETE_SHIP, "delete_ship");
        assert_eq!(super::ship_list::GET_SHIP_LIST_DATA, "get_ship_list_data");
        assert_eq!(
            super::region_summary::GET_REGION_SUMMARY_DATA,
            "get_region_summary_data"
        );
        assert_eq!(super::map_view::GET_MAP_VIEW_DATA, "get_map_view_data");
        assert_eq!(super::map_view::GET_SHIP_DETAIL, "get_ship_detail");
    }
}
