//! Merging the two independently fetched record sets.

use crate::records::model::PlotRecord;

/// Combines the occupied and available collections into one renderable
/// collection, preserving source order.
///
/// No deduplication by permit id happens here: the two sources are
/// disjoint by construction, and that invariant belongs to the caller.
/// Classification stays derivable from each record's `status` field, so
/// the merged collection carries everything rendering needs.
pub fn merge(occupied: Vec<PlotRecord>, available: Vec<PlotRecord>) -> Vec<PlotRecord> {
    let mut combined = occupied;
    combined.extend(available);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::model::Coordinate;

    fn record(permit: &str, status: &str) -> PlotRecord {
        PlotRecord {
            permit: permit.to_string(),
            lot: "1".to_string(),
            block: "A".to_string(),
            grave: "1".to_string(),
            status: Some(status.to_string()),
            lat: Some(Coordinate::Decimal(-26.194)),
            lng: Some(Coordinate::Decimal(28.027)),
            deceased: None,
        }
    }

    #[test]
    fn test_merge_length_and_order() {
        let occupied = vec![record("P1", "Occupied"), record("P2", "Occupied")];
        let available = vec![record("P3", "Available")];

        let combined = merge(occupied, available);

        assert_eq!(combined.len(), 3);
        let permits: Vec<&str> = combined.iter().map(|r| r.permit.as_str()).collect();
        assert_eq!(permits, ["P1", "P2", "P3"]);
    }

    #[test]
    fn test_merge_empty_sides() {
        assert!(merge(Vec::new(), Vec::new()).is_empty());
        assert_eq!(merge(vec![record("P1", "Occupied")], Vec::new()).len(), 1);
        assert_eq!(merge(Vec::new(), vec![record("P2", "Available")]).len(), 1);
    }

    #[test]
    fn test_merge_keeps_duplicate_permits() {
        // Disjointness is a caller invariant, not enforced here.
        let combined = merge(
            vec![record("P1", "Occupied")],
            vec![record("P1", "Available")],
        );
        assert_eq!(combined.len(), 2);
    }
}
