//! Plot record view-model types.
//!
//! Records are transient: they are rebuilt from the record store on every
//! load, never mutated in place, and discarded when the session ends.
//! The serde renames mirror the store's wire field names, which the
//! original backend exposes verbatim from its tables.

use serde::{Deserialize, Serialize};

/// A coordinate value as it arrives from the record store: either already
/// a signed decimal degree or a DMS string tagged with a hemisphere letter.
///
/// [`normalize`](Coordinate::normalize) converts either form to the
/// canonical decimal degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Decimal(f64),
    Text(String),
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Coordinate::Decimal(value)
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Coordinate::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(alias = "m")]
    M,
    #[serde(alias = "f")]
    F,
}

/// Identity of the person interred in an occupied plot.
///
/// Attached 1:1 to a [`PlotRecord`] when the record originates from the
/// occupied source; the store returns these fields flattened into the
/// plot row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeceasedInfo {
    #[serde(rename = "DecID")]
    pub id: String,
    #[serde(rename = "DecNama")]
    pub first_name: String,
    #[serde(rename = "DecSurname")]
    pub surname: String,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "DoB")]
    pub date_of_birth: String,
    #[serde(rename = "DoD")]
    pub date_of_death: String,
}

/// A single burial plot, occupied or available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotRecord {
    /// Unique identifier linking a plot to its occupancy record
    #[serde(rename = "Permit")]
    pub permit: String,
    #[serde(rename = "Lot")]
    pub lot: String,
    #[serde(rename = "Block")]
    pub block: String,
    #[serde(rename = "Grave")]
    pub grave: String,
    /// Free-text status; drives classification, see [`classification`](Self::classification)
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(default)]
    pub lat: Option<Coordinate>,
    #[serde(default)]
    pub lng: Option<Coordinate>,
    /// Present iff the record came from the occupied source
    #[serde(flatten)]
    pub deceased: Option<DeceasedInfo>,
}

/// Rendering classification of a plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotClass {
    Occupied,
    Available,
}

impl PlotRecord {
    /// Classifies the record from its `status` field.
    ///
    /// A record is available iff `status` equals `"available"`
    /// case-insensitively; every other value, including a missing one,
    /// classifies as occupied. The rule is derived from `status` rather
    /// than from source origin so rendering has a single source of truth.
    pub fn classification(&self) -> PlotClass {
        match &self.status {
            Some(status) if status.eq_ignore_ascii_case("available") => PlotClass::Available,
            _ => PlotClass::Occupied,
        }
    }

    pub fn is_available(&self) -> bool {
        self.classification() == PlotClass::Available
    }
}

/// Write payload for a new occupied plot, matching the store's wire shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccupiedPlotInput {
    #[serde(rename = "DecID")]
    pub deceased_id: String,
    #[serde(rename = "DecNama")]
    pub first_name: String,
    #[serde(rename = "DecSurname")]
    pub surname: String,
    // The original backend accepts this one field lowercased.
    #[serde(rename = "sex")]
    pub sex: Sex,
    #[serde(rename = "DoB")]
    pub date_of_birth: String,
    #[serde(rename = "DoD")]
    pub date_of_death: String,
    #[serde(rename = "Permit")]
    pub permit: String,
    #[serde(rename = "Lot")]
    pub lot: String,
    #[serde(rename = "Block")]
    pub block: String,
    #[serde(rename = "Grave")]
    pub grave: String,
    #[serde(rename = "Status")]
    pub status: String,
    pub lat: f64,
    pub lng: f64,
}

/// Write payload for a new available plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailablePlotInput {
    #[serde(rename = "Permit")]
    pub permit: String,
    #[serde(rename = "Lot")]
    pub lot: String,
    #[serde(rename = "Block")]
    pub block: String,
    #[serde(rename = "Grave")]
    pub grave: String,
    #[serde(rename = "Status")]
    pub status: String,
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: Option<&str>) -> PlotRecord {
        PlotRecord {
            permit: "P1".to_string(),
            lot: "12".to_string(),
            block: "B".to_string(),
            grave: "3".to_string(),
            status: status.map(str::to_string),
            lat: Some(Coordinate::Decimal(-26.194)),
            lng: Some(Coordinate::Decimal(28.027)),
            deceased: None,
        }
    }

    #[test]
    fn test_classification_case_insensitive() {
        assert_eq!(
            record(Some("Available")).classification(),
            PlotClass::Available
        );
        assert_eq!(
            record(Some("AVAILABLE")).classification(),
            PlotClass::Available
        );
        assert_eq!(
            record(Some("available")).classification(),
            PlotClass::Available
        );
    }

    #[test]
    fn test_classification_falls_back_to_occupied() {
        assert_eq!(record(Some("Occupied")).classification(), PlotClass::Occupied);
        // Typos and unknown values classify as occupied.
        assert_eq!(
            record(Some("Occupiedd")).classification(),
            PlotClass::Occupied
        );
        assert_eq!(record(Some("")).classification(), PlotClass::Occupied);
        assert_eq!(record(None).classification(), PlotClass::Occupied);
    }

    #[test]
    fn test_occupied_wire_row_deserializes_flat_deceased() {
        let row = serde_json::json!({
            "DecID": "D7", "DecNama": "Thandi", "DecSurname": "Nkosi",
            "Sex": "F", "DoB": "1931-02-14", "DoD": "2004-08-30",
            "Permit": "P7", "Lot": "4", "Block": "C", "Grave": "11",
            "Status": "Occupied", "lat": -26.19401, "lng": 28.02755
        });

        let record: PlotRecord = serde_json::from_value(row).unwrap();
        let deceased = record.deceased.as_ref().expect("flattened deceased fields");

        assert_eq!(deceased.surname, "Nkosi");
        assert_eq!(deceased.sex, Sex::F);
        assert_eq!(record.classification(), PlotClass::Occupied);
    }

    #[test]
    fn test_available_wire_row_has_no_deceased() {
        let row = serde_json::json!({
            "Permit": "P8", "Lot": "5", "Block": "C", "Grave": "12",
            "Status": "Available", "lat": "26°11'38\"S", "lng": "28°01'39\"E"
        });

        let record: PlotRecord = serde_json::from_value(row).unwrap();

        assert!(record.deceased.is_none());
        assert_eq!(record.lat, Some(Coordinate::from("26°11'38\"S")));
        assert_eq!(record.classification(), PlotClass::Available);
    }
}
