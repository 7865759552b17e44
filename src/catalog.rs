//! Input table rows for building a `StarGraph`
//!
//! Reading these tables from disk is left to the host. The rows here are plain
//! values so any loader can produce them.

use crate::geometry::Point3;


/// One row of the star table: identifier plus position
#[derive(Clone, Debug, PartialEq)]
pub struct StarRecord {
    pub name: String,
    pub position: Point3,
}

impl StarRecord {
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            position: Point3::new(x, y, z),
        }
    }
}


/// One row of the lane table. Lanes are undirected, so source/destination
/// only records how the row was written
#[derive(Clone, Debug, PartialEq)]
pub struct LaneRecord {
    pub source: String,
    pub destination: String,
    pub distance: f64,
}

impl LaneRecord {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, distance: f64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance,
        }
    }
}


/// Five nearby stars and the lanes between them
pub fn sample_catalog() -> (Vec<StarRecord>, Vec<LaneRecord>) {
    let stars = vec![
        StarRecord::new("Sun", 0.0, 0.0, 0.0),
        StarRecord::new("Proxima Centauri", 176.0, -406.0, -49.0),
        StarRecord::new("YZ Ceti", -280.0, 1568.0, 40.0),
        StarRecord::new("Upsilon Andromedae", 512.0, -623.0, 133.0),
        StarRecord::new("61 Virginis", 102.0, -201.0, 144.0),
    ];

    let lanes = vec![
        LaneRecord::new("Sun", "Proxima Centauri", 401.0),
        LaneRecord::new("Proxima Centauri", "YZ Ceti", 2028.0),
        LaneRecord::new("Sun", "YZ Ceti", 2200.0),
        LaneRecord::new("Proxima Centauri", "Upsilon Andromedae", 2273.0),
        LaneRecord::new("YZ Ceti", "61 Virginis", 2100.0),
    ];

    (stars, lanes)
}
