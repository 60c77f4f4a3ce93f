//! FILENAME: insight-engine/src/geo.rs
//! PURPOSE: US state reference tables and the state-level transaction map.
//! CONTEXT: Location values are full US state names. The map view joins the
//! per-location totals against these tables to get postal abbreviations and
//! marker coordinates. Locations with no entry here are left off the map
//! silently; they still count everywhere else.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::aggregate::LocationTotals;

/// How many marker pins the map places on its busiest states.
pub const MAP_MARKER_COUNT: usize = 3;

/// Full state name to USPS abbreviation, 50 states plus DC.
pub static US_STATE_ABBR: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("Alabama", "AL"),
        ("Alaska", "AK"),
        ("Arizona", "AZ"),
        ("Arkansas", "AR"),
        ("California", "CA"),
        ("Colorado", "CO"),
        ("Connecticut", "CT"),
        ("Delaware", "DE"),
        ("Florida", "FL"),
        ("Georgia", "GA"),
        ("Hawaii", "HI"),
        ("Idaho", "ID"),
        ("Illinois", "IL"),
        ("Indiana", "IN"),
        ("Iowa", "IA"),
        ("Kansas", "KS"),
        ("Kentucky", "KY"),
        ("Louisiana", "LA"),
        ("Maine", "ME"),
        ("Maryland", "MD"),
        ("Massachusetts", "MA"),
        ("Michigan", "MI"),
        ("Minnesota", "MN"),
        ("Mississippi", "MS"),
        ("Missouri", "MO"),
        ("Montana", "MT"),
        ("Nebraska", "NE"),
        ("Nevada", "NV"),
        ("New Hampshire", "NH"),
        ("New Jersey", "NJ"),
        ("New Mexico", "NM"),
        ("New York", "NY"),
        ("North Carolina", "NC"),
        ("North Dakota", "ND"),
        ("Ohio", "OH"),
        ("Oklahoma", "OK"),
        ("Oregon", "OR"),
        ("Pennsylvania", "PA"),
        ("Rhode Island", "RI"),
        ("South Carolina", "SC"),
        ("South Dakota", "SD"),
        ("Tennessee", "TN"),
        ("Texas", "TX"),
        ("Utah", "UT"),
        ("Vermont", "VT"),
        ("Virginia", "VA"),
        ("Washington", "WA"),
        ("West Virginia", "WV"),
        ("Wisconsin", "WI"),
        ("Wyoming", "WY"),
        ("District of Columbia", "DC"),
    ]
    .into_iter()
    .collect()
});

/// USPS abbreviation to (latitude, longitude) of the state's centroid.
pub static STATE_CENTROIDS: Lazy<FxHashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    [
        ("AL", (32.806671, -86.791130)),
        ("AK", (61.370716, -152.404419)),
        ("AZ", (33.729759, -111.431221)),
        ("AR", (34.969704, -92.373123)),
        ("CA", (36.116203, -119.681564)),
        ("CO", (39.059811, -105.311104)),
        ("CT", (41.597782, -72.755371)),
        ("DE", (39.318523, -75.507141)),
        ("FL", (27.766279, -81.686783)),
        ("GA", (33.040619, -83.643074)),
        ("HI", (21.094318, -157.498337)),
        ("ID", (44.240459, -114.478828)),
        ("IL", (40.349457, -88.986137)),
        ("IN", (39.849426, -86.258278)),
        ("IA", (42.011539, -93.210526)),
        ("KS", (38.526600, -96.726486)),
        ("KY", (37.668140, -84.670067)),
        ("LA", (31.169546, -91.867805)),
        ("ME", (44.693947, -69.381927)),
        ("MD", (39.063946, -76.802101)),
        ("MA", (42.230171, -71.530106)),
        ("MI", (43.326618, -84.536095)),
        ("MN", (45.694454, -93.900192)),
        ("MS", (32.741646, -89.678696)),
        ("MO", (38.456085, -92.288368)),
        ("MT", (46.921925, -110.454353)),
        ("NE", (41.125370, -98.268082)),
        ("NV", (38.313515, -117.055374)),
        ("NH", (43.452492, -71.563896)),
        ("NJ", (40.298904, -74.521011)),
        ("NM", (34.840515, -106.248482)),
        ("NY", (42.165726, -74.948051)),
        ("NC", (35.630066, -79.806419)),
        ("ND", (47.528912, -99.784012)),
        ("OH", (40.388783, -82.764915)),
        ("OK", (35.565342, -96.928917)),
        ("OR", (44.572021, -122.070938)),
        ("PA", (40.590752, -77.209755)),
        ("RI", (41.680893, -71.511780)),
        ("SC", (33.856892, -80.945007)),
        ("SD", (44.299782, -99.438828)),
        ("TN", (35.747845, -86.692345)),
        ("TX", (31.054487, -97.563461)),
        ("UT", (40.150032, -111.862434)),
        ("VT", (44.045876, -72.710686)),
        ("VA", (37.769337, -78.169968)),
        ("WA", (47.400902, -121.490494)),
        ("WV", (38.491226, -80.954453)),
        ("WI", (44.268543, -89.616508)),
        ("WY", (42.755966, -107.302490)),
        ("DC", (38.9072, -77.0369)),
    ]
    .into_iter()
    .collect()
});

/// Looks up a location's USPS abbreviation, if the location is a known state.
pub fn state_abbr(location: &str) -> Option<&'static str> {
    US_STATE_ABBR.get(location).copied()
}

/// Looks up a state's centroid coordinates by USPS abbreviation.
pub fn state_centroid(abbr: &str) -> Option<(f64, f64)> {
    STATE_CENTROIDS.get(abbr).copied()
}

// ============================================================================
// Map view
// ============================================================================

/// One state's transaction count, keyed both ways for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateCount {
    pub location: String,
    pub state: &'static str,
    pub count: u64,
}

/// A marker pin on one of the busiest states.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateMarker {
    pub location: String,
    pub state: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub count: u64,
}

/// The choropleth rows plus marker pins for the busiest states.
///
/// `rows` holds only locations that resolve to a state, sorted by name.
/// `markers` holds up to [`MAP_MARKER_COUNT`] pins in descending count order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateTransactionMap {
    pub rows: Vec<StateCount>,
    pub markers: SmallVec<[StateMarker; MAP_MARKER_COUNT]>,
}

impl StateTransactionMap {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Projects per-location totals onto the US state map.
///
/// Locations that are not recognized states are dropped from the rows and can
/// never carry a marker. Counts for dropped locations are not redistributed.
pub fn state_transaction_map(totals: &LocationTotals) -> StateTransactionMap {
    let mut rows: Vec<StateCount> = totals
        .rows
        .iter()
        .filter_map(|row| {
            state_abbr(&row.location).map(|state| StateCount {
                location: row.location.clone(),
                state,
                count: row.count,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.location.cmp(&b.location));

    let mut ranked: Vec<&StateCount> = rows.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    let markers = ranked
        .iter()
        .take(MAP_MARKER_COUNT)
        .filter_map(|row| {
            state_centroid(row.state).map(|(lat, lon)| StateMarker {
                location: row.location.clone(),
                state: row.state,
                lat,
                lon,
                count: row.count,
            })
        })
        .collect();

    StateTransactionMap { rows, markers }
}

// ============================================================================
// Tests
// ============================================================================
