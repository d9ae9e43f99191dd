//! Static station / mission / connection lists served by the config endpoint.

use serde_json::Value;

/// XPath selecting the station list.
pub const STATIONS_XPATH: &str = "/LMTType/StationList/Station";
/// XPath selecting the mission list.
pub const MISSIONS_XPATH: &str = "/LMTType/MissionList/Mission";
/// XPath selecting the station connection list.
pub const CONNECTIONS_XPATH: &str = "/StationConnections/Station";

/// Read-only lists loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigCatalog {
    /// Entries of the LMT `stations` member.
    pub stations: Vec<Value>,
    /// Entries of the LMT `missions` member.
    pub missions: Vec<Value>,
    /// Entries of the connections file.
    pub connections: Vec<Value>,
}

impl ConfigCatalog {
    /// Returns the list selected by `xpath`, or `None` for an unknown path.
    ///
    /// Matching is exact; no XPath evaluation is performed.
    #[must_use]
    pub fn lookup(&self, xpath: &str) -> Option<&[Value]> {
        match xpath {
            STATIONS_XPATH => Some(&self.stations),
            MISSIONS_XPATH => Some(&self.missions),
            CONNECTIONS_XPATH => Some(&self.connections),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn catalog() -> ConfigCatalog {
        ConfigCatalog {
            stations: vec![json!({"id": 1, "name": "Alpha"})],
            missions: vec![json!({"id": "M1"}), json!({"id": "M2"})],
            connections: vec![json!({"station": 1, "host": "10.0.0.1"})],
        }
    }

    #[test]
    fn lookup_known_paths() {
        let c = catalog();
        assert_eq!(c.lookup(STATIONS_XPATH).map(<[Value]>::len), Some(1));
        assert_eq!(c.lookup(MISSIONS_XPATH).map(<[Value]>::len), Some(2));
        assert_eq!(
            c.lookup(CONNECTIONS_XPATH),
            Some(&[json!({"station": 1, "host": "10.0.0.1"})][..])
        );
    }

    #[test]
    fn lookup_unknown_path_is_none() {
        let c = catalog();
        assert!(c.lookup("/LMTType/StationList").is_none());
        assert!(c.lookup("").is_none());
        assert!(c.lookup("/lmttype/stationlist/station").is_none());
    }
}
