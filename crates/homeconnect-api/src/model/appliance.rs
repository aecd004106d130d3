use serde::{Deserialize, Serialize};

/// A home appliance paired with the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeAppliance {
    #[serde(rename = "haId")]
    pub ha_id: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Appliance type, e.g. `"Dishwasher"` or `"Oven"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub brand: Option<String>,

    #[serde(default)]
    pub vib: Option<String>,

    #[serde(rename = "enumber", default)]
    pub e_number: Option<String>,

    #[serde(default)]
    pub connected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayOfHomeAppliances {
    pub homeappliances: Vec<HomeAppliance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_aliases() {
        let json = r#"{
            "homeappliances": [{
                "haId": "BOSCH-WAT28400-68A40E251128",
                "name": "Washer",
                "type": "Washer",
                "brand": "Bosch",
                "vib": "WAT28400",
                "enumber": "WAT28400/05",
                "connected": true
            }]
        }"#;

        let list: ArrayOfHomeAppliances = serde_json::from_str(json).unwrap();
        let washer = &list.homeappliances[0];
        assert_eq!(washer.ha_id, "BOSCH-WAT28400-68A40E251128");
        assert_eq!(washer.kind.as_deref(), Some("Washer"));
        assert_eq!(washer.e_number.as_deref(), Some("WAT28400/05"));
        assert!(washer.connected);
    }
}
