use crate::weights::WeightSet;
use derive_more::Display;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Property {
    #[display("Tensile Strength")]
    TensileStrength,
    #[display("Thermal Expansion")]
    ThermalExpansion,
    #[display("Electrical Resistivity")]
    ElectricalResistivity,
}

impl Property {
    pub const ALL: [Property; 3] = [
        Property::TensileStrength,
        Property::ThermalExpansion,
        Property::ElectricalResistivity,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Level {
    High,
    Medium,
    Low,
}

impl Level {
    pub fn weight(self) -> f64 {
        match self {
            Level::High => 1.0,
            Level::Medium => 0.5,
            Level::Low => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub tensile_strength: Level,
    pub thermal_expansion: Level,
    pub electrical_resistivity: Level,
    #[serde(default)]
    pub sustainability: bool,
}

impl Preferences {
    pub fn level(&self, property: Property) -> Level {
        match property {
            Property::TensileStrength => self.tensile_strength,
            Property::ThermalExpansion => self.thermal_expansion,
            Property::ElectricalResistivity => self.electrical_resistivity,
        }
    }

    pub fn weights(&self) -> WeightSet {
        let weights: IndexMap<String, f64> = Property::ALL
            .into_iter()
            .map(|property| (property.to_string(), self.level(property).weight()))
            .collect();

        // level weights are constants inside [0.0, 1.0] and the property list is not empty
        WeightSet::try_from(weights).expect("Level weights are always valid")
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Tensile strength: {}, Thermal expansion: {}, Electrical resistivity: {}. Focus on sustainability: {}.",
            self.tensile_strength,
            self.thermal_expansion,
            self.electrical_resistivity,
            self.sustainability
        )
    }
}
