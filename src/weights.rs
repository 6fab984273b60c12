use crate::error::FormulaError;
use derive_more::{Deref, Into};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// importance weight per material property. every weight is a finite value in [0.0, 1.0] and the
// set is never empty
#[derive(Clone, Debug, PartialEq, Deref, Into, Serialize, Deserialize)]
#[serde(try_from = "IndexMap<String, f64>", into = "IndexMap<String, f64>")]
pub struct WeightSet(IndexMap<String, f64>);

impl WeightSet {
    pub fn total(&self) -> f64 {
        self.values().sum()
    }
}

impl TryFrom<IndexMap<String, f64>> for WeightSet {
    type Error = FormulaError;

    fn try_from(value: IndexMap<String, f64>) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(FormulaError::EmptyWeights);
        }

        if let Some((property, &weight)) = value
            .iter()
            .find(|(_, weight)| !(0.0..=1.0).contains(*weight))
        {
            return Err(FormulaError::InvalidWeight {
                property: property.clone(),
                value: weight,
            });
        }

        Ok(WeightSet(value))
    }
}

impl<K: Into<String>> TryFrom<Vec<(K, f64)>> for WeightSet {
    type Error = FormulaError;

    fn try_from(value: Vec<(K, f64)>) -> Result<Self, Self::Error> {
        value
            .into_iter()
            .map(|(property, weight)| (property.into(), weight))
            .collect::<IndexMap<_, _>>()
            .try_into()
    }
}
