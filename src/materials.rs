use derive_more::{Deref, Into};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

pub const MATERIALS: [&str; 5] = [
    "Carbon Fibers",
    "Epoxy Resin",
    "Glass Fiber",
    "Silicon Carbide",
    "Aluminum",
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompositionEntry {
    pub material: &'static str,
    pub raw_score: f64,
    pub percentage: f64,
}

// one entry per material in `MATERIALS` order. percentages add up to 100
#[derive(Clone, Debug, PartialEq, Deref, Into, Serialize)]
pub struct Composition(Vec<CompositionEntry>);

impl Composition {
    pub(crate) fn new(entries: Vec<CompositionEntry>) -> Self {
        Self(entries)
    }

    pub fn components(&self) -> Vec<&'static str> {
        self.iter().map(|entry| entry.material).collect()
    }

    pub fn percentages(&self) -> Vec<f64> {
        self.iter().map(|entry| entry.percentage).collect()
    }

    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Component,Weighted Score,Percentage (%)\n");
        for entry in self.iter() {
            csv.push_str(&format!(
                "{},{:.4},{:.4}\n",
                csv_field(entry.material),
                entry.raw_score,
                entry.percentage
            ));
        }
        csv
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

impl Display for Composition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let width = self
            .iter()
            .map(|entry| entry.material.len())
            .chain(std::iter::once("Component".len()))
            .max()
            .unwrap_or_default();

        writeln!(
            f,
            "{:<width$} | {:>14} | {:>14}",
            "Component", "Weighted Score", "Percentage (%)"
        )?;
        writeln!(f, "{}-+-{}-+-{}", "-".repeat(width), "-".repeat(14), "-".repeat(14))?;
        for entry in self.iter() {
            writeln!(
                f,
                "{:<width$} | {:>14.4} | {:>14.1}",
                entry.material, entry.raw_score, entry.percentage
            )?;
        }

        Ok(())
    }
}
