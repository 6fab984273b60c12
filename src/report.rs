use crate::materials::Composition;
use jiff::Timestamp;
use serde::Serialize;

pub const NO_EXPLANATION: &str = "(no explanation requested)";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: Timestamp,
    pub properties: String,
    pub explanation: Option<String>,
    pub composition: Composition,
}

impl Report {
    pub fn summary(&self) -> String {
        format!(
            "Desired Properties:\n{}\n\nProposed Material Formula:\n{}\n\nComposition:\n{}",
            self.properties,
            self.explanation.as_deref().unwrap_or(NO_EXPLANATION),
            self.composition
        )
    }
}
