use crate::{materials::Composition, properties::Preferences};
use serde::Serialize;

pub const SYSTEM_MESSAGE: &str =
    "You are a material scientist specializing in advanced material formulas and sustainability.";

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    // the composition is part of the request so the model explains the same mix that gets
    // charted and exported
    pub fn new(preferences: &Preferences, composition: &Composition) -> Self {
        let mut user = format!(
            "Propose a material formula with the following properties: {}\n\n\
             Use this composition by weight:\n",
            preferences.describe()
        );
        for entry in composition.iter() {
            user.push_str(&format!("- {}: {:.1}%\n", entry.material, entry.percentage));
        }
        user.push_str(
            "\nExplain how this composition achieves the requested properties \
             and what trade-offs it makes.",
        );

        Self {
            system: SYSTEM_MESSAGE.to_string(),
            user,
        }
    }
}
