use crate::{
    composer::compose,
    error::FormulaError,
    llm::{Cached, Completion, LlmConfig, OpenAi},
    prompt::Prompt,
    properties::Preferences,
    report::Report,
};
use jiff::Timestamp;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    pub report: PathBuf,
    pub csv: PathBuf,
    pub chart: PathBuf,
    #[serde(default)]
    pub summary: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FormulatorConfig {
    pub preferences: Preferences,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub llm: Option<LlmConfig>,
    pub output: OutputConfig,
}

impl TryFrom<&FormulatorConfig> for Formulator {
    type Error = FormulaError;

    fn try_from(value: &FormulatorConfig) -> Result<Self, Self::Error> {
        let rng = match value.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let completion = match &value.llm {
            Some(llm) => {
                let client = OpenAi::from_env(llm.clone())?;
                log::info!("Using model {} at {}", llm.model, llm.base_url);
                Some(Box::new(Cached::new(client)) as Box<dyn Completion>)
            }
            None => {
                log::info!("No model configured, skipping explanations");
                None
            }
        };

        Ok(Self::new(rng, completion))
    }
}

// long-lived service: owns the random source and the model client. each call to `formulate`
// handles one request
pub struct Formulator {
    rng: StdRng,
    completion: Option<Box<dyn Completion>>,
}

impl Formulator {
    pub fn new(rng: StdRng, completion: Option<Box<dyn Completion>>) -> Self {
        Self { rng, completion }
    }

    pub fn formulate(&mut self, preferences: &Preferences) -> Report {
        let weights = preferences.weights();
        let composition = compose(&weights, &mut self.rng);
        log::debug!("Composed {} materials from weights {:?}", composition.len(), *weights);

        let explanation = self.completion.as_ref().map(|completion| {
            let prompt = Prompt::new(preferences, &composition);
            match completion.complete(&prompt) {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("Failed to generate explanation: {}", e);
                    format!("An error occurred: {}", e)
                }
            }
        });

        Report {
            generated_at: Timestamp::now(),
            properties: preferences.describe(),
            explanation,
            composition,
        }
    }
}
