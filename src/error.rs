use std::fmt;

// errors raised while building a formula request or talking to the model provider
#[derive(Debug)]
pub enum FormulaError {
    // weight outside [0.0, 1.0] or not a finite number
    InvalidWeight { property: String, value: f64 },
    // weight set with no properties in it
    EmptyWeights,
    // missing or rejected credentials
    Auth(String),
    // transport-level http failures
    Http(String),
    // errors returned by the provider, or an unusable response
    Provider(String),
    // json serialization/deserialization errors
    Json(String),
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::InvalidWeight { property, value } => write!(
                f,
                "Invalid weight for {}: {} (expected a value in [0.0, 1.0])",
                property, value
            ),
            FormulaError::EmptyWeights => write!(f, "Weight set must contain at least one property"),
            FormulaError::Auth(e) => write!(f, "Auth Error: {}", e),
            FormulaError::Http(e) => write!(f, "HTTP Error: {}", e),
            FormulaError::Provider(e) => write!(f, "Provider Error: {}", e),
            FormulaError::Json(e) => write!(f, "JSON Parse Error: {}", e),
        }
    }
}

impl std::error::Error for FormulaError {}

impl From<reqwest::Error> for FormulaError {
    fn from(err: reqwest::Error) -> Self {
        FormulaError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for FormulaError {
    fn from(err: serde_json::Error) -> Self {
        FormulaError::Json(err.to_string())
    }
}
