//! Boundary with the external scenario interpreter.
//!
//! An interpreter turns a free-text description into launch parameters plus a
//! written derivation. The language model behind it lives outside this crate;
//! here we define the contract, the reply format, and the checks every reply
//! goes through before it can reach the integrator.

use serde::Deserialize;
use thiserror::Error;

use crate::dynamics::state::STANDARD_GRAVITY;
use crate::error::ParameterError;
use crate::scenario::ParameterSet;

/// Errors surfaced to the caller when interpretation fails. Never retried here.
#[derive(Debug, Error)]
pub enum InterpretError {
    #[error("scenario prompt is empty")]
    EmptyPrompt,
    #[error("interpreter backend failed: {0}")]
    Backend(String),
    #[error("interpreter reply is not valid scenario JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("interpreter returned unusable parameters: {0}")]
    Invalid(#[from] ParameterError),
}

// ---------------------------------------------------------------------------
// Reply format
// ---------------------------------------------------------------------------

/// Parameters as the interpreter emits them. Anything but speed and angle may
/// be missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParameters {
    pub velocity: f64,
    pub angle: f64,
    #[serde(default)]
    pub gravity: Option<f64>,
    #[serde(default)]
    pub mass: Option<f64>,
    #[serde(default)]
    pub initial_height: Option<f64>,
    #[serde(default)]
    pub air_resistance: Option<bool>,
    #[serde(default)]
    pub label: Option<String>,
}

impl RawParameters {
    /// Fill the defaults (Earth gravity, 1 kg, ground level, no drag) and
    /// validate like direct input.
    pub fn into_parameter_set(self) -> Result<ParameterSet, ParameterError> {
        let params = ParameterSet {
            velocity: self.velocity,
            angle: self.angle,
            gravity: self.gravity.unwrap_or(STANDARD_GRAVITY),
            mass: self.mass.unwrap_or(1.0),
            initial_height: self.initial_height.unwrap_or(0.0),
            air_resistance: self.air_resistance.unwrap_or(false),
        };
        params.validate()?;
        Ok(params)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Reply {
    parameters: RawParameters,
    #[serde(default)]
    derivation_summary: String,
}

/// A validated interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub parameters: ParameterSet,
    pub derivation: String,
    pub label: Option<String>,
}

impl Interpretation {
    /// Keep the caller's drag toggle instead of whatever the reply said.
    pub fn with_air_resistance(mut self, enabled: bool) -> Self {
        self.parameters.air_resistance = enabled;
        self
    }
}

/// Parse and check one interpreter reply.
pub fn parse_response(text: &str) -> Result<Interpretation, InterpretError> {
    let reply: Reply = serde_json::from_str(text.trim())?;
    let label = reply.parameters.label.clone();
    let parameters = reply.parameters.into_parameter_set()?;
    Ok(Interpretation {
        parameters,
        derivation: reply.derivation_summary,
        label,
    })
}

// ---------------------------------------------------------------------------
// Interpreter trait
// ---------------------------------------------------------------------------

/// Converts a free-text scenario into launch parameters.
pub trait ScenarioInterpreter {
    fn interpret(&self, prompt: &str) -> Result<Interpretation, InterpretError>;
}

/// Any backend that returns the raw reply text is an interpreter.
impl<F> ScenarioInterpreter for F
where
    F: Fn(&str) -> Result<String, String>,
{
    fn interpret(&self, prompt: &str) -> Result<Interpretation, InterpretError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(InterpretError::EmptyPrompt);
        }
        let reply = self(prompt).map_err(InterpretError::Backend)?;
        parse_response(&reply)
    }
}
