use crate::{error::AstError, semantic::aggregate::FunctionRegistry};
use serde::{Deserialize, Serialize};

/// Settings for [`crate::semantic::validator::SemanticValidator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Functions treated as aggregates
    pub aggregate_functions: FunctionRegistry,
    /// Scalar functions the runtime provides. Empty disables the check.
    pub known_functions: Vec<String>,
    /// Accept qualifiers that name no source or join stream
    pub allow_unlisted_streams: bool,
}

impl ValidatorConfig {
    pub fn from_json(source: &str) -> Result<Self, AstError> {
        serde_json::from_str(source).map_err(AstError::Config)
    }

    pub fn is_known_function(&self, name: &str) -> bool {
        self.known_functions.is_empty()
            || self.aggregate_functions.is_aggregate(name)
            || self
                .known_functions
                .iter()
                .any(|known| known.eq_ignore_ascii_case(name))
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            aggregate_functions: FunctionRegistry::default(),
            known_functions: Vec::new(),
            allow_unlisted_streams: false,
        }
    }
}
