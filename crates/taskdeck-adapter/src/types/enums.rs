/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Coarse server health state reported by the health endpoint.
///
/// Unknown values deserialize to `Unknown` instead of failing the poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
    #[serde(other)]
    Unknown,
}

impl HealthState {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthState::Healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_state_roundtrip() {
        let state: HealthState = serde_json::from_str("\"healthy\"").expect("healthy");
        assert_eq!(state, HealthState::Healthy);
        assert!(state.is_healthy());

        let state: HealthState = serde_json::from_str("\"unhealthy\"").expect("unhealthy");
        assert_eq!(state, HealthState::Unhealthy);
        assert!(!state.is_healthy());
    }

    #[test]
    fn test_health_state_unknown_value() {
        let state: HealthState = serde_json::from_str("\"degraded\"").expect("fallback");
        assert_eq!(state, HealthState::Unknown);
        assert!(!state.is_healthy());
    }
}
