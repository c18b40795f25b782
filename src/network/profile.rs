use serde::Serialize;

use super::SimError;

/// A fixed malware behavior preset, selected by key at run start.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MalwareProfile {
    /// Seconds of real-time pacing before each spread attempt.
    pub speed: f64,
    /// Chance in [0, 1] that a spread attempt infects a new node.
    pub infectivity: f64,
    pub label: &'static str,
}

const VIRUS: MalwareProfile = MalwareProfile {
    speed: 1.5,
    infectivity: 0.6,
    label: "VIRUS",
};

const WORM: MalwareProfile = MalwareProfile {
    speed: 0.5,
    infectivity: 0.9,
    label: "WORM",
};

const TROJAN: MalwareProfile = MalwareProfile {
    speed: 2.0,
    infectivity: 0.4,
    label: "TROJAN",
};

impl MalwareProfile {
    /// Resolve a preset by key.
    pub fn lookup(kind: &str) -> Result<Self, SimError> {
        match kind {
            "virus" => Ok(VIRUS),
            "worm" => Ok(WORM),
            "trojan" => Ok(TROJAN),
            other => Err(SimError::UnknownConfiguration(other.to_string())),
        }
    }
}
