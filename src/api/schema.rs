use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Warning,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Impact {
    High,
    Medium,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Parameter {
    Cpu,
    Memory,
    Replicas,
    Version,
    Env,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::Cpu,
        Parameter::Memory,
        Parameter::Replicas,
        Parameter::Version,
        Parameter::Env,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Cpu => "cpu",
            Parameter::Memory => "memory",
            Parameter::Replicas => "replicas",
            Parameter::Version => "version",
            Parameter::Env => "env",
        }
    }
}

/// A single fabricated drift record. Built fresh for every response and
/// discarded after serialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriftRecord {
    pub name: String,
    pub severity: Severity,
    pub description: String,
    pub service: String,
    pub first_seen: String,
    pub impact: Impact,
    pub affected: String,
    pub parameter: Parameter,
    pub current_value: String,
}

/// Fabricated dashboard counters. `detection_latency`, `anomaly_score` and
/// `accuracy` go over the wire as strings with one fractional digit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub scan_rate: u32,
    pub detection_latency: String,
    pub resources: u32,
    pub configs_per_sec: u32,
    pub anomaly_score: String,
    pub prevented_loss: u32,
    pub accuracy: String,
}
