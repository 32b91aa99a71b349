use rand::Rng;

use crate::api::schema::{DriftRecord, Impact, MetricsSnapshot, Parameter, Severity};

/// Fixed service-name table the generator draws from.
pub const SERVICES: [&str; 5] = [
    "k8s-prod-cluster",
    "prod-db-cluster-primary",
    "cache-redis-01",
    "api-gateway-sg-primary",
    "queue-kafka-prod",
];

pub const SEVERITIES: [Severity; 2] = [Severity::Critical, Severity::Warning];

/// The one non-random metrics field.
pub const RESOURCES_UNDER_WATCH: u32 = 96311;

fn pick<T: Copy, R: Rng>(rng: &mut R, table: &[T]) -> T {
    table[rng.gen_range(0..table.len())]
}

/// Formats an integer number of tenths as a string with one fractional
/// digit. Keeps the range bounds exact, which `format!("{:.1}", f64)`
/// would not (a float just below the upper bound can round past it).
fn tenths<R: Rng>(rng: &mut R, low: u32, high: u32) -> String {
    let n = rng.gen_range(low..=high);
    format!("{}.{}", n / 10, n % 10)
}

/// Generates one fabricated drift record. All fields are independent
/// draws; in particular the parameter embedded in `name` is drawn
/// separately from the `parameter` field.
pub fn generate_drift<R: Rng>(rng: &mut R) -> DriftRecord {
    DriftRecord {
        name: format!(
            "{} Configuration Drift",
            pick(rng, &Parameter::ALL).as_str().to_uppercase()
        ),
        severity: pick(rng, &SEVERITIES),
        description: format!(
            "Resource configuration has deviated from baseline by {}%",
            rng.gen_range(10..=59)
        ),
        service: pick(rng, &SERVICES).to_string(),
        first_seen: format!("{}h {}m ago", rng.gen_range(0..24), rng.gen_range(0..60)),
        impact: if rng.gen_bool(0.5) {
            Impact::High
        } else {
            Impact::Medium
        },
        affected: format!("{} instances", rng.gen_range(1..=20)),
        parameter: pick(rng, &Parameter::ALL),
        current_value: format!("{}m", rng.gen_range(1000..=4999)),
    }
}

/// Generates the payload for `GET /api/drifts`: 3 to 7 records, fresh
/// randomness on every call, nothing cached or reused.
pub fn generate_drifts<R: Rng>(rng: &mut R) -> Vec<DriftRecord> {
    let count = rng.gen_range(3..=7);
    (0..count).map(|_| generate_drift(rng)).collect()
}

/// Generates the payload for `GET /api/metrics`.
pub fn generate_metrics<R: Rng>(rng: &mut R) -> MetricsSnapshot {
    MetricsSnapshot {
        scan_rate: rng.gen_range(40_000..=89_999),
        detection_latency: tenths(rng, 200, 699),
        resources: RESOURCES_UNDER_WATCH,
        configs_per_sec: rng.gen_range(1_000..=2_999),
        anomaly_score: tenths(rng, 10, 59),
        prevented_loss: rng.gen_range(500_000..=999_999),
        accuracy: tenths(rng, 950, 999),
    }
}
