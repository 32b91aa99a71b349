use std::env;
use std::io;

use tracing_subscriber;
use tracing_subscriber::fmt::time::UtcTime;

const DEFAULT_TIME_PATTERN: &str =
    "[year]-[month]-[day]T[hour repr:24]:[minute]:[second]::[subsecond digits:4]";

pub const DEFAULT_PORT: u16 = 3000;

/// Installs the global JSON log collector. RUST_LOG controls the filter.
pub fn init_tracing() {
    let time_format = time::format_description::parse(DEFAULT_TIME_PATTERN).unwrap();

    tracing_subscriber::fmt()
        .json()
        .with_target(false)
        .flatten_event(true)
        .with_thread_ids(true)
        .with_timer(UtcTime::new(time_format))
        .with_writer(io::stdout)
        .init();
}

/// Port 3000 unless DRIFTFORCE_SERVER_PORT overrides it.
pub fn server_port() -> u16 {
    env::var("DRIFTFORCE_SERVER_PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_when_env_unset() {
        env::remove_var("DRIFTFORCE_SERVER_PORT");
        assert_eq!(server_port(), DEFAULT_PORT);
    }
}
