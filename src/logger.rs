//! Logger setup shared by the report binary and tests

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

/// Guards the one-time logger installation
static INIT: Once = Once::new();

/// Installs an `env_logger` backend once; `RUST_LOG` overrides the defaults
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("chaintable", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by the host.
        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use log::{debug, info};

    use super::*;

    #[test]
    fn test_initialize_twice() {
        initialize_logger();
        initialize_logger();
        debug!("debug message in test");
        info!("info message in test");
    }
}
