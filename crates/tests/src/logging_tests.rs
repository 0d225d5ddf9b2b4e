use callbacks::logging::{
    init_logging, log_data_enabled, redact_value, LogConfig, LogFormat, REDACTED_VALUE,
};
use callbacks::noc::CaseConverter;
use tracing::Level;

use crate::common::sample_case;

#[test]
fn subscriber_installs_once_and_keeps_data_redacted() {
    let config = LogConfig::default()
        .with_level(Level::DEBUG)
        .with_format(LogFormat::Json)
        .with_log_data(false);
    assert!(init_logging(&config).is_ok());

    // A rejected reinstall must not switch data logging on.
    assert!(init_logging(&config.clone().with_log_data(true)).is_err());
    assert!(!log_data_enabled());

    // Conversions log through the installed subscriber.
    assert!(CaseConverter::to_map(Some(&sample_case())).is_ok());
    assert_eq!(redact_value("Test Company"), REDACTED_VALUE);
}
