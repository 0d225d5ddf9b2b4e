use chrono::format::{Item, StrftimeItems};
use shared_types::{AppConfig, FormConfig};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding [`CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "ET_CONFIG_PATH";

/// Read and parse a config file. A missing or unparseable file yields the
/// defaults, and an unrenderable display date format the default forms
/// section.
pub fn load_config_from(path: &Path) -> AppConfig {
    let mut config = read_config(path);
    if !is_valid_date_format(&config.forms.display_date_format) {
        tracing::warn!(
            format = %config.forms.display_date_format,
            "invalid display date format, using default"
        );
        config.forms = FormConfig::default();
    }
    config
}

/// True when every specifier in `format` is one chrono can render.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn read_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "failed to parse config, using defaults"
            );
            AppConfig::default()
        }),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "config file not readable, using defaults"
            );
            AppConfig::default()
        }
    }
}

/// Load `.env`, resolve the config path and store the parsed config in the
/// global `OnceLock`. Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        let mut config = load_config_from(Path::new(&path));
        if let Ok(key) = std::env::var("DOCUMENT_ACCESS_KEY") {
            config.documents.access_key = key;
        }
        tracing::debug!(
            template_prefix = %config.documents.template_prefix,
            output_format = %config.documents.output_format,
            "configuration loaded"
        );
        config
    })
}

/// The loaded configuration, loading it on first use.
pub fn app_config() -> &'static AppConfig {
    load_config()
}
