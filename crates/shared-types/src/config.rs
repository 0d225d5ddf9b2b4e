use serde::{Deserialize, Serialize};

/// Settings for requests sent to the document generation service.
///
/// Every field has a default so that a missing or partial `config.toml`
/// still produces valid requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentConfig {
    /// Prefix prepended to a template id to form the template file name.
    pub template_prefix: String,
    /// Extension of the generated document, without the dot.
    pub output_format: String,
    /// Base name of the generated document.
    pub output_file_prefix: String,
    /// Access key forwarded to the document service. Usually set from the
    /// environment rather than the file.
    pub access_key: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            template_prefix: "EM-TRB-EGW-ENG-".to_string(),
            output_format: "pdf".to_string(),
            output_file_prefix: "document".to_string(),
            access_key: String::new(),
        }
    }
}

/// Settings for text rendered into forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    /// `chrono` format string used for dates shown to users.
    pub display_date_format: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            display_date_format: "%-d %b %Y".to_string(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub documents: DocumentConfig,
    #[serde(default)]
    pub forms: FormConfig,
}
