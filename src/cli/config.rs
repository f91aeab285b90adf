use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-confirm",
    version,
    about = "Form change-confirmation widget driver"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// String source: builtin, pack, or http
    #[arg(long, global = true)]
    pub strings: Option<String>,

    /// Path to a YAML string pack (implies --strings pack)
    #[arg(long, global = true)]
    pub string_pack: Option<String>,

    /// Endpoint of a remote language service (implies --strings http)
    #[arg(long, global = true)]
    pub strings_endpoint: Option<String>,

    /// Path to config file (default: form-confirm.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the labels of changed fields for a form in a page snapshot
    Check {
        /// Path to a page snapshot JSON file
        #[arg(long)]
        snapshot: String,

        /// Form id within the snapshot
        #[arg(long)]
        form: String,
    },

    /// Run the full interception flow against a snapshot
    Flow {
        /// Path to a page snapshot JSON file
        #[arg(long)]
        snapshot: String,

        /// Form id within the snapshot
        #[arg(long)]
        form: String,

        /// Simulate the user confirming the dialog
        #[arg(long)]
        confirm: bool,

        /// Write a JSONL flow trace to this path
        #[arg(long)]
        trace: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-confirm.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub strings: StringsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringsConfig {
    #[serde(default = "default_builtin")]
    pub source: String,

    pub pack: Option<String>,

    pub endpoint: Option<String>,

    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            source: "builtin".to_string(),
            pack: None,
            endpoint: None,
            language: "en".to_string(),
        }
    }
}

// Serde default helpers
fn default_builtin() -> String {
    "builtin".to_string()
}
fn default_language() -> String {
    "en".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-confirm.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
