use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// User whose private storage uploads go into
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Subfolder of `root` preferred as the upload destination
    #[serde(default = "default_preferred_folder")]
    pub preferred_folder: String,
    /// Community feed settings
    #[serde(default)]
    pub community: CommunityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            user_id: default_user_id(),
            preferred_folder: default_preferred_folder(),
            community: CommunityConfig::default(),
        }
    }
}

/// Settings for the community recipe listing API
#[derive(Debug, Deserialize, Clone)]
pub struct CommunityConfig {
    /// Base URL of the recipe API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key sent in the x-api-key header
    pub api_key: Option<String>,
    /// How many recipe cards to fetch
    #[serde(default = "default_display_num")]
    pub display_num: u32,
    /// Display authors assigned to fetched cards, cycled by index
    #[serde(default = "default_authors")]
    pub authors: Vec<String>,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        CommunityConfig {
            base_url: default_base_url(),
            api_key: None,
            display_num: default_display_num(),
            authors: default_authors(),
        }
    }
}

// Default value functions
fn default_user_id() -> String {
    "user1".to_string()
}

fn default_preferred_folder() -> String {
    "Recipes".to_string()
}

fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_display_num() -> u32 {
    20
}

fn default_authors() -> Vec<String> {
    [
        "NeonViper",
        "GlitchWizard",
        "ShadowByte",
        "QuantumDrifter",
        "PixelSamurai",
        "CyberPunk_X",
        "NullPointer",
        "VelvetThunder",
        "IronWombat",
        "SolarFlare",
        "MidnightCoder",
        "EchoChamber",
        "FrostTitan",
        "DigitalGhost",
        "TurboCorgi",
        "VortexJumper",
        "SilentStorm",
        "BinaryBanshee",
        "RoguePixel",
        "ZenMaster_99",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOX__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOX__COMMUNITY__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPE_BOX__COMMUNITY__API_KEY
            .add_source(
                Environment::with_prefix("RECIPE_BOX")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
