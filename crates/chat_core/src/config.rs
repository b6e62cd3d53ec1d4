use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_menu_path")]
    pub menu_path: PathBuf,
    #[serde(default = "default_system_prompt_path")]
    pub system_prompt_path: PathBuf,
    #[serde(default = "default_llm_config_path")]
    pub llm_config_path: PathBuf,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    #[serde(default = "default_environment")]
    pub environment: String,
}

const CONFIG_FILE_PATH: &str = "config.toml";

fn default_port() -> u16 {
    8080
}

fn default_menu_path() -> PathBuf {
    PathBuf::from("data/menu.json")
}

fn default_system_prompt_path() -> PathBuf {
    PathBuf::from("llm/system_prompt.txt")
}

fn default_llm_config_path() -> PathBuf {
    PathBuf::from("llm/config.yaml")
}

fn default_allowed_origins() -> Vec<String> {
    // Vite dev servers walk up from 5173 when the port is taken
    (5173..=5181)
        .map(|port| format!("http://localhost:{port}"))
        .collect()
}

fn default_environment() -> String {
    "development".to_string()
}

fn split_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            menu_path: default_menu_path(),
            system_prompt_path: default_system_prompt_path(),
            llm_config_path: default_llm_config_path(),
            allowed_origins: default_allowed_origins(),
            environment: default_environment(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();

        if std::path::Path::new(CONFIG_FILE_PATH).exists() {
            if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_PATH) {
                match toml::from_str::<Config>(&content) {
                    Ok(file_config) => config = file_config,
                    Err(err) => log::warn!("Ignoring invalid {CONFIG_FILE_PATH}: {err}"),
                }
            }
        }

        // Override with environment variables if they exist
        if let Some(port) = std::env::var("APP_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
        {
            config.port = port;
        }
        if let Ok(menu_path) = std::env::var("MENU_PATH") {
            config.menu_path = PathBuf::from(menu_path);
        }
        if let Ok(prompt_path) = std::env::var("SYSTEM_PROMPT_PATH") {
            config.system_prompt_path = PathBuf::from(prompt_path);
        }
        if let Ok(llm_path) = std::env::var("LLM_CONFIG_PATH") {
            config.llm_config_path = PathBuf::from(llm_path);
        }
        if let Ok(origins) = std::env::var("ALLOWED_ORIGINS") {
            config.allowed_origins = split_origins(&origins);
        }
        if let Ok(environment) = std::env::var("ENVIRONMENT") {
            config.environment = environment;
        }
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
