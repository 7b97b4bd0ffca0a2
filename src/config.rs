use crate::upstream::{LlmConfig, DEFAULT_API_BASE};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub bind_port: u16,

    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub api_base: String,
    pub api_key_env: String,
    pub model: String,
    pub max_tokens: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            bind_port: 3000,
            llm: LlmSettings::default(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: None,
        }
    }
}

impl LlmSettings {
    /// Resolves the API key from the environment; an unset variable leaves the client unconfigured.
    pub fn to_llm_config(&self) -> LlmConfig {
        let api_key = std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        LlmConfig {
            api_key,
            api_base: self.api_base.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
        }
    }
}

impl ServerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Applies `PORT` from the environment over the configured port.
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(port) = std::env::var("PORT") {
            self.bind_port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT {:?}: {}", port, e))?;
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.bind_port)
    }
}
