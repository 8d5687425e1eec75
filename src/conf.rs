use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub service_name: String,
    pub listen_port: String,
    pub database_url: String,
    pub database_pool_max_connections: u32,
    pub ai_endpoint: String,
    pub ai_provider: String,
    pub ai_model: String,
    pub ai_key: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        let mut s: Settings = conf.try_deserialize()?;
        s.apply_provider_defaults();
        Ok(s)
    }

    fn apply_provider_defaults(&mut self) {
        match self.ai_provider.as_str() {
            "ollama" => {
                self.ai_key = "ollama".into();
                self.ai_endpoint = "http://localhost:11434/v1".into();
                if self.ai_model.is_empty() {
                    self.ai_model = "gemma3:12b".into();
                }
            }
            "openai" => {
                self.ai_endpoint = "https://api.openai.com/v1".into();
                if self.ai_model.is_empty() {
                    self.ai_model = "gpt-3.5-turbo".into();
                }
            }
            "gemini" => {
                self.ai_endpoint =
                    "https://generativelanguage.googleapis.com/v1beta/openai".into();
                if self.ai_model.is_empty() {
                    self.ai_model = "gemini-2.5-flash".into();
                }
            }
            _ => {}
        }
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
