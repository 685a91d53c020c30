use anyhow::Result;
use clap::Parser;
use serde::Deserialize;
use serde_yaml;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::ErrorDetail;

#[derive(Parser, Debug)]
#[command(name = "notion-bookshelf")]
#[command(about = "Relays book entries to a Notion database", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".notion-bookshelf")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default = "default_port")]
    port: u16,
}

fn default_port() -> u16 {
    3000
}

impl Default for App {
    fn default() -> Self {
        App { port: default_port() }
    }
}

impl App {
    pub fn get_port(&self) -> u16 {
        return self.port;
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Notion {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub properties: Properties,
}

fn default_api_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_version() -> String {
    "2022-06-28".to_string()
}

impl Default for Notion {
    fn default() -> Self {
        Notion {
            api_url: default_api_url(),
            version: default_version(),
            properties: Properties::default(),
        }
    }
}

/// Names of the database properties a book is written into, plus the
/// constant labels used for the category and reading status.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Properties {
    pub title: String,
    pub author: String,
    pub category: String,
    pub category_value: String,
    pub started: String,
    pub status: String,
    pub status_value: String,
    pub cover: String,
    pub cover_name: String,
}

impl Default for Properties {
    fn default() -> Self {
        Properties {
            title: "책".to_string(),
            author: "창작자".to_string(),
            category: "구분".to_string(),
            category_value: "책".to_string(),
            started: "시작일".to_string(),
            status: "현황".to_string(),
            status_value: "감상 중".to_string(),
            cover: "이미지".to_string(),
            cover_name: "cover".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Errors {
    #[serde(default)]
    pub detail: ErrorDetail,
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub notion: Notion,
    #[serde(default)]
    pub errors: Errors,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let cfg = Config::load_config(path)?;
        Ok(cfg)
    }

    pub fn from_yaml(yaml_str: &str) -> Result<Self> {
        let yaml_with_env = Config::substitute_env_vars(yaml_str)?;
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        Ok(config)
    }

    fn load_config(path: &str) -> Result<Config> {
        let yaml_str = fs::read_to_string(path)?;
        Config::from_yaml(&yaml_str)
    }

    fn substitute_env_vars(yaml_str: &str) -> Result<String> {
        let mut result = yaml_str.to_string();
        let mut offset = 0;

        while let Some(start) = result[offset..].find("${") {
            let actual_start = offset + start;
            if let Some(end) = result[actual_start..].find("}") {
                let var_name = &result[actual_start + 2..actual_start + end];

                // ${VAR:-default}
                let env_value = if let Some(default_start) = var_name.find(":-") {
                    let actual_var = &var_name[..default_start];
                    let default_val = &var_name[default_start + 2..];
                    env::var(actual_var).unwrap_or_else(|_| default_val.to_string())
                } else {
                    env::var(var_name).unwrap_or_else(|_| {
                        tracing::warn!(var = %var_name, "environment variable not found");
                        String::new()
                    })
                };

                result.replace_range(actual_start..actual_start + end + 1, &env_value);
                offset = actual_start + env_value.len();
            } else {
                break;
            }
        }

        Ok(result)
    }
}
