use std::collections::HashMap;

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.gathercontent.com";
pub const DEFAULT_ITEM_NAME: &str = "Test Item";

/// Settings the client needs at call time.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub project_id: Option<u64>,
    pub master_template_id: Option<u64>,
    pub default_item_name: String,
    pub templates: HashMap<String, u64>,
    pub groups: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            project_id: None,
            master_template_id: None,
            default_item_name: DEFAULT_ITEM_NAME.to_string(),
            templates: HashMap::new(),
            groups: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Looks up a named template id, ignoring case. `master` falls back to
    /// `master_template_id`.
    pub fn template(&self, name: &str) -> Option<u64> {
        match lookup(&self.templates, name) {
            Some(id) => Some(*id),
            None if name.eq_ignore_ascii_case("master") => self.master_template_id,
            None => None,
        }
    }

    pub fn group(&self, name: &str) -> Option<&str> {
        lookup(&self.groups, name).map(String::as_str)
    }
}

fn lookup<'a, V>(map: &'a HashMap<String, V>, name: &str) -> Option<&'a V> {
    map.get(name).or_else(|| {
        map.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    pub email: String,
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    pub project_id: Option<u64>,

    #[serde(default = "default_item_name")]
    pub item_name: String,

    pub master_template_id: Option<u64>,

    pub item_template: Option<String>,
    pub item_group: Option<String>,

    #[serde(skip)]
    pub templates: HashMap<String, u64>,

    #[serde(skip)]
    pub groups: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_item_name() -> String {
    DEFAULT_ITEM_NAME.to_string()
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Reads the same variables as [`Config::load`] from an explicit list.
    /// `TEMPLATE_<NAME>` and `GROUP_<NAME>` entries fill the named maps.
    pub fn from_vars<I>(vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();

        let mut config = envy::from_iter::<_, Self>(vars.clone())
            .map_err(|e| anyhow!("Invalid or missing environmental variable: {}", e))?;

        config.templates = envy::prefixed("TEMPLATE_")
            .from_iter(vars.clone())
            .map_err(|e| anyhow!("Invalid template id: {}", e))?;

        config.groups = envy::prefixed("GROUP_")
            .from_iter(vars)
            .map_err(|e| anyhow!("Invalid group name: {}", e))?;

        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            project_id: self.project_id,
            master_template_id: self.master_template_id,
            default_item_name: self.item_name.clone(),
            templates: self.templates.clone(),
            groups: self.groups.clone(),
        }
    }
}
