use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Upstream credential; requests fail with a configuration error when unset
    #[serde(default)]
    pub mapbox_access_token: Option<String>,

    #[serde(default = "default_mapbox_api_url")]
    pub mapbox_api_url: String,

    // Unset means no client-side timeout on upstream calls
    #[serde(default)]
    pub upstream_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    /// The access token, treating an empty value as absent.
    pub fn access_token(&self) -> Option<&str> {
        self.mapbox_access_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            mapbox_access_token: None, // Must be provided via environment
            mapbox_api_url: default_mapbox_api_url(),
            upstream_timeout_secs: None,
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_mapbox_api_url() -> String {
    "https://api.mapbox.com".to_string()
}
