use serde::{Deserialize, Serialize};

pub const DEFAULT_SITE_URL: &str = "https://isitonaitronzdatabase.vercel.app";
pub const DEFAULT_IMAGE_HOSTS: &[&str] = &[
    "cdn.akamai.steamstatic.com",
    "shared.akamai.steamstatic.com",
    "shared.cloudflare.steamstatic.com",
    "cdn.cloudflare.steamstatic.com",
    "steamcdn-a.akamaihd.net",
];

/// Settings shared by the server and the rendered shell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// public origin, without a trailing slash
    pub site_url: String,
    pub allowed_image_hosts: Vec<String>,
    pub steam_lookup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            allowed_image_hosts: DEFAULT_IMAGE_HOSTS.iter().map(|h| h.to_string()).collect(),
            steam_lookup: true,
        }
    }
}

impl Config {
    pub fn is_image_host_allowed(&self, host: &str) -> bool {
        self.allowed_image_hosts
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(host))
    }
}

#[cfg(feature = "ssr")]
impl Config {
    /// Reads `SITE_URL`, `ALLOWED_IMAGE_HOSTS` (comma separated) and `STEAM_LOOKUP`,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let site_url = lookup("SITE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(default.site_url);
        let allowed_image_hosts = lookup("ALLOWED_IMAGE_HOSTS")
            .map(|hosts| {
                hosts
                    .split(',')
                    .map(str::trim)
                    .filter(|h| !h.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|hosts| !hosts.is_empty())
            .unwrap_or(default.allowed_image_hosts);
        let steam_lookup = match lookup("STEAM_LOOKUP") {
            Some(value) => !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off"),
            None => default.steam_lookup,
        };

        Self {
            site_url,
            allowed_image_hosts,
            steam_lookup,
        }
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(config(&[]), Config::default());
    }

    #[test]
    fn trims_trailing_slash_from_site_url() {
        assert_eq!(config(&[("SITE_URL", "https://games.example/")]).site_url, "https://games.example");
    }

    #[test]
    fn parses_host_list_and_lookup_flag() {
        let config = config(&[("ALLOWED_IMAGE_HOSTS", " a.example, ,B.example "), ("STEAM_LOOKUP", "off")]);
        assert_eq!(config.allowed_image_hosts, vec!["a.example", "B.example"]);
        assert!(config.is_image_host_allowed("b.example"));
        assert!(!config.is_image_host_allowed("c.example"));
        assert!(!config.steam_lookup);
    }
}
