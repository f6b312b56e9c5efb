//! Configuration of the gmcli client.
//!
//! The configuration is read once at startup from a YAML file, then overridden
//! by `GMCLI_` prefixed environment variables. Every key is optional: unset or
//! empty values fall back to built-in defaults.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Path to a file whose first line is the GroupMe access token
//! api-key: "/home/me/.gmcli.key"
//! # Avatar used by /botsay bots
//! bot-avatar: "https://i.groupme.com/123x123.png"
//! # Prompt shown before each command
//! prompt: "~>"
//! # Printed once at startup
//! greeting: "hello"
//! # Seconds between two /spam or /dmspam sends
//! spam-delay: 2
//! # Seconds between removal and re-add in /readd
//! readd-delay: 3
//! # When true, /spam <id> <n> sends n-1 messages
//! legacy-repeat-count: true
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export GMCLI_API_KEY="/run/secrets/groupme.key"
//! export GMCLI_SPAM_DELAY=5
//! ```

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, anyhow, bail};
use directories::BaseDirs;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use log::debug;
use serde::Deserialize;

const DEFAULT_PROMPT: &str = "~>";
const DEFAULT_API_URL: &str = "https://api.groupme.com/v3";
const DEFAULT_SMILEY_URL: &str = "http://dominick.p.elu.so/fun/kaomoji/get.php";
const DEFAULT_SPAM_DELAY_SECS: u64 = 2;
const DEFAULT_READD_DELAY_SECS: u64 = 3;
/// Credential file used when no `api-key` is configured, relative to the home directory.
const DEFAULT_KEY_FILE: &str = ".groupy.key";

/// Raw view of the configuration sources, before defaults are applied.
#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "kebab-case", default)]
struct ConfigFile {
    api_key: Option<String>,
    bot_avatar: Option<String>,
    prompt: Option<String>,
    greeting: Option<String>,
    api_url: Option<String>,
    smiley_url: Option<String>,
    spam_delay: Option<u64>,
    readd_delay: Option<u64>,
    legacy_repeat_count: Option<bool>,
}

/// Immutable client configuration.
///
/// Built once by [`Config::load`] and handed to the components needing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path to the credential file, overriding `~/.groupy.key`
    pub api_key: Option<PathBuf>,
    /// Avatar url of transient bots
    pub bot_avatar: String,
    /// Prompt displayed before each command
    pub prompt: String,
    /// Message printed at startup
    pub greeting: String,
    /// Base url of the GroupMe API
    pub api_url: String,
    /// Endpoint returning a random smiley
    pub smiley_url: String,
    /// Pause after each repeated send
    pub spam_delay: Duration,
    /// Pause between member removal and re-add
    pub readd_delay: Duration,
    /// Whether repeated sends keep the historical `n - 1` count
    pub legacy_repeat_count: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::from(ConfigFile::default())
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        // Empty strings count as unset
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Config {
            api_key: non_empty(file.api_key).map(PathBuf::from),
            bot_avatar: non_empty(file.bot_avatar).unwrap_or_default(),
            prompt: non_empty(file.prompt).unwrap_or_else(|| DEFAULT_PROMPT.to_owned()),
            greeting: non_empty(file.greeting).unwrap_or_else(default_greeting),
            api_url: non_empty(file.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            smiley_url: non_empty(file.smiley_url)
                .unwrap_or_else(|| DEFAULT_SMILEY_URL.to_owned()),
            spam_delay: Duration::from_secs(file.spam_delay.unwrap_or(DEFAULT_SPAM_DELAY_SECS)),
            readd_delay: Duration::from_secs(
                file.readd_delay.unwrap_or(DEFAULT_READD_DELAY_SECS),
            ),
            legacy_repeat_count: file.legacy_repeat_count.unwrap_or(true),
        }
    }
}

fn default_greeting() -> String {
    format!(
        "gmcli version {} -- type /help for help",
        env!("CARGO_PKG_VERSION")
    )
}

impl Config {
    /// Loads the configuration from a YAML file and `GMCLI_` environment variables.
    ///
    /// A missing file is not an error: defaults and environment are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is not valid YAML or a value has the wrong type.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        let file: ConfigFile = Figment::new()
            .merge(Yaml::file(path))
            .merge(
                Env::prefixed("GMCLI_")
                    .map(|key| key.as_str().to_ascii_lowercase().replace('_', "-").into()),
            )
            .extract()?;

        debug!("loaded config sources {:?}", file);

        Ok(Config::from(file))
    }

    /// Resolves the GroupMe access token.
    ///
    /// The token is the first line, trimmed, of the configured `api-key` file,
    /// or of `~/.groupy.key` when none is configured.
    ///
    /// # Errors
    ///
    /// Fails when no credential file is available or the token is empty.
    pub fn resolve_api_key(&self) -> anyhow::Result<String> {
        let default_path = BaseDirs::new().map(|dirs| dirs.home_dir().join(DEFAULT_KEY_FILE));
        self.resolve_api_key_from(default_path)
    }

    fn resolve_api_key_from(&self, default_path: Option<PathBuf>) -> anyhow::Result<String> {
        let path = match (&self.api_key, default_path) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) if path.is_file() => path,
            _ => bail!("No API key set"),
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Unable to read API key file {}", path.display()))?;
        let key = content.lines().next().unwrap_or_default().trim();
        if key.is_empty() {
            return Err(anyhow!("No API key set, {} is empty", path.display()));
        }

        Ok(key.to_owned())
    }
}
