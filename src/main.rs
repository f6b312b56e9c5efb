//! gmcli - An interactive command-line client for GroupMe.
//!
//! This is the main entry point of gmcli. A prompt reads slash-commands and
//! turns each of them into a few calls to the GroupMe API.
//!
//! # Configuration
//!
//! Create a `config.yaml` file, every key being optional:
//!
//! ```yaml
//! api-key: "/home/me/.gmcli.key"
//! bot-avatar: "https://i.groupme.com/123x123.png"
//! prompt: "~>"
//! greeting: "hello"
//! ```
//!
//! When `api-key` is not set, the access token is read from `~/.groupy.key`.
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the `GMCLI_` prefix:
//!
//! ```bash
//! export GMCLI_API_KEY="/run/secrets/groupme.key"
//! export GMCLI_BOT_AVATAR="https://i.groupme.com/123x123.png"
//! ```
//!
//! # Usage
//!
//! ```bash
//! gmcli --config config.yaml
//! ```
//!
//! # Prompt Commands
//!
//! - `/help` - Display help information
//! - `/groups` - List available groups
//! - `/users [group_id]` - List members of a group, or every known member
//! - `/msg <group_id> <text>` - Send a message to a group
//! - `/msgall <text>` - Send a message to every group
//! - `/messages <group_id>` - Show the latest messages of a group
//! - `/like <group_id> <message_id>` - Like the newest message of a group
//! - `/botsay <bot_name> <group_id> <text>` - Send a message from a transient bot
//! - `/readd <group_id>` - Remove and re-add every member except you and the creator
//! - `/dm <user_id> <text>` - Send a direct message
//! - `/dmspam <user_id> <n> [text]` - Repeat a direct message
//! - `/spam <group_id> <n> [text]` - Repeat a group message
//!
//! # Architecture
//!
//! - [`commands`] - Command parsing, dispatch and handlers
//! - [`config`] - YAML configuration with environment variable overrides
//! - [`emoticons`] - Emoticon code expansion
//! - [`groupme`] - GroupMe API client
//! - [`prompt`] - The interactive loop
//! - [`smiley`] - Random smiley fetcher
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use clap::Parser;
use env_logger::Env;
use log::{error, info};
use tokio::io::BufReader;

use crate::{
    commands::{CommandContext, Commander},
    config::Config,
    groupme::GroupMeRequester,
    smiley::SmileyRequester,
};

mod commands;
mod config;
mod emoticons;
mod groupme;
mod prompt;
mod smiley;

/// Command-line arguments for gmcli.
///
/// # Examples
///
/// ```bash
/// gmcli --config config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// A missing file is not an error: built-in defaults and `GMCLI_`
    /// environment variables are used instead.
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

/// Main entry point for gmcli.
///
/// 1. **Logging Setup**: `info` level by default, overridable with `RUST_LOG`
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Reads the YAML file and environment overrides
/// 4. **Credential Resolution**: Exits when no access token is available
/// 5. **Prompt**: Runs the interactive loop until standard input is closed
#[tokio::main]
async fn main() {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config file: {}", e);
            return;
        }
    };
    info!("Loaded {}", &args.config);

    // Nothing works without an access token
    let token = match config.resolve_api_key() {
        Ok(token) => token,
        Err(e) => {
            error!("{:#}", e);
            return;
        }
    };

    let context = CommandContext {
        requester: GroupMeRequester::new(&config.api_url, &token),
        smileys: SmileyRequester::new(&config.smiley_url),
        config,
    };
    let commander = Commander::new(context);

    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = prompt::run(&commander, stdin, &mut std::io::stdout()).await {
        error!("Prompt stopped: {}", e);
    }
}
