//! Command-line driver for the video channel endpoints: env-file loading,
//! credentials from flags or environment, one subcommand per endpoint, and
//! the same status/content-type checks the test helpers apply.

use std::process;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use video_channels_api::{
    ExpectedResponse, VideoChannelAttributes, VideoChannelsApi, VideoChannelsClient,
    VideoChannelsError,
};

#[derive(Debug, Parser)]
#[command(name = "video-channels", version, about = "Exercise the video channel REST endpoints")]
struct Cli {
    /// Load environment variables from this file before reading config.
    #[arg(short = 'e', long, global = true)]
    env_file: Option<String>,

    /// Server root, e.g. http://localhost:9001.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Bearer token for create/update/delete.
    #[arg(short, long, global = true)]
    token: Option<String>,

    /// HTTP proxy for every request.
    #[arg(short = 'x', long, global = true)]
    proxy: Option<String>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct AttributeArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    support: Option<String>,
}

impl From<AttributeArgs> for VideoChannelAttributes {
    fn from(a: AttributeArgs) -> Self {
        VideoChannelAttributes {
            name: a.name,
            description: a.description,
            support: a.support,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every video channel.
    List {
        #[arg(long, default_value_t = 0)]
        start: u32,
        #[arg(long, default_value_t = 15)]
        count: u32,
        #[arg(long)]
        sort: Option<String>,
    },
    /// List the channels of one account.
    AccountList {
        account_id: String,
        #[arg(long)]
        expect: Option<u16>,
    },
    /// Create a channel; unset attributes use the defaults.
    Add {
        account_id: String,
        #[command(flatten)]
        attributes: AttributeArgs,
        #[arg(long)]
        expect: Option<u16>,
    },
    /// Update a channel with the given attributes only.
    Update {
        account_id: String,
        channel_id: String,
        #[command(flatten)]
        attributes: AttributeArgs,
        #[arg(long)]
        expect: Option<u16>,
    },
    Delete {
        account_id: String,
        channel_id: String,
        #[arg(long)]
        expect: Option<u16>,
    },
    /// Fetch one channel.
    Get {
        account_id: String,
        channel_id: String,
    },
}

impl Command {
    fn needs_token(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Update { .. } | Command::Delete { .. }
        )
    }
}

/// Resolved connection settings: flags first, then environment.
#[derive(Debug)]
struct Config {
    url: String,
    token: Option<String>,
    proxy: Option<String>,
}

fn env_or(flag: Option<String>, var: &str) -> Option<String> {
    flag.or_else(|| std::env::var(var).ok())
        .filter(|v| !v.is_empty())
}

fn usage_error(msg: &str) -> ! {
    error!("{msg}");
    process::exit(2);
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(
    client: &VideoChannelsClient,
    token: Option<&str>,
    command: Command,
) -> Result<ExpectedResponse, VideoChannelsError> {
    // Checked in main before we get here.
    let token = token.unwrap_or_default();

    match command {
        Command::List { start, count, sort } => {
            client
                .get_video_channels_list(start, count, sort.as_deref())
                .await
        }
        Command::AccountList { account_id, expect } => {
            client
                .get_account_video_channels_list(&account_id, expect)
                .await
        }
        Command::Add {
            account_id,
            attributes,
            expect,
        } => {
            client
                .add_video_channel(token, &account_id, &attributes.into(), expect)
                .await
        }
        Command::Update {
            account_id,
            channel_id,
            attributes,
            expect,
        } => {
            client
                .update_video_channel(token, &account_id, &channel_id, &attributes.into(), expect)
                .await
        }
        Command::Delete {
            account_id,
            channel_id,
            expect,
        } => {
            client
                .delete_video_channel(token, &account_id, &channel_id, expect)
                .await
        }
        Command::Get {
            account_id,
            channel_id,
        } => client.get_video_channel(&account_id, &channel_id).await,
    }
}

fn print_body(resp: &ExpectedResponse) {
    if resp.body.is_empty() {
        return;
    }
    match resp.json::<serde_json::Value>() {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{}", resp.text()),
        },
        Err(_) => println!("{}", resp.text()),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // If we have an env file, load it.
    if let Some(ref env_path) = cli.env_file {
        debug!("Loading environment from file: {env_path}");
        if let Err(e) = dotenvy::from_filename(env_path) {
            usage_error(&format!("Failed to load .env file '{env_path}': {e}"));
        }
    }

    let config = Config {
        url: env_or(cli.url, "VIDEO_CHANNELS_URL").unwrap_or_else(|| {
            usage_error("No server URL. Provide --url or set VIDEO_CHANNELS_URL.")
        }),
        token: env_or(cli.token, "VIDEO_CHANNELS_TOKEN"),
        proxy: env_or(cli.proxy, "VIDEO_CHANNELS_PROXY"),
    };

    if cli.command.needs_token() && config.token.is_none() {
        usage_error("This command needs a token. Provide --token or set VIDEO_CHANNELS_TOKEN.");
    }

    let client = match VideoChannelsClient::new(config.url, config.proxy) {
        Ok(c) => c,
        Err(e) => usage_error(&e.to_string()),
    };

    match run(&client, config.token.as_deref(), cli.command).await {
        Ok(resp) => {
            info!(status = resp.status, "request matched expectation");
            print_body(&resp);
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_attributes() {
        let cli = Cli::parse_from([
            "video-channels",
            "--url",
            "http://localhost:9001",
            "--token",
            "abc",
            "add",
            "1",
            "--name",
            "my channel",
            "--expect",
            "400",
        ]);

        assert!(cli.command.needs_token());
        match cli.command {
            Command::Add {
                account_id,
                attributes,
                expect,
            } => {
                assert_eq!(account_id, "1");
                assert_eq!(expect, Some(400));
                let attrs: VideoChannelAttributes = attributes.into();
                assert_eq!(attrs.name.as_deref(), Some("my channel"));
                assert_eq!(attrs.description, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn list_has_pagination_defaults() {
        let cli = Cli::parse_from(["video-channels", "list"]);
        assert!(!cli.command.needs_token());
        assert!(matches!(
            cli.command,
            Command::List { start: 0, count: 15, sort: None }
        ));
    }

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(
            env_or(Some("http://flag".into()), "VIDEO_CHANNELS_TEST_UNSET_VAR"),
            Some("http://flag".into())
        );
        assert_eq!(env_or(None, "VIDEO_CHANNELS_TEST_UNSET_VAR"), None);
        assert_eq!(env_or(Some(String::new()), "VIDEO_CHANNELS_TEST_UNSET_VAR"), None);
    }
}
