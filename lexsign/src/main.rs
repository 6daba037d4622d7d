use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use lexsign::lex::{load_credential, Client, Config, PostTextInput, PostTextOutput};
use lexsign::{default_context, Result};
use log::debug;

/// Send one text to an Amazon Lex bot and print its reply.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to send to the bot.
    #[arg(default_value = "in")]
    text: String,

    /// Region of the bot, overrides LEX_REGION and AWS_REGION.
    #[arg(long)]
    region: Option<String>,

    /// Name of the bot, overrides LEX_BOT_NAME.
    #[arg(long)]
    bot_name: Option<String>,

    /// Alias of the bot, overrides LEX_BOT_ALIAS.
    #[arg(long)]
    bot_alias: Option<String>,

    /// User talking to the bot, overrides LEX_USER_ID.
    #[arg(long)]
    user_id: Option<String>,

    /// Endpoint to send the request to (e.g., "http://127.0.0.1:9900").
    #[arg(long)]
    endpoint: Option<String>,

    /// Timeout of the request in seconds, overrides LEX_TIMEOUT_SECS.
    #[arg(long, value_parser = parse_timeout)]
    timeout: Option<Duration>,

    /// Session attribute as key=value, can be repeated.
    #[arg(long = "session-attribute", value_parser = parse_key_value)]
    session_attributes: Vec<(String, String)>,
}

impl Cli {
    /// Overlay the flags that were given on top of `config`.
    fn apply(&self, config: &mut Config) {
        if let Some(v) = &self.region {
            config.region = v.clone();
        }
        if let Some(v) = &self.bot_name {
            config.bot_name = v.clone();
        }
        if let Some(v) = &self.bot_alias {
            config.bot_alias = v.clone();
        }
        if let Some(v) = &self.user_id {
            config.user_id = v.clone();
        }
        if let Some(v) = &self.endpoint {
            config.endpoint = Some(v.clone());
        }
        if let Some(v) = self.timeout {
            config.timeout = Some(v);
        }
    }

    /// Build the request body, `attr_name=value` is sent when no session
    /// attribute is given.
    fn input(&self) -> PostTextInput {
        let input = PostTextInput::new(&self.text);
        if self.session_attributes.is_empty() {
            return input.with_session_attribute("attr_name", "value");
        }

        self.session_attributes
            .iter()
            .fold(input, |input, (k, v)| input.with_session_attribute(k, v))
    }
}

fn parse_timeout(s: &str) -> std::result::Result<Duration, String> {
    match s.parse::<u64>() {
        Ok(0) => Err("timeout must be greater than zero".to_string()),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(format!("invalid timeout '{s}': {e}")),
    }
}

fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("invalid session attribute '{s}', expected key=value")),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenv::dotenv();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = default_context();

    // Credentials first: nothing is sent without them.
    let credential = load_credential(&ctx).await?;

    let mut config = Config::from_env(&ctx)?;
    cli.apply(&mut config);
    debug!("loaded config: {config:?}");

    let client = Client::new(ctx, config, credential)?;

    println!("\nBEGIN REQUEST++++++++++++++++++++++++++++++++++++");
    println!("Request URL = {}", client.url()?);

    let resp = client.send_text(&cli.input()).await?;

    println!("\nRESPONSE++++++++++++++++++++++++++++++++++++");
    println!("Response code: {}\n", resp.status().as_u16());
    println!("{}", resp.body());

    let output = PostTextOutput::from_response(&resp)?;
    println!("{}", output.message);

    Ok(())
}
