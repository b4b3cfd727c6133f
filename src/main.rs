use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use dropbox_api::config::{DEFAULT_CONTENT_PREFIX, DEFAULT_PREFIX};
use dropbox_api::{Config, Connection, Endpoint, Payload};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EndpointArg {
    Main,
    Content,
}

impl From<EndpointArg> for Endpoint {
    fn from(arg: EndpointArg) -> Self {
        match arg {
            EndpointArg::Main => Endpoint::Main,
            EndpointArg::Content => Endpoint::Content,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dropbox-api")]
#[command(about = "Issue a single request against the Dropbox API", long_about = None)]
struct Args {
    /// OAuth2 access token
    #[arg(long, env = "DROPBOX_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// Base URL for the metadata API
    #[arg(long, env = "DROPBOX_API_PREFIX", default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Base URL for the content API
    #[arg(long, env = "DROPBOX_API_CONTENT_PREFIX", default_value = DEFAULT_CONTENT_PREFIX)]
    content_prefix: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// GET a path and print the response body
    Get {
        path: String,
        /// Query parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
        /// Print the body as returned instead of pretty JSON
        #[arg(long)]
        raw: bool,
        #[arg(short, long, value_enum, default_value = "main")]
        endpoint: EndpointArg,
    },
    /// POST form parameters to a path
    Post {
        path: String,
        /// Form parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
        #[arg(short, long, value_enum, default_value = "main")]
        endpoint: EndpointArg,
    },
    /// PUT form parameters, or a file's contents, to a path
    Put {
        path: String,
        /// Form parameter as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_pair, conflicts_with = "file")]
        params: Vec<(String, String)>,
        /// Upload this file as the raw request body
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value = "content")]
        endpoint: EndpointArg,
    },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{s}`"))
}

fn print_json(value: &serde_json::Value) -> Result<(), BoxError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("dropbox_api={}", args.log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default()
        .with_prefix(&args.prefix)
        .with_content_prefix(&args.content_prefix)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    tracing::info!(
        prefix = %config.prefix,
        content_prefix = %config.content_prefix,
        "Starting dropbox-api request"
    );

    let conn = Connection::from_access_token(config, &args.token)?;

    match args.command {
        Command::Get {
            path,
            params,
            raw: true,
            endpoint,
        } => {
            let bytes = conn.get_raw(endpoint.into(), &path, &params, &[]).await?;
            std::io::stdout().write_all(&bytes)?;
        }
        Command::Get {
            path,
            params,
            raw: false,
            endpoint,
        } => {
            let value: serde_json::Value = conn.get(endpoint.into(), &path, &params, &[]).await?;
            print_json(&value)?;
        }
        Command::Post {
            path,
            params,
            endpoint,
        } => {
            let value: serde_json::Value = conn
                .post(endpoint.into(), &path, &Payload::Form(params), &[])
                .await?;
            print_json(&value)?;
        }
        Command::Put {
            path,
            params,
            file,
            endpoint,
        } => {
            let payload = match file {
                Some(file) => Payload::Bytes(tokio::fs::read(&file).await?),
                None => Payload::Form(params),
            };
            let value: serde_json::Value = conn.put(endpoint.into(), &path, &payload, &[]).await?;
            print_json(&value)?;
        }
    }

    Ok(())
}
