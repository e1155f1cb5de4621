use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE: &str = "/tmp/database.db";
const DEFAULT_WORKERS: usize = 8;
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "property_listings",
    about = "Property listing REST service and command-line client",
    version
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// List every property
    List(ApiArgs),
    /// Show one property
    Get {
        id: i64,
        #[command(flatten)]
        api: ApiArgs,
    },
    /// Add a property
    Add(AddArgs),
    /// Delete a property
    Delete {
        id: i64,
        #[command(flatten)]
        api: ApiArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, env = "BIND_HOST", default_value = DEFAULT_HOST, help = "Address to bind")]
    pub host: IpAddr,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT, help = "Port to listen on")]
    pub port: u16,

    #[arg(
        long,
        env = "DATABASE_PATH",
        value_name = "FILE",
        default_value = DEFAULT_DATABASE,
        help = "SQLite database file"
    )]
    pub database: PathBuf,

    #[arg(
        long,
        env = "WORKERS",
        default_value_t = DEFAULT_WORKERS,
        help = "Maximum number of request worker threads"
    )]
    pub workers: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    #[arg(
        long,
        env = "PROPERTIES_API_URL",
        default_value = DEFAULT_API_URL,
        help = "Base URL of the property service"
    )]
    pub api_url: String,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub description: Option<String>,

    #[arg(long = "image", value_name = "FILE", help = "Local image, embedded as a data URI")]
    pub images: Vec<PathBuf>,
    #[arg(long = "image-url", value_name = "URL")]
    pub image_urls: Vec<String>,
    #[arg(long = "document", value_name = "URL")]
    pub documents: Vec<String>,

    #[arg(long)]
    pub owner_name: Option<String>,
    #[arg(long)]
    pub owner_email: Option<String>,
    #[arg(long)]
    pub owner_phone: Option<String>,

    #[arg(long, help = "Mark the property as not available for visits")]
    pub no_visits: bool,

    #[command(flatten)]
    pub api: ApiArgs,
}

/// Resolved server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
    pub max_workers: usize,
}

impl ServerConfig {
    pub fn from_args(args: ServeArgs) -> Self {
        Self {
            bind_addr: SocketAddr::new(args.host, args.port),
            database_path: args.database,
            max_workers: args.workers.max(1),
        }
    }
}
