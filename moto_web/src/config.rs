//! Server configuration from command line flags and environment.

use std::net::SocketAddr;

use clap::Parser;

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

#[derive(Parser, Debug, Clone)]
#[command(name = "moto_web", version, about = "Web front end for the motorcycle design tools")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "MOTO_WEB_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "MOTO_WEB_LOG", default_value = "info,tower_http=debug")]
    pub log: String,
}
