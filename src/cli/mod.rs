//! Command-line interface.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, Subcommand};

pub const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Parser)]
#[command(name = "snaptail", version, about = "Fetch a JSON endpoint and render the result")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Open the fetch window against an address
    View {
        /// Address to fetch when the button is pressed
        #[arg(env = "SNAPTAIL_ADDRESS")]
        address: String,
    },
    /// Start the demo API in the background and open the window against it
    Run {
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        host: IpAddr,
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Serve the demo API until interrupted
    Serve {
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
        host: IpAddr,
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

/// The address the window should fetch for a server bound on `bound`.
///
/// A wildcard bind is reached through loopback.
pub fn window_address(bound: SocketAddr) -> String {
    let mut target = bound;
    if target.ip().is_unspecified() {
        let loopback = match target.ip() {
            IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(_) => IpAddr::V6(std::net::Ipv6Addr::LOCALHOST),
        };
        target.set_ip(loopback);
    }
    format!("http://{target}")
}
