//! Command-line arguments.

use crate::models::parse_address;
use crate::output::OutputMode;
use clap::{Parser, Subcommand};
use std::net::Ipv4Addr;

#[derive(Parser, Debug)]
#[command(name = "iprange", version, about = "Check if an IP is in range")]
pub struct Cli {
    /// Print ranges as newline separated IPs
    #[arg(short, long, global = true)]
    pub newline: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_newline(self.newline)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check if IP is between two other ips
    Range {
        /// IP to check if is within range
        #[arg(value_parser = parse_address)]
        target: Ipv4Addr,
        /// Lowest possible IP to be considered in range
        #[arg(value_parser = parse_address)]
        minrange: Ipv4Addr,
        /// Highest possible IP to be considered in range
        #[arg(value_parser = parse_address)]
        maxrange: Ipv4Addr,
    },
    /// Check if an ip is in a CIDR range
    Cidr {
        /// IP to check if is within range
        #[arg(value_parser = parse_address)]
        target: Ipv4Addr,
        /// CIDR notation for range to check
        range: String,
    },
    /// Takes one or more CIDRs and gives the min and max IP address in the range(s)
    Convert {
        /// CIDR notation for ranges to convert
        #[arg(required = true)]
        ranges: Vec<String>,
    },
    /// Subtract one CIDR from another and get the resulting range(s)
    Subtract {
        /// CIDR range from which to subtract
        minuend: String,
        /// CIDR to subtract from the minuend
        subtrahend: String,
    },
}
