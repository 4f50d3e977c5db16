//! Parses IP addresses from the command line into `Optional<IpAddr>` and
//! prints the canonical form of each, or `invalid`.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::net::IpAddr;

use anyhow::{Context, Result};
use optional::Optional;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUTS: [&str; 6] = [
    "127.0.0.1",
    "foobar",
    "1.1.1.1",
    "::1",
    "foo:bar:baz",
    "2606:4700:4700::1111",
];

fn parse_ip(s: &str) -> Optional<IpAddr> {
    Optional::from(s.parse::<IpAddr>().ok())
}

fn render(input: &str) -> String {
    parse_ip(input).map(|ip| ip.to_string()).or_else(String::from("invalid"))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<&str> = if args.is_empty() {
        DEFAULT_INPUTS.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let mut valid = 0usize;
    for input in &inputs {
        let ip = parse_ip(input);
        ip.if_present_or_else(
            |ip| debug!(input, %ip, "parsed"),
            || debug!(input, "not an ip address"),
        );
        if ip.is_present() {
            valid += 1;
        }
        println!("{}", render(input));
    }

    let first_v6 = inputs
        .iter()
        .map(|s| parse_ip(s).filter(IpAddr::is_ipv6))
        .find(Optional::is_present)
        .unwrap_or_default();
    let mut last_seen_v6 = String::new();
    first_v6
        .map(|ip| ip.to_string())
        .or_else_into(String::from("none"), &mut last_seen_v6)
        .context("storing first IPv6 address")?;

    info!(total = inputs.len(), valid, first_v6 = %last_seen_v6, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_valid_and_invalid_inputs() {
        assert_eq!(render("127.0.0.1"), "127.0.0.1");
        assert_eq!(render("foobar"), "invalid");
        assert_eq!(render("2606:4700:4700:0:0:0:0:1111"), "2606:4700:4700::1111");
    }

    #[test]
    fn parse_ip_is_empty_for_garbage() {
        assert!(parse_ip("foo:bar:baz").is_empty());
        assert!(parse_ip("::1").filter(IpAddr::is_ipv6).is_present());
    }
}
