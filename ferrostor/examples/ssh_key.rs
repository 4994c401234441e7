//! Fetch and print a device's SSH host key fingerprint.
//!
//! Only the key exchange is performed; no credentials are sent.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example ssh_key -- --host 192.168.1.1 --port 22
//! ```

use std::env;
use std::time::Duration;

use ferrostor::access::validation::check_input;
use ferrostor::{SshConfig, fetch_host_key};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let (host, port) = check_input(args.host.as_deref(), args.port.as_deref())?;

    let config = SshConfig::new(host)
        .port(port)
        .timeout(Duration::from_secs(args.timeout));

    println!("Fetching host key from {}...", config.socket_addr());
    let record = fetch_host_key(&config).await?;

    println!("type:        {}", record.key_type);
    println!("key:         {}", record.key);
    println!("fingerprint: {}", record.fingerprint);

    Ok(())
}

/// Simple argument parser (avoiding external dependencies)
struct Args {
    host: Option<String>,
    port: Option<String>,
    timeout: u64,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut host = None;
        let mut port = None;
        let mut timeout = 10u64;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--host" | "-h" => {
                    i += 1;
                    if i < args.len() {
                        host = Some(args[i].clone());
                    }
                }
                "--port" | "-p" => {
                    i += 1;
                    if i < args.len() {
                        port = Some(args[i].clone());
                    }
                }
                "--timeout" | "-t" => {
                    i += 1;
                    if i < args.len() {
                        timeout = args[i].parse().unwrap_or(10);
                    }
                }
                "--help" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                _ => {
                    eprintln!("Unknown argument: {}", args[i]);
                }
            }
            i += 1;
        }

        Self {
            host,
            port,
            timeout,
        }
    }

    fn print_help() {
        println!(
            r#"ferrostor ssh_key example

USAGE:
    cargo run --example ssh_key -- [OPTIONS]

OPTIONS:
    -h, --host <HOST>        Target host (required)
    -p, --port <PORT>        SSH port [default: 22]
    -t, --timeout <SECS>     Handshake timeout [default: 10]
    --help                   Print this help message
"#
        );
    }
}
