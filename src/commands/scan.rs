//! Scan command - a terminal scan station.
//!
//! Reads lines from stdin. A line that is not a station command is fed to the
//! scanner detector one key at a time followed by `Enter`, the same way a
//! keyboard wedge scanner delivers a barcode.

use std::sync::Arc;
use std::time::Instant;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::config::{Config, SCAN_TERMINATOR_KEY};
use crate::errors::{AppError, AppResult};
use crate::scanner::{
    describe_device, station_user_agent, ActivityRecorder, LogServiceSink, ScanDetector,
    ScanResult, ScanSession,
};
use crate::services::{parallel, ServiceContainer, Services};
use crate::types::ProductFilter;

const HELP: &str = "\
Commands:
  login <employee id> [password]
  logout
  reload             fetch the catalog again
  manual <barcode>   look up a typed barcode
  find <text> [page] search the catalog by name, code or barcode
  history            recent scans, newest first
  quit
Any other line is treated as scanner input. A barcode that reads exactly
like a command word goes through `manual <barcode>` instead.";

/// One line of station input
#[derive(Debug, PartialEq, Eq)]
enum StationInput<'a> {
    Quit,
    Help,
    Login { employee_id: &'a str, password: &'a str },
    Logout,
    Reload,
    History,
    Find { text: &'a str, page: u64 },
    Manual(&'a str),
    Scan(&'a str),
}

impl<'a> StationInput<'a> {
    /// `None` for a blank line
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let input = match command {
            "quit" | "exit" => StationInput::Quit,
            "help" => StationInput::Help,
            "login" => {
                let mut parts = rest.split_whitespace();
                StationInput::Login {
                    employee_id: parts.next().unwrap_or_default(),
                    password: parts.next().unwrap_or_default(),
                }
            }
            "logout" => StationInput::Logout,
            "reload" => StationInput::Reload,
            "history" => StationInput::History,
            "find" => {
                let (text, page) = match rest.rsplit_once(' ') {
                    Some((text, page)) => match page.parse::<u64>() {
                        Ok(page) => (text, page),
                        Err(_) => (rest, 1),
                    },
                    None => (rest, 1),
                };
                StationInput::Find {
                    text: text.trim(),
                    page,
                }
            }
            "manual" => StationInput::Manual(rest.trim()),
            _ => StationInput::Scan(line),
        };
        Some(input)
    }
}

/// Execute the scan command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = super::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), &config);

    let sink = Arc::new(LogServiceSink::new(services.logs(), None));
    let device = describe_device(&station_user_agent());
    let (recorder, mut warnings) = ActivityRecorder::new(sink, device);

    let mut session = ScanSession::new(
        services.auth(),
        services.products(),
        recorder,
        ScanDetector::from_config(&config),
    );

    let (products, app_config) =
        parallel::join2(services.products().list_products(), services.config().get_config())
            .await?;
    let count = session.load_catalog(products);

    println!("{}", app_config.app_name);
    println!("{} products loaded. Type `help` for commands.", count);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| AppError::internal(format!("Failed to read input: {}", e)))?
    {
        let Some(input) = StationInput::parse(&line) else {
            continue;
        };

        match input {
            StationInput::Quit => break,
            StationInput::Help => println!("{}", HELP),
            StationInput::Login {
                employee_id,
                password,
            } => match session.login(employee_id, password).await {
                Ok(user) => println!("Welcome, {}", user.display_name()),
                Err(AppError::InvalidCredentials) => println!("Invalid credentials"),
                Err(e) => println!("Login failed: {}", e),
            },
            StationInput::Logout => {
                session.logout();
                println!("Logged out");
            }
            _ if session.current_user().is_none() => {
                println!("Log in first");
            }
            StationInput::Reload => match session.reload_catalog().await {
                Ok(count) => println!("{} products loaded", count),
                Err(e) => println!("Reload failed: {}", e),
            },
            StationInput::History => {
                for entry in session.history() {
                    let label = entry.item_name.as_deref().unwrap_or("not found");
                    println!(
                        "{}  {:<20} {}",
                        entry.scanned_at.format("%H:%M:%S"),
                        entry.barcode,
                        label
                    );
                }
            }
            StationInput::Find { text, page } => {
                let results = ProductFilter::new(text).page(session.catalog(), page);
                for product in &results.data {
                    println!(
                        "{:<16} {:<20} {}",
                        product.item_code, product.barcode, product.item_name
                    );
                }
                println!(
                    "page {} of {} ({} matches)",
                    results.meta.page, results.meta.total_pages, results.meta.total
                );
            }
            StationInput::Manual(barcode) => {
                if let Some(result) = session.submit_manual(barcode) {
                    print_result(&result);
                }
            }
            StationInput::Scan(keys) => {
                for key in keys.chars() {
                    session.handle_key(&key.to_string(), Instant::now());
                }
                match session.handle_key(SCAN_TERMINATOR_KEY, Instant::now()) {
                    Some(result) => print_result(&result),
                    None => println!("Input too short for a barcode"),
                }
            }
        }

        drain_warnings(&mut warnings);
    }

    // Piped input ends right after the last scan; its log write may still be running
    session.flush_activity().await;
    drain_warnings(&mut warnings);
    Ok(())
}

fn print_result(result: &ScanResult) {
    if result.found {
        println!("FOUND  {}  {}", result.item_code, result.item_name);
    } else {
        println!("NOT FOUND  {}", result.barcode);
    }
}

fn drain_warnings(warnings: &mut mpsc::UnboundedReceiver<String>) {
    while let Ok(message) = warnings.try_recv() {
        eprintln!("warning: {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(StationInput::parse("   "), None);
        assert_eq!(StationInput::parse("quit"), Some(StationInput::Quit));
        assert_eq!(
            StationInput::parse("login 1024 secret1"),
            Some(StationInput::Login {
                employee_id: "1024",
                password: "secret1"
            })
        );
        assert_eq!(
            StationInput::parse("login 9999"),
            Some(StationInput::Login {
                employee_id: "9999",
                password: ""
            })
        );
    }

    #[test]
    fn test_parse_find_page() {
        assert_eq!(
            StationInput::parse("find drinking water 2"),
            Some(StationInput::Find {
                text: "drinking water",
                page: 2
            })
        );
        assert_eq!(
            StationInput::parse("find water"),
            Some(StationInput::Find {
                text: "water",
                page: 1
            })
        );
        assert_eq!(
            StationInput::parse("find x 18446744073709551615"),
            Some(StationInput::Find {
                text: "x",
                page: u64::MAX
            })
        );
    }

    #[test]
    fn test_command_word_barcode_goes_through_manual() {
        assert_eq!(StationInput::parse("history"), Some(StationInput::History));
        assert_eq!(
            StationInput::parse("manual history"),
            Some(StationInput::Manual("history"))
        );
        assert_eq!(
            StationInput::parse("8851234567890"),
            Some(StationInput::Scan("8851234567890"))
        );
    }
}
