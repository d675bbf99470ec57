use anyhow::Result;
use crossterm::style::Stylize;
use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};
use std::borrow::Cow;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use airport_search::config::DEFAULT_PROXY_URL;
use airport_search::history::SearchHistory;
use airport_search::models::AirportRecord;
use airport_search::session::{ProxyBackend, SearchOutcome, SearchSession};

struct AirportPrompt;

impl Prompt for AirportPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("airport> ")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse search: {})",
            prefix, history_search.term
        ))
    }
}

fn print_help() {
    println!("{}", "Airport Search".blue().bold());
    println!();
    println!("Type a keyword (city, airport name or IATA code) and press Enter.");
    println!();
    println!("{}", "Commands:".yellow());
    println!("  {}          - List recent searches", "\\history".green());
    println!("  {}       - Re-run a recent search", "\\replay <n>".green());
    println!("  {}       - Show details for a result", "\\select <n>".green());
    println!("  {} - Clear the search history", "\\clear-history".green());
    println!("  {}             - Show this help", "\\help".green());
    println!("  {}             - Exit (also Ctrl+D)", "\\quit".green());
    println!();
}

fn print_results(results: &[AirportRecord]) {
    println!("{}", "Results:".yellow());
    for (index, airport) in results.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            index + 1,
            airport.name,
            airport.iata_code.as_str().green()
        );
    }
}

fn print_detail(airport: &AirportRecord) {
    println!();
    println!("{}", airport.name.as_str().bold());
    println!("  IATA code:   {}", airport.iata_code);
    println!(
        "  City:        {}",
        airport.address.city_name.as_deref().unwrap_or("N/A")
    );
    println!(
        "  Country:     {}",
        airport.address.country_name.as_deref().unwrap_or("N/A")
    );
    println!(
        "  Coordinates: {}, {}",
        airport.geo_code.latitude, airport.geo_code.longitude
    );
    println!();
}

fn parse_index(argument: Option<&str>, upper: usize) -> Option<usize> {
    let index: usize = argument?.parse().ok()?;
    if index == 0 || index > upper {
        return None;
    }
    Some(index - 1)
}

fn run_search(session: &mut SearchSession<ProxyBackend>, term: &str) {
    match session.search(term) {
        SearchOutcome::Results(_) => print_results(session.results()),
        SearchOutcome::NotFound => {
            println!("{}", "No airports matched that search.".yellow());
        }
        SearchOutcome::Invalid => println!("Enter a search term first."),
        SearchOutcome::Failed(_) => {
            println!(
                "{}",
                "Something went wrong while searching. Please try again.".red()
            );
        }
        SearchOutcome::Superseded => {}
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let proxy_url =
        env::var("AIRPORT_PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());
    let history = match env::var("AIRPORT_HISTORY_FILE") {
        Ok(path) => SearchHistory::with_file(PathBuf::from(path))?,
        Err(_) => SearchHistory::new()?,
    };

    let mut session = SearchSession::new(ProxyBackend::new(&proxy_url), history);
    let mut line_editor = Reedline::create();
    let prompt = AirportPrompt;

    print_help();

    loop {
        let sig = line_editor.read_line(&prompt)?;
        match sig {
            Signal::Success(buffer) => {
                let line = buffer.trim();
                if line.is_empty() {
                    continue;
                }

                if let Some(command) = line.strip_prefix('\\') {
                    let mut parts = command.split_whitespace();
                    match parts.next() {
                        Some("help") => print_help(),
                        Some("quit") | Some("exit") => break,
                        Some("history") => {
                            if session.history().is_empty() {
                                println!("No searches yet.");
                            } else {
                                println!("{}", "Recent searches:".yellow());
                                for (index, term) in session.history().iter().enumerate() {
                                    println!("  {}. {}", index + 1, term);
                                }
                            }
                        }
                        Some("replay") => {
                            let term = parse_index(parts.next(), session.history().len())
                                .and_then(|index| session.history().get(index).cloned());
                            match term {
                                Some(term) => run_search(&mut session, &term),
                                None => println!("Usage: \\replay <history number>"),
                            }
                        }
                        Some("select") => {
                            match parse_index(parts.next(), session.results().len())
                                .and_then(|index| session.select_airport(index).cloned())
                            {
                                Some(airport) => {
                                    print_detail(&airport);
                                    session.close_detail();
                                }
                                None => println!("Usage: \\select <result number>"),
                            }
                        }
                        Some("clear-history") => {
                            session.clear_history()?;
                            println!("Search history cleared.");
                        }
                        _ => println!("Unknown command. Try {}.", "\\help".green()),
                    }
                    continue;
                }

                run_search(&mut session, line);
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("Goodbye!");
                break;
            }
        }
    }

    Ok(())
}
