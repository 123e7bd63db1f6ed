use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_tracker_core::backend::http::HttpBackend;
use expense_tracker_core::models::currency::SUPPORTED_CURRENCIES;
use expense_tracker_core::ExpenseTracker;

mod commands;
mod prompt;

use commands::Command;
use prompt::TerminalPrompt;

/// Terminal client for the expense tracker backend.
#[derive(Debug, Parser)]
#[command(name = "expenses", version, about)]
struct Args {
    /// Base URL of the expense backend
    #[arg(long, env = "EXPENSE_API_URL", default_value = "http://localhost:8081")]
    server_url: String,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    tracing::info!(server_url = %args.server_url, "Connecting to expense backend");

    let backend = HttpBackend::new(args.server_url);
    let mut app = ExpenseTracker::new(Box::new(backend), Box::new(TerminalPrompt));

    app.init().await;
    draw(&app);
    print_hint();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Some(Command::Add {
                amount,
                currency,
                description,
            }) => {
                app.form_mut().fill(&amount, &currency, &description);
                app.add_expense().await;
                draw(&app);
            }
            Some(Command::Delete(id)) => {
                app.delete_expense(id).await;
                draw(&app);
            }
            Some(Command::Refresh) => {
                app.refresh().await;
                draw(&app);
            }
            Some(Command::Help) => print_help(),
            Some(Command::Quit) => break,
            None => println!("Unknown command. Type 'help' for usage."),
        }
    }

    Ok(())
}

/// Redraw the whole page: both regions plus the form's submit control.
fn draw(app: &ExpenseTracker) {
    let page = app.page();
    println!();
    println!("{}", page.budget.content());
    println!();
    println!("{}", page.expenses.content());
    println!();
    println!("[{}]", page.form.submit_label());
}

fn print_hint() {
    println!("Type 'help' for commands.");
}

fn print_help() {
    println!("Commands:");
    println!("  add <amount> <currency> <description…>   record a new expense");
    println!("  delete <id>                              remove an expense");
    println!("  refresh                                  re-fetch budget and expenses");
    println!("  help                                     show this message");
    println!("  quit                                     leave");
    println!();
    println!("Currencies with conversion rates: {}", SUPPORTED_CURRENCIES.join(", "));
}
