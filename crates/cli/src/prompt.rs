use std::io::{self, BufRead, Write};

use expense_tracker_core::prompt::UserPrompt;

/// stdin/stdout-backed prompts: alerts print immediately, confirmations
/// block on a y/N answer and default to No.
pub struct TerminalPrompt;

impl UserPrompt for TerminalPrompt {
    fn alert(&self, message: &str) {
        println!("⚠  {message}");
    }

    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}
