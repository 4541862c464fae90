//! Blocking user prompts: confirmations and alerts.

use std::io::{self, BufRead, Write};

/// The user-facing prompt surface.
///
/// Page and form controllers only ever need a yes/no question and a
/// blocking notice, so that is all the trait offers. Injected so tests can
/// script the answers.
pub trait Ui: Send + Sync {
    /// Ask the user to confirm `message`. Returns `true` on consent.
    fn confirm(&self, message: &str) -> bool;

    /// Show `message` and carry on.
    fn alert(&self, message: &str);
}

/// A [Ui] over stdin/stdout for the interactive shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/n] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => {
                let answer = answer.trim();
                answer.eq_ignore_ascii_case("y") || answer == "д"
            }
            Err(error) => {
                tracing::error!("could not read the confirmation answer: {error}");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        println!("[!] {message}");
    }
}
