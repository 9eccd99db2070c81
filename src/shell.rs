use std::io::{self, BufRead, Write};

/// Blocking yes/no prompt shown before any mutating action. A declined
/// confirmation stops the action before a request is issued.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Transient user-facing notice for action outcomes.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Route changes requested by the store (delete-success only).
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Terminal implementation of all three ports, used by the binary.
pub struct TermShell;

impl ConfirmPrompt for TermShell {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    }
}

impl Notifier for TermShell {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

impl Navigator for TermShell {
    fn navigate_to(&self, path: &str) {
        println!("-> {path}");
    }
}
