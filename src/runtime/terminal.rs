use console::style;

/// Where screens and alerts end up.
pub trait Terminal: Send + Sync {
    fn show(&self, text: &str);
    fn alert(&self, message: &str);
}

/// Screens go to stdout, alerts to stderr so they survive `-o json` pipes.
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn show(&self, text: &str) {
        println!("{}", text.trim_end());
    }

    fn alert(&self, message: &str) {
        eprintln!("{} {message}", style("!").yellow().bold());
    }
}
