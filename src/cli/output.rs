//! Terminal output for results and `--verbose` details.

use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
}

impl OutputManager {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a result line to stdout
    pub fn result(&self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{message}")
    }

    /// Print a detail line to stderr, only in verbose mode
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "{message}")?;
        }
        Ok(())
    }
}
