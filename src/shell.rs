// shell.rs
use crate::{
    commands::{self, Flow},
    error::AppError,
    panel::ControlPanel,
};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Line-oriented terminal used by menu commands.
pub trait Console {
    /// Reads one line without its terminator. `None` once input is closed.
    fn read_line(&mut self) -> Result<Option<String>, AppError>;

    /// Writes `text` and flushes, leaving the cursor on the same line.
    fn write(&mut self, text: &str) -> Result<(), AppError>;

    fn write_line(&mut self, text: &str) -> Result<(), AppError>;

    /// Shows a prompt and reads the answer. Closed input reads as empty.
    fn prompt(&mut self, text: &str) -> Result<String, AppError> {
        self.write(text)?;
        Ok(self.read_line()?.unwrap_or_default())
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for Session<R, W> {
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> Result<(), AppError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

/// The interactive menu loop around a [`ControlPanel`].
pub struct Shell<R, W> {
    session: Session<R, W>,
    panel: ControlPanel,
    title: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, title: impl Into<String>) -> Self {
        Self {
            session: Session::new(input, output),
            panel: ControlPanel::new(),
            title: title.into(),
        }
    }

    #[cfg(test)]
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        let menu = commands::registered();

        loop {
            self.session.write_line(&format!("\n--- {} ---", self.title))?;
            for command in &menu {
                self.session
                    .write_line(&format!("{}. {}", command.key(), command.label()))?;
            }
            self.session.write("Enter choice: ")?;

            let Some(choice) = self.session.read_line()? else {
                info!("Input closed, leaving the menu");
                return Ok(());
            };

            match commands::find(&menu, &choice) {
                Some(command) => {
                    if let Flow::Exit = command.run(&mut self.panel, &mut self.session)? {
                        return Ok(());
                    }
                }
                None => {
                    warn!(%choice, "Unknown menu choice");
                    self.session.write_line("Invalid choice. Try again.")?;
                }
            }
        }
    }
}
