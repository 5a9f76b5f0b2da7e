// commands/mod.rs
mod add;
mod configure;
mod power;

use crate::{error::AppError, panel::ControlPanel, shell::Console};

/// Whether the menu loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A top-level menu entry. Implementations register themselves with
/// `inventory::submit!` and are picked up by [`registered`].
pub trait MenuCommand: Sync {
    fn key(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn run(&self, panel: &mut ControlPanel, console: &mut dyn Console) -> Result<Flow, AppError>;
}

inventory::collect!(&'static dyn MenuCommand);

/// Every registered command, ordered by key.
pub fn registered() -> Vec<&'static dyn MenuCommand> {
    let mut commands: Vec<&'static dyn MenuCommand> = inventory::iter::<&'static dyn MenuCommand>
        .into_iter()
        .copied()
        .collect();
    commands.sort_by_key(|command| command.key());
    commands
}

pub fn find(menu: &[&'static dyn MenuCommand], choice: &str) -> Option<&'static dyn MenuCommand> {
    menu.iter().copied().find(|command| command.key() == choice)
}

fn write_listing(panel: &ControlPanel, console: &mut dyn Console) -> Result<(), AppError> {
    console.write_line("\n--- Smart Devices ---")?;
    for entry in panel.list_devices() {
        console.write_line(&entry.to_string())?;
    }
    Ok(())
}

pub struct ListDevicesCommand;

impl MenuCommand for ListDevicesCommand {
    fn key(&self) -> &'static str {
        "3"
    }

    fn label(&self) -> &'static str {
        "List Devices"
    }

    fn run(&self, panel: &mut ControlPanel, console: &mut dyn Console) -> Result<Flow, AppError> {
        write_listing(panel, console)?;
        Ok(Flow::Continue)
    }
}

inventory::submit! {
    &ListDevicesCommand as &'static dyn MenuCommand
}

pub struct ExitCommand;

impl MenuCommand for ExitCommand {
    fn key(&self) -> &'static str {
        "7"
    }

    fn label(&self) -> &'static str {
        "Exit"
    }

    fn run(&self, _panel: &mut ControlPanel, console: &mut dyn Console) -> Result<Flow, AppError> {
        console.write_line("Exiting...")?;
        Ok(Flow::Exit)
    }
}

inventory::submit! {
    &ExitCommand as &'static dyn MenuCommand
}
