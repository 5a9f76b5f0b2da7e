// power.rs
use super::{Flow, MenuCommand};
use crate::{error::AppError, panel::ControlPanel, shell::Console};

pub struct TurnOnAllCommand;

impl MenuCommand for TurnOnAllCommand {
    fn key(&self) -> &'static str {
        "4"
    }

    fn label(&self) -> &'static str {
        "Turn On All Devices"
    }

    fn run(&self, panel: &mut ControlPanel, console: &mut dyn Console) -> Result<Flow, AppError> {
        console.write_line("\nTurning on all devices...")?;
        for event in panel.turn_on_all_devices() {
            console.write_line(&event.to_string())?;
        }
        Ok(Flow::Continue)
    }
}

inventory::submit! {
    &TurnOnAllCommand as &'static dyn MenuCommand
}

pub struct TurnOffAllCommand;

impl MenuCommand for TurnOffAllCommand {
    fn key(&self) -> &'static str {
        "5"
    }

    fn label(&self) -> &'static str {
        "Turn Off All Devices"
    }

    fn run(&self, panel: &mut ControlPanel, console: &mut dyn Console) -> Result<Flow, AppError> {
        console.write_line("\nTurning off all devices...")?;
        for event in panel.turn_off_all_devices() {
            console.write_line(&event.to_string())?;
        }
        Ok(Flow::Continue)
    }
}

inventory::submit! {
    &TurnOffAllCommand as &'static dyn MenuCommand
}
