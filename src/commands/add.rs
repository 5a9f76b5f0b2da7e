// add.rs
use super::{Flow, MenuCommand};
use crate::{devices::Device, error::AppError, panel::ControlPanel, shell::Console, utils};

/// Prompts for name, location and the initial setting, then registers the
/// device. A non-numeric setting adds nothing.
fn add_device(
    panel: &mut ControlPanel,
    console: &mut dyn Console,
    name_prompt: &str,
    value_prompt: &str,
    setting: &'static str,
    build: fn(String, String, i32) -> Device,
) -> Result<Flow, AppError> {
    let name = console.prompt(name_prompt)?;
    let location = console.prompt("Enter location: ")?;
    let value = console.prompt(value_prompt)?;

    match utils::parse_number(&value, setting) {
        Ok(value) => {
            let event = panel.add_device(build(name, location, value));
            console.write_line(&event.to_string())?;
        }
        Err(err @ AppError::InvalidValue { .. }) => console.write_line(&format!("{err}."))?,
        Err(err) => return Err(err),
    }
    Ok(Flow::Continue)
}

pub struct AddLightCommand;

impl MenuCommand for AddLightCommand {
    fn key(&self) -> &'static str {
        "1"
    }

    fn label(&self) -> &'static str {
        "Add Smart Light"
    }

    fn run(&self, panel: &mut ControlPanel, console: &mut dyn Console) -> Result<Flow, AppError> {
        add_device(
            panel,
            console,
            "Enter light name: ",
            "Enter brightness (0-100): ",
            "brightness",
            |name, location, brightness| Device::light(name, location, brightness),
        )
    }
}

inventory::submit! {
    &AddLightCommand as &'static dyn MenuCommand
}

pub struct AddAirConditionerCommand;

impl MenuCommand for AddAirConditionerCommand {
    fn key(&self) -> &'static str {
        "2"
    }

    fn label(&self) -> &'static str {
        "Add Smart Air Conditioner"
    }

    fn run(&self, panel: &mut ControlPanel, console: &mut dyn Console) -> Result<Flow, AppError> {
        add_device(
            panel,
            console,
            "Enter air conditioner name: ",
            "Enter temperature: ",
            "temperature",
            |name, location, temperature| Device::air_conditioner(name, location, temperature),
        )
    }
}

inventory::submit! {
    &AddAirConditionerCommand as &'static dyn MenuCommand
}
