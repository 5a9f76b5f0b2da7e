// configure.rs
use super::{Flow, MenuCommand, write_listing};
use crate::{error::AppError, panel::ControlPanel, shell::Console, utils};

pub struct ConfigureDeviceCommand;

impl MenuCommand for ConfigureDeviceCommand {
    fn key(&self) -> &'static str {
        "6"
    }

    fn label(&self) -> &'static str {
        "Configure Device"
    }

    fn run(&self, panel: &mut ControlPanel, console: &mut dyn Console) -> Result<Flow, AppError> {
        write_listing(panel, console)?;
        let choice = console.prompt("Select device number to configure: ")?;

        let selected = panel.select(&choice).and_then(|position| {
            let device = panel.device(position).ok_or(AppError::InvalidChoice)?;
            let setting = device.setting();
            Ok((position, setting.label(), setting.title(), device.name().to_string()))
        });
        let (position, label, title, name) = match selected {
            Ok(selected) => selected,
            Err(err @ AppError::InvalidChoice) => {
                console.write_line(&format!("{err}."))?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(err),
        };

        let value = console.prompt(&format!("Set {label} for {name}: "))?;
        match utils::parse_number(&value, label) {
            Ok(value) => {
                let event = panel.configure_device(position, value)?;
                console.write_line(&event.to_string())?;
            }
            Err(AppError::InvalidValue { .. }) => {
                console.write_line(&format!("Invalid input. {title} not changed."))?;
            }
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }
}

inventory::submit! {
    &ConfigureDeviceCommand as &'static dyn MenuCommand
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commands::tests::run_scripted, devices::Device};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn panel() -> ControlPanel {
        let mut panel = ControlPanel::new();
        panel.add_device(Device::light("Lamp", "Den", 50));
        panel.add_device(Device::air_conditioner("AC1", "Hall", 22));
        panel
    }

    fn settings(panel: &ControlPanel) -> Vec<i32> {
        panel
            .list_devices()
            .map(|entry| entry.device.setting().value())
            .collect()
    }

    #[rstest]
    fn sets_brightness_of_selected_light(mut panel: ControlPanel) {
        let (_, output) = run_scripted(&ConfigureDeviceCommand, &mut panel, "1\n80\n");

        assert_eq!(
            output,
            "\n--- Smart Devices ---\n\
             1. Lamp in Den - Status: OFF\n\
             2. AC1 in Hall - Status: OFF\n\
             Select device number to configure: \
             Set brightness for Lamp: Brightness set to 80%\n"
        );
        assert_eq!(settings(&panel), vec![80, 22]);
    }

    #[rstest]
    fn sets_temperature_of_selected_air_conditioner(mut panel: ControlPanel) {
        let (_, output) = run_scripted(&ConfigureDeviceCommand, &mut panel, "2\n18\n");

        assert!(output.ends_with("Set temperature for AC1: Temperature set to 18°C\n"));
        assert_eq!(settings(&panel), vec![50, 18]);
    }

    #[rstest]
    #[case("0\n")]
    #[case("3\n")]
    #[case("x\n")]
    #[case("")]
    fn invalid_selection_changes_nothing(mut panel: ControlPanel, #[case] input: &str) {
        let (flow, output) = run_scripted(&ConfigureDeviceCommand, &mut panel, input);

        assert_eq!(flow, Flow::Continue);
        assert!(output.ends_with("Select device number to configure: Invalid choice.\n"));
        assert_eq!(settings(&panel), vec![50, 22]);
    }

    #[rstest]
    #[case("1\nbright\n", "Invalid input. Brightness not changed.\n")]
    #[case("2\n\n", "Invalid input. Temperature not changed.\n")]
    fn invalid_value_keeps_setting(mut panel: ControlPanel, #[case] input: &str, #[case] message: &str) {
        let (_, output) = run_scripted(&ConfigureDeviceCommand, &mut panel, input);

        assert!(output.ends_with(message));
        assert_eq!(settings(&panel), vec![50, 22]);
    }

    #[test]
    fn empty_panel_rejects_any_selection() {
        let mut panel = ControlPanel::new();

        let (_, output) = run_scripted(&ConfigureDeviceCommand, &mut panel, "1\n");

        assert_eq!(
            output,
            "\n--- Smart Devices ---\nSelect device number to configure: Invalid choice.\n"
        );
    }
}
