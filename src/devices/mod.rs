// devices/mod.rs
mod air_conditioner;
mod light;

pub use air_conditioner::AirConditioner;
pub use light::Light;

use crate::events::{PanelEvent, Power};
use tracing::{debug, info};

/// The one integer knob a device exposes to `configure`.
pub trait Setting {
    /// Lowercase name used in prompts, e.g. `brightness`.
    fn label(&self) -> &'static str;
    /// Capitalised name used in confirmations, e.g. `Brightness`.
    fn title(&self) -> &'static str;
    /// Suffix printed after the value.
    fn unit(&self) -> &'static str;
    fn value(&self) -> i32;
    fn set(&mut self, value: i32);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeviceKind {
    Light(Light),
    AirConditioner(AirConditioner),
}

impl DeviceKind {
    fn setting(&self) -> &dyn Setting {
        match self {
            DeviceKind::Light(light) => light,
            DeviceKind::AirConditioner(ac) => ac,
        }
    }

    fn setting_mut(&mut self) -> &mut dyn Setting {
        match self {
            DeviceKind::Light(light) => light,
            DeviceKind::AirConditioner(ac) => ac,
        }
    }
}

/// A simulated smart device. Power state only changes through
/// [`Device::turn_on`] and [`Device::turn_off`].
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    name: String,
    location: String,
    is_on: bool,
    kind: DeviceKind,
}

impl Device {
    pub fn new(name: impl Into<String>, location: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            is_on: false,
            kind,
        }
    }

    pub fn light(name: impl Into<String>, location: impl Into<String>, brightness: i32) -> Self {
        Self::new(name, location, DeviceKind::Light(Light::new(brightness)))
    }

    pub fn air_conditioner(
        name: impl Into<String>,
        location: impl Into<String>,
        temperature: i32,
    ) -> Self {
        Self::new(
            name,
            location,
            DeviceKind::AirConditioner(AirConditioner::new(temperature)),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn power(&self) -> Power {
        Power::from(self.is_on())
    }

    pub fn setting(&self) -> &dyn Setting {
        self.kind.setting()
    }

    pub fn turn_on(&mut self) -> PanelEvent {
        self.switch(true)
    }

    pub fn turn_off(&mut self) -> PanelEvent {
        self.switch(false)
    }

    fn switch(&mut self, on: bool) -> PanelEvent {
        self.is_on = on;
        debug!(name = %self.name, location = %self.location, power = %self.power(), "Power switched");
        PanelEvent::PowerChanged {
            name: self.name.clone(),
            location: self.location.clone(),
            power: self.power(),
        }
    }

    /// Stores an already-parsed value in the device's setting. No range
    /// check is applied, brightness above 100 is kept as given.
    pub fn configure(&mut self, value: i32) -> PanelEvent {
        let setting = self.kind.setting_mut();
        let previous = setting.value();
        setting.set(value);
        info!(name = %self.name, setting = setting.label(), previous, value, "Device configured");
        PanelEvent::SettingChanged {
            setting: setting.title(),
            value,
            unit: setting.unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Device::light("Lamp", "Den", 50))]
    #[case(Device::air_conditioner("AC1", "Hall", 22))]
    fn new_devices_start_off(#[case] device: Device) {
        assert!(!device.is_on());
        assert_eq!(device.power(), Power::Off);
    }

    #[test]
    fn last_power_call_wins() {
        let mut device = Device::light("Lamp", "Den", 50);

        device.turn_on();
        device.turn_on();
        assert!(device.is_on());

        device.turn_off();
        assert!(!device.is_on());

        device.turn_off();
        device.turn_on();
        assert!(device.is_on());
    }

    #[test]
    fn power_changes_report_name_and_location() {
        let mut device = Device::air_conditioner("AC1", "Hall", 22);

        assert_eq!(device.turn_on().to_string(), "AC1 in Hall is now ON.");
        assert_eq!(device.turn_off().to_string(), "AC1 in Hall is now OFF.");
    }

    #[test]
    fn configure_sets_light_brightness() {
        let mut device = Device::light("Lamp", "Den", 50);

        let event = device.configure(80);

        assert_eq!(event.to_string(), "Brightness set to 80%");
        assert_eq!(device.setting().value(), 80);
        assert_eq!(device.setting().unit(), "%");
    }

    #[test]
    fn configure_sets_air_conditioner_temperature() {
        let mut device = Device::air_conditioner("AC1", "Hall", 22);

        let event = device.configure(-3);

        assert_eq!(event.to_string(), "Temperature set to -3°C");
        assert_eq!(device.setting().value(), -3);
    }

    #[test]
    fn brightness_outside_percentage_range_is_kept() {
        let mut device = Device::light("Lamp", "Den", 150);
        assert_eq!(device.setting().value(), 150);

        device.configure(-20);
        assert_eq!(device.setting().value(), -20);
    }

    #[test]
    fn configure_leaves_power_alone() {
        let mut device = Device::light("Lamp", "Den", 50);
        device.turn_on();

        device.configure(10);

        assert!(device.is_on());
    }
}
