// events/mod.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    On,
    Off,
}

impl From<bool> for Power {
    fn from(on: bool) -> Self {
        if on { Power::On } else { Power::Off }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Power::On => f.write_str("ON"),
            Power::Off => f.write_str("OFF"),
        }
    }
}

/// What a panel or device operation did, ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    DeviceAdded {
        name: String,
        location: String,
    },
    PowerChanged {
        name: String,
        location: String,
        power: Power,
    },
    SettingChanged {
        setting: &'static str,
        value: i32,
        unit: &'static str,
    },
}

impl fmt::Display for PanelEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelEvent::DeviceAdded { name, location } => write!(f, "Added {name} to {location}"),
            PanelEvent::PowerChanged {
                name,
                location,
                power,
            } => write!(f, "{name} in {location} is now {power}."),
            PanelEvent::SettingChanged {
                setting,
                value,
                unit,
            } => write!(f, "{setting} set to {value}{unit}"),
        }
    }
}
