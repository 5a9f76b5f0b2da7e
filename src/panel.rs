// panel.rs
use crate::{
    devices::Device,
    error::AppError,
    events::{PanelEvent, Power},
};
use std::fmt;
use tracing::{debug, info, warn};

/// One row of a device listing. `position` is 1-based.
#[derive(Debug, Clone, Copy)]
pub struct DeviceListing<'a> {
    pub position: usize,
    pub device: &'a Device,
}

impl fmt::Display for DeviceListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} in {} - Status: {}",
            self.position,
            self.device.name(),
            self.device.location(),
            self.device.power()
        )
    }
}

/// Owns every registered device, in the order they were added.
#[derive(Debug, Default)]
pub struct ControlPanel {
    devices: Vec<Device>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn add_device(&mut self, device: Device) -> PanelEvent {
        debug!(name = device.name(), location = device.location(), "Adding device");
        let event = PanelEvent::DeviceAdded {
            name: device.name().to_string(),
            location: device.location().to_string(),
        };
        self.devices.push(device);
        event
    }

    pub fn list_devices(&self) -> impl Iterator<Item = DeviceListing<'_>> {
        self.devices
            .iter()
            .enumerate()
            .map(|(index, device)| DeviceListing {
                position: index + 1,
                device,
            })
    }

    pub fn turn_on_all_devices(&mut self) -> Vec<PanelEvent> {
        self.switch_all(Power::On)
    }

    pub fn turn_off_all_devices(&mut self) -> Vec<PanelEvent> {
        self.switch_all(Power::Off)
    }

    fn switch_all(&mut self, power: Power) -> Vec<PanelEvent> {
        if self.is_empty() {
            debug!(%power, "No devices to switch");
        } else {
            info!(%power, count = self.len(), "Switching all devices");
        }
        self.devices
            .iter_mut()
            .map(|device| match power {
                Power::On => device.turn_on(),
                Power::Off => device.turn_off(),
            })
            .collect()
    }

    /// Resolves a typed device number into a 1-based position.
    pub fn select(&self, choice: &str) -> Result<usize, AppError> {
        let position = choice
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| (1..=self.len()).contains(n));

        position.ok_or_else(|| {
            warn!(choice, count = self.len(), "Rejected device selection");
            AppError::InvalidChoice
        })
    }

    pub fn device(&self, position: usize) -> Option<&Device> {
        position.checked_sub(1).and_then(|index| self.devices.get(index))
    }

    pub fn configure_device(&mut self, position: usize, value: i32) -> Result<PanelEvent, AppError> {
        let device = position
            .checked_sub(1)
            .and_then(|index| self.devices.get_mut(index))
            .ok_or(AppError::InvalidChoice)?;
        Ok(device.configure(value))
    }
}
