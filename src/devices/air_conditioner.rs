// air_conditioner.rs
use super::Setting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirConditioner {
    temperature: i32,
}

impl AirConditioner {
    pub fn new(temperature: i32) -> Self {
        Self { temperature }
    }
}

impl Setting for AirConditioner {
    fn label(&self) -> &'static str {
        "temperature"
    }

    fn title(&self) -> &'static str {
        "Temperature"
    }

    fn unit(&self) -> &'static str {
        "°C"
    }

    fn value(&self) -> i32 {
        self.temperature
    }

    fn set(&mut self, value: i32) {
        self.temperature = value;
    }
}
