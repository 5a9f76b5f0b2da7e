// light.rs
use super::Setting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Light {
    brightness: i32,
}

impl Light {
    pub fn new(brightness: i32) -> Self {
        Self { brightness }
    }
}

impl Setting for Light {
    fn label(&self) -> &'static str {
        "brightness"
    }

    fn title(&self) -> &'static str {
        "Brightness"
    }

    fn unit(&self) -> &'static str {
        "%"
    }

    fn value(&self) -> i32 {
        self.brightness
    }

    fn set(&mut self, value: i32) {
        self.brightness = value;
    }
}
