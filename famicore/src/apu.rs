use crate::SystemControl;

/// Audio is handled outside this core. The 2A03's APU registers still sit
/// on the bus, so this sink accepts every write and reads back as open bus.
pub struct Apu2A03;

impl SystemControl for Apu2A03 {
    fn reset(&mut self) {}
}

impl Apu2A03 {
    pub fn new() -> Self {
        Self
    }

    pub fn read_register(&mut self, _addr: u16) -> u8 {
        0
    }

    pub fn write_register(&mut self, _addr: u16, _byte: u8) {}
}

impl Default for Apu2A03 {
    fn default() -> Self {
        Self::new()
    }
}
