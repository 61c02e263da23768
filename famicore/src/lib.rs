#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate bitflags;

mod apu;
mod bus;
mod cartridge;
mod console;
mod cpu;
mod mapper;
mod ppu;

pub use apu::Apu2A03;
pub use bus::SystemBus;
pub use cartridge::{CartridgeNes, Mirroring};
pub use console::Console;
pub use cpu::Cpu6502;
pub use ppu::*;

pub const DISPLAY_WIDTH: usize = 256;
pub const DISPLAY_HEIGHT: usize = 240;

// Based on a NTSC system
pub const BASE_CPU_FREQUENCY: f32 = 1_789_773.0;
pub const BASE_PPU_FREQUENCY: f32 = 3.0 * BASE_CPU_FREQUENCY;

/// PPU dots in one frame; one fewer on odd frames when the
/// background is enabled (the pre-render line drops a dot).
pub const DOTS_PER_FRAME: u32 = 341 * 262;

pub trait SystemControl {
    fn reset(&mut self);
}
