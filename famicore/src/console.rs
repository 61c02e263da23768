use crate::bus::SystemBus;
use crate::cartridge::CartridgeNes;
use crate::cpu::Cpu6502;
use crate::ppu::{Colour, Ppu2C03};
use crate::{SystemControl, DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Owns the whole machine and drives the CPU/PPU interleave: one CPU
/// instruction, then three PPU dots per cycle it took.
pub struct Console {
    pub cpu: Cpu6502,
    pub ppu: Ppu2C03,
    pub bus: SystemBus,
}

impl Console {
    pub fn new(cartridge: CartridgeNes) -> Self {
        let mut bus = SystemBus::new(cartridge);
        let mut cpu = Cpu6502::new();
        cpu.power_on(&mut bus);

        Self {
            cpu,
            ppu: Ppu2C03::new(),
            bus,
        }
    }

    /// Runs one instruction and the PPU dots it paid for; returns the
    /// CPU cycles consumed
    pub fn step_instruction(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);

        for _ in 0..cycles * 3 {
            self.ppu.clock(&mut self.bus);
        }

        // NMI raised during those dots lands on the next instruction
        if self.ppu.nmi_requested() {
            self.cpu.signal_nmi();
        }

        cycles
    }

    /// Runs until the PPU finishes the frame in progress
    pub fn next_frame(&mut self) -> &[Colour; DISPLAY_WIDTH * DISPLAY_HEIGHT] {
        while !self.ppu.frame_ready() {
            self.step_instruction();
        }

        &self.ppu.frame_buffer
    }

    /// Warm boot
    pub fn reset(&mut self) {
        self.bus.reset();
        self.ppu.reset();
        self.cpu.reset(&mut self.bus);
    }

    pub fn update_joypad_state(&mut self, joypad_state1: u8, joypad_state2: u8) {
        self.bus.update_joypad_state(joypad_state1, joypad_state2);
    }
}
