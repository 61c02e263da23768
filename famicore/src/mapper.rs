mod mapper0;
mod mapper1;
mod mapper2;
mod mapper3;

pub use self::mapper0::Mapper0;
pub use self::mapper1::Mapper1;
pub use self::mapper2::Mapper2;
pub use self::mapper3::Mapper3;

use crate::cartridge::Mirroring;
use crate::SystemControl;

pub const PRG_ROM_START: usize = 0x8000;
pub const PRG_ROM_END: usize = 0xFFFF;

pub const PRG_ROM_LO_START: usize = 0x8000;
pub const PRG_ROM_LO_END: usize = 0xBFFF;
pub const PRG_ROM_HI_START: usize = 0xC000;
pub const PRG_ROM_HI_END: usize = 0xFFFF;

pub const CHR_ROM_LO_START: usize = 0x0000;
pub const CHR_ROM_LO_END: usize = 0x0FFF;
pub const CHR_ROM_HI_START: usize = 0x1000;
pub const CHR_ROM_HI_END: usize = 0x1FFF;

pub const PRG_RAM_START: usize = 0x6000;
pub const PRG_RAM_END: usize = 0x7FFF;

pub const PRG_RAM_SIZE: usize = 0x2000;

/// Cartridge-side banking logic. The cartridge owns the PRG/CHR data and
/// passes it in; the mapper owns only its bank-select state.
pub trait Mapper: SystemControl {
    /// CPU-side read for addresses >= $4020. None means the address is
    /// unclaimed by the cartridge (open bus).
    fn mapped_cpu_read(&self, prg_rom: &[u8], addr: usize) -> Option<u8>;

    /// CPU-side write for addresses >= $4020. Returns whether the
    /// cartridge claimed the write.
    fn mapped_cpu_write(&mut self, addr: usize, byte: u8) -> bool;

    /// PPU-side read for pattern-table addresses < $2000
    fn mapped_ppu_read(&self, chr: &[u8], addr: usize) -> u8;

    /// PPU-side write for pattern-table addresses < $2000
    fn mapped_ppu_write(&mut self, chr: &mut [u8], addr: usize, byte: u8);

    /// Whether this mapper services pattern-table data at all. When false
    /// the PPU falls back to its internal pattern RAM.
    fn maps_chr(&self) -> bool {
        true
    }

    /// Mirroring override for mappers that control it at runtime
    fn get_updated_mirroring(&self) -> Option<Mirroring> {
        None
    }
}
