use std::{fs::read, io};

use crate::mapper::*;
use crate::SystemControl;

// The size of each PRG-ROM bank
pub const PRG_ROM_SIZE: usize = 0x4000;

// The size of each CHR-ROM bank
pub const CHR_ROM_SIZE: usize = 0x2000;

const INES_HEADER_SIZE: usize = 16;
const INES_MAGIC: [u8; 4] = [0x4E, 0x45, 0x53, 0x1A];

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    HORIZONTAL,
    VERTICAL,
    ONESCREEN_LO,
    ONESCREEN_HI,
}

pub struct CartridgeNes {
    mirroring: Mirroring,
    pub(crate) mapper: Box<dyn Mapper>,

    prg_rom: Vec<u8>,
    // CHR-ROM, or 8KB of CHR-RAM for cartridges with no CHR banks
    chr: Vec<u8>,
}

impl CartridgeNes {
    pub fn from_ines_file(file_path: &str) -> Result<Self, io::Error> {
        let data = read(file_path)?;

        CartridgeNes::from_ines_bytes(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn from_ines_bytes(data: &[u8]) -> Result<Self, String> {
        if data.len() < INES_HEADER_SIZE {
            return Err(String::from("File too short for an iNES header"));
        }

        // First three bytes must be "NES" in ASCII, followed by 0x1A
        if data[0..4] != INES_MAGIC {
            return Err(String::from("Not an iNES file"));
        }

        let prg_rom_banks = data[4] as usize;
        let chr_rom_banks = data[5] as usize;

        if prg_rom_banks == 0 {
            return Err(String::from("iNES file declares no PRG-ROM"));
        }

        if data[6] & 0x04 != 0 {
            return Err(String::from("iNES files with trainers are not supported"));
        }

        if data[6] & 0x08 != 0 {
            return Err(String::from("Four-screen mirroring is not supported"));
        }

        let mirroring = if data[6] & 0x01 == 0 {
            Mirroring::HORIZONTAL
        } else {
            Mirroring::VERTICAL
        };

        let battery_backed = data[6] & 0x02 != 0;
        let prg_ram_banks = data[8];

        let mapper_num = (data[7] & 0xF0) | (data[6] >> 4);

        let prg_rom_len = prg_rom_banks * PRG_ROM_SIZE;
        let chr_rom_len = chr_rom_banks * CHR_ROM_SIZE;

        if data.len() < INES_HEADER_SIZE + prg_rom_len + chr_rom_len {
            return Err(format!(
                "iNES file truncated: header declares {} PRG and {} CHR bank(s)",
                prg_rom_banks, chr_rom_banks
            ));
        }

        let prg_rom = data[INES_HEADER_SIZE..INES_HEADER_SIZE + prg_rom_len].to_vec();

        let chr = if chr_rom_banks == 0 {
            vec![0; CHR_ROM_SIZE]
        } else {
            let chr_start = INES_HEADER_SIZE + prg_rom_len;
            data[chr_start..chr_start + chr_rom_len].to_vec()
        };

        let mapper: Box<dyn Mapper> = match mapper_num {
            0 => Box::new(Mapper0::new(prg_rom_banks, chr_rom_banks)),
            1 => Box::new(Mapper1::new(prg_rom_banks, chr_rom_banks)),
            2 => Box::new(Mapper2::new(prg_rom_banks, chr_rom_banks)),
            3 => Box::new(Mapper3::new(prg_rom_banks, chr_rom_banks)),
            _ => return Err(format!("Unsupported iNES mapper {}", mapper_num)),
        };

        log::info!(
            "Loaded cartridge: mapper {}, PRG-ROM banks: {}, CHR-ROM banks: {}, {:?}, PRG-RAM banks: {}, battery?: {}",
            mapper_num, prg_rom_banks, chr_rom_banks, mirroring, prg_ram_banks, battery_backed
        );

        Ok(Self {
            mirroring,
            mapper,
            prg_rom,
            chr,
        })
    }

    pub fn cpu_read(&self, addr: u16) -> Option<u8> {
        self.mapper.mapped_cpu_read(&self.prg_rom, addr as usize)
    }

    pub fn cpu_write(&mut self, addr: u16, byte: u8) -> bool {
        self.mapper.mapped_cpu_write(addr as usize, byte)
    }

    pub fn ppu_read(&self, addr: u16) -> u8 {
        self.mapper.mapped_ppu_read(&self.chr, addr as usize)
    }

    pub fn ppu_write(&mut self, addr: u16, byte: u8) {
        self.mapper.mapped_ppu_write(&mut self.chr, addr as usize, byte);
    }

    pub fn maps_chr(&self) -> bool {
        self.mapper.maps_chr()
    }

    // MMC1 re-routes mirroring at runtime, the others keep the header's mode
    pub fn mirroring(&self) -> Mirroring {
        self.mapper.get_updated_mirroring().unwrap_or(self.mirroring)
    }
}

impl SystemControl for CartridgeNes {
    fn reset(&mut self) {
        self.mapper.reset();
    }
}

#[cfg(test)]
impl CartridgeNes {
    /// Single-bank NROM cartridge with CHR-RAM, for bus/CPU/PPU tests
    pub fn test_new() -> Self {
        CartridgeNes {
            mirroring: Mirroring::HORIZONTAL,
            mapper: Box::new(Mapper0::new(1, 0)),
            prg_rom: vec![0; PRG_ROM_SIZE],
            chr: vec![0; CHR_ROM_SIZE],
        }
    }

    /// Same as `test_new`, but vertically mirrored
    pub fn test_vertical() -> Self {
        CartridgeNes {
            mirroring: Mirroring::VERTICAL,
            ..CartridgeNes::test_new()
        }
    }

    /// Replaces PRG-ROM contents starting at $8000
    pub fn load_prg(&mut self, data: &[u8]) {
        self.prg_rom[..data.len()].copy_from_slice(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ines_bytes(prg_banks: u8, chr_banks: u8, flag6: u8, flag7: u8) -> Vec<u8> {
        let mut data = vec![0u8; INES_HEADER_SIZE];
        data[0..4].copy_from_slice(&INES_MAGIC);
        data[4] = prg_banks;
        data[5] = chr_banks;
        data[6] = flag6;
        data[7] = flag7;
        data.resize(
            INES_HEADER_SIZE
                + prg_banks as usize * PRG_ROM_SIZE
                + chr_banks as usize * CHR_ROM_SIZE,
            0,
        );
        data
    }

    #[test]
    fn test_load_nrom() {
        let cart = CartridgeNes::from_ines_bytes(&ines_bytes(1, 1, 0x01, 0x00)).unwrap();
        assert_eq!(cart.mirroring(), Mirroring::VERTICAL);
        assert!(cart.maps_chr());
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut data = ines_bytes(1, 1, 0x00, 0x00);
        data[0] = b'X';
        assert!(CartridgeNes::from_ines_bytes(&data).is_err());
    }

    #[test]
    fn test_rejects_trainer() {
        let data = ines_bytes(1, 1, 0x04, 0x00);
        assert!(CartridgeNes::from_ines_bytes(&data).is_err());
    }

    #[test]
    fn test_rejects_unsupported_mapper() {
        let data = ines_bytes(1, 1, 0x40, 0x40); // mapper 68
        assert!(CartridgeNes::from_ines_bytes(&data).is_err());
    }

    #[test]
    fn test_rejects_truncated_prg() {
        let mut data = ines_bytes(2, 1, 0x00, 0x00);
        data.truncate(INES_HEADER_SIZE + PRG_ROM_SIZE);
        assert!(CartridgeNes::from_ines_bytes(&data).is_err());
    }

    #[test]
    fn test_chr_ram_when_no_chr_banks() {
        let mut cart = CartridgeNes::from_ines_bytes(&ines_bytes(1, 0, 0x00, 0x00)).unwrap();
        cart.ppu_write(0x1000, 0x55);
        assert_eq!(cart.ppu_read(0x1000), 0x55);
    }

    #[test]
    fn test_single_bank_prg_wraps() {
        let mut data = ines_bytes(1, 1, 0x00, 0x00);
        data[INES_HEADER_SIZE] = 0xAB; // first PRG byte
        let cart = CartridgeNes::from_ines_bytes(&data).unwrap();
        assert_eq!(cart.cpu_read(0x8000), Some(0xAB));
        assert_eq!(cart.cpu_read(0xC000), Some(0xAB));
    }
}
