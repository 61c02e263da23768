// Whole-console scenarios driving the public API only: an iNES image is
// built in memory, loaded, and executed through the Console harness.

use famicore::{CartridgeNes, Console};

const HEADER_SIZE: usize = 16;
const PRG_BANK_SIZE: usize = 0x4000;
const CHR_BANK_SIZE: usize = 0x2000;

/// Builds a one-bank NROM image; the closure fills PRG and CHR
fn nrom_image(setup: impl Fn(&mut [u8], &mut [u8])) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_SIZE + PRG_BANK_SIZE + CHR_BANK_SIZE];
    data[0..4].copy_from_slice(b"NES\x1A");
    data[4] = 1;
    data[5] = 1;

    let (prg, chr) = data[HEADER_SIZE..].split_at_mut(PRG_BANK_SIZE);
    setup(prg, chr);

    data
}

fn boot(image: &[u8]) -> Console {
    Console::new(CartridgeNes::from_ines_bytes(image).unwrap())
}

#[test]
fn nrom_boot_runs_first_instructions() {
    let image = nrom_image(|prg, _chr| {
        // LDA #$42 / STA $0200 / JMP $8005
        prg[0..8].copy_from_slice(&[0xA9, 0x42, 0x8D, 0x00, 0x02, 0x4C, 0x05, 0x80]);
        prg[0x3FFC] = 0x00;
        prg[0x3FFD] = 0x80;
    });
    let mut console = boot(&image);

    for _ in 0..3 {
        console.step_instruction();
    }

    assert_eq!(console.bus.read_byte(0x0200), 0x42);
    assert_eq!(console.cpu.program_counter, 0x8005);
}

#[test]
fn nmi_is_delivered_at_vblank() {
    let image = nrom_image(|prg, _chr| {
        prg[0..3].copy_from_slice(&[0x4C, 0x00, 0x80]); // JMP $8000
        prg[0x1000..0x1003].copy_from_slice(&[0x4C, 0x00, 0x90]); // handler spins
        prg[0x3FFA] = 0x00; // NMI vector -> $9000
        prg[0x3FFB] = 0x90;
        prg[0x3FFC] = 0x00; // reset vector -> $8000
        prg[0x3FFD] = 0x80;
    });
    let mut console = boot(&image);
    console.bus.write_byte(0x2000, 0x80); // PPUCTRL: NMI on

    let mut steps = 0;
    while console.cpu.program_counter != 0x9000 {
        console.step_instruction();

        steps += 1;
        assert!(steps < 200_000, "NMI never fired");
    }

    assert_eq!(console.cpu.program_counter, console.bus.read_word(0xFFFA, false));

    // PC (high then low) and P were pushed
    let sp = console.cpu.stack_pointer;
    assert_eq!(sp, 0xFA);

    let status = console.bus.read_byte(0x0100 + sp as u16 + 1);
    let lo = console.bus.read_byte(0x0100 + sp as u16 + 2) as u16;
    let hi = console.bus.read_byte(0x0100 + sp as u16 + 3) as u16;
    let pushed_pc = (hi << 8) | lo;

    assert!((0x8000..=0x8002).contains(&pushed_pc));
    assert_ne!(status & 0x20, 0);
}

#[test]
fn sprite_zero_hit_is_detected() {
    let image = nrom_image(|prg, chr| {
        prg[0..3].copy_from_slice(&[0x4C, 0x00, 0x80]);
        prg[0x3FFC] = 0x00;
        prg[0x3FFD] = 0x80;

        // tile 1: every pixel colour index 1
        for row in 0..8 {
            chr[16 + row] = 0xFF;
        }
    });
    let mut console = boot(&image);

    // sprite 0 at (0x40, 0x21) on screen, tile 1, no flips, front priority
    for (i, byte) in [0x20u8, 0x01, 0x00, 0x40].iter().enumerate() {
        console.bus.write_byte(0x0700 + i as u16, *byte);
    }
    console.bus.write_byte(0x4014, 0x07);

    // background tile 1 at tile (8, 4), covering pixel (0x40, 0x21)
    console.bus.write_byte(0x2006, 0x20);
    console.bus.write_byte(0x2006, 0x88);
    console.bus.write_byte(0x2007, 0x01);

    // background + sprites on, no left-column clipping
    console.bus.write_byte(0x2001, 0x1E);

    // run past the sprite's scanlines, staying inside the frame
    while console.ppu.scanline < 0x30 {
        console.step_instruction();
    }

    assert_ne!(console.bus.read_byte(0x2002) & 0x40, 0);
}

#[test]
fn ppudata_reads_are_buffered() {
    let image = nrom_image(|prg, _chr| {
        prg[0..3].copy_from_slice(&[0x4C, 0x00, 0x80]);
        prg[0x3FFC] = 0x00;
        prg[0x3FFD] = 0x80;
    });
    let mut console = boot(&image);

    console.bus.write_byte(0x2006, 0x20);
    console.bus.write_byte(0x2006, 0x00);
    console.bus.write_byte(0x2007, 0xAA);
    console.bus.write_byte(0x2007, 0xBB);

    console.bus.write_byte(0x2006, 0x20);
    console.bus.write_byte(0x2006, 0x00);

    assert_eq!(console.bus.read_byte(0x2007), 0x00); // stale buffer
    assert_eq!(console.bus.read_byte(0x2007), 0xAA);
    assert_eq!(console.bus.read_byte(0x2007), 0xBB);
}

#[test]
fn oam_dma_copies_a_page() {
    let image = nrom_image(|prg, _chr| {
        prg[0..3].copy_from_slice(&[0x4C, 0x00, 0x80]);
        prg[0x3FFC] = 0x00;
        prg[0x3FFD] = 0x80;
    });
    let mut console = boot(&image);

    for i in 0..=255u8 {
        console.bus.write_byte(0x0700 + i as u16, i);
    }
    console.bus.write_byte(0x4014, 0x07);

    assert_eq!(console.bus.ppu_bus.read_oam(0x00), 0x00);
    assert_eq!(console.bus.ppu_bus.read_oam(0x80), 0x80);
    assert_eq!(console.bus.ppu_bus.read_oam(0xFF), 0xFF);
}

#[test]
fn next_frame_advances_frame_count() {
    let image = nrom_image(|prg, _chr| {
        prg[0..3].copy_from_slice(&[0x4C, 0x00, 0x80]);
        prg[0x3FFC] = 0x00;
        prg[0x3FFD] = 0x80;
    });
    let mut console = boot(&image);

    console.next_frame();
    assert_eq!(console.ppu.frame_count, 1);

    console.next_frame();
    assert_eq!(console.ppu.frame_count, 2);
}

#[test]
fn warm_reset_restarts_at_reset_vector() {
    let image = nrom_image(|prg, _chr| {
        prg[0..8].copy_from_slice(&[0xA9, 0x42, 0x8D, 0x00, 0x02, 0x4C, 0x05, 0x80]);
        prg[0x3FFC] = 0x00;
        prg[0x3FFD] = 0x80;
    });
    let mut console = boot(&image);

    for _ in 0..3 {
        console.step_instruction();
    }
    let sp_before = console.cpu.stack_pointer;

    console.reset();

    assert_eq!(console.cpu.program_counter, 0x8000);
    assert_eq!(console.cpu.stack_pointer, sp_before.wrapping_sub(3));
}
