mod logger;

use std::env;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::EventPump;

use famicore::{CartridgeNes, Console, DISPLAY_HEIGHT, DISPLAY_WIDTH};

const SCREEN_SCALE: u32 = 2;

// ~60.1 Hz, the NTSC frame rate
const FRAME_DURATION: Duration = Duration::from_nanos(16_639_267);

// (LSB) Right, Left, Down, Up, Start, Select, A, B (MSB)
const KEYMAPPINGS: [Keycode; 8] = [
    Keycode::D,
    Keycode::A,
    Keycode::S,
    Keycode::W,
    Keycode::I,
    Keycode::J,
    Keycode::K,
    Keycode::L,
];

fn main() -> Result<(), String> {
    logger::init(log::Level::Info).map_err(|e| e.to_string())?;

    let rom_path = env::args()
        .nth(1)
        .ok_or("usage: famicore-desktop <rom.nes>")?;

    let cartridge = CartridgeNes::from_ines_file(&rom_path).map_err(|e| e.to_string())?;
    let mut console = Console::new(cartridge);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window_width = DISPLAY_WIDTH as u32 * SCREEN_SCALE;
    let window_height = DISPLAY_HEIGHT as u32 * SCREEN_SCALE;
    let window = video_subsystem
        .window("famicore", window_width, window_height)
        .position_centered()
        .opengl()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    let creator = canvas.texture_creator();
    let mut texture = creator
        .create_texture_streaming(
            PixelFormatEnum::ARGB8888,
            DISPLAY_WIDTH as u32,
            DISPLAY_HEIGHT as u32,
        )
        .map_err(|e| e.to_string())?;

    let rect = Rect::new(0, 0, window_width, window_height);

    let mut joypad_state = 0;

    loop {
        let frame_start = Instant::now();

        if get_events(&mut event_pump, &mut joypad_state) {
            log::info!("exited by user");
            break;
        }
        console.update_joypad_state(joypad_state, 0);

        let frame = console
            .next_frame()
            .iter()
            .copied()
            .flat_map(|px| {
                // RGBA pixels to little-endian ARGB bytes
                [
                    (px >> 8) as u8,
                    (px >> 16) as u8,
                    (px >> 24) as u8,
                    0xFF,
                ]
            })
            .collect::<Vec<u8>>();

        texture
            .update(None, &frame, 4 * DISPLAY_WIDTH)
            .map_err(|e| e.to_string())?;

        canvas.copy(&texture, None, rect)?;
        canvas.present();

        if let Some(rest) = FRAME_DURATION.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    Ok(())
}

/// Polls input; returns true when the user asked to quit
fn get_events(event_pump: &mut EventPump, joypad_state: &mut u8) -> bool {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => {
                return true;
            }
            Event::KeyDown {
                keycode: Some(key), ..
            } => {
                for i in 0..8 {
                    if KEYMAPPINGS[i] == key {
                        *joypad_state |= 1 << i;
                    }
                }
            }
            Event::KeyUp {
                keycode: Some(key), ..
            } => {
                for i in 0..8 {
                    if KEYMAPPINGS[i] == key {
                        *joypad_state &= !(1 << i);
                    }
                }
            }
            _ => {}
        }
    }

    false
}
