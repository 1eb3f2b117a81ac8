use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use minifb::{Key, Scale, Window, WindowOptions};
use simple_logger::SimpleLogger;

use chip8vm::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chip8vm::interpreter::Interpreter;
use chip8vm::machine::Machine;
use chip8vm::Result;

/// Instructions executed per rendered frame. The engine has no opinion on
/// cadence; this is host configuration.
const CYCLES_PER_FRAME: usize = 8;

/// Lit pixels are white, dark pixels a deep purple.
const PRIMARY_COLOR: u32 = 0x00FF_FFFF;
const SECONDARY_COLOR: u32 = 0x0070_1F7E;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The path of the rom to load
    #[arg(short, long, value_name = "FILE")]
    rom_path: PathBuf,
}

/// QWERTY mapping for the hex keypad. Physical mapping belongs to the host,
/// never to the interpreter.
fn keymap() -> HashMap<Key, u8> {
    HashMap::from([
        (Key::Key1, 0x1),
        (Key::Key2, 0x2),
        (Key::Key3, 0x3),
        (Key::Key4, 0xC),
        (Key::Q, 0x4),
        (Key::W, 0x5),
        (Key::E, 0x6),
        (Key::R, 0xD),
        (Key::A, 0x7),
        (Key::S, 0x8),
        (Key::D, 0x9),
        (Key::F, 0xE),
        (Key::Z, 0xA),
        (Key::X, 0x0),
        (Key::C, 0xB),
        (Key::V, 0xF),
    ])
}

fn run_rom(bytes: &[u8]) -> Result<()> {
    let keymap = keymap();

    let mut machine = Machine::with_rom(bytes)?;
    let mut interpreter = Interpreter::new();

    let mut buffer = vec![SECONDARY_COLOR; DISPLAY_WIDTH * DISPLAY_HEIGHT];

    let mut opts = WindowOptions::default();
    opts.scale = Scale::FitScreen;

    let mut window = Window::new(
        "CHIP-8 - ESC to exit",
        DISPLAY_WIDTH,
        DISPLAY_HEIGHT,
        opts,
    )?;

    // Limit to max ~60 fps update rate; timers tick once per frame.
    window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));

    let mut tone_playing = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        machine.keypad.release_all();
        for key in window.get_keys() {
            if let Some(&code) = keymap.get(&key) {
                machine.keypad.press(code);
            }
        }

        for _ in 0..CYCLES_PER_FRAME {
            interpreter
                .step(&mut machine)
                .context("interpreter halted")?;
        }

        machine.tick_timers();

        // No audio backend here; the sound gate is surfaced through the log.
        if machine.sound_active() != tone_playing {
            tone_playing = !tone_playing;
            log::debug!("tone {}", if tone_playing { "on" } else { "off" });
        }

        for (out, &on) in buffer.iter_mut().zip(machine.display.pixels()) {
            *out = if on { PRIMARY_COLOR } else { SECONDARY_COLOR };
        }

        window.update_with_buffer(&buffer, DISPLAY_WIDTH, DISPLAY_HEIGHT)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let cli = Cli::parse();

    if cli.rom_path.extension().and_then(|e| e.to_str()) != Some("ch8") {
        bail!("{} doesn't have a .ch8 extension", cli.rom_path.display());
    }

    let bytes = std::fs::read(&cli.rom_path)
        .with_context(|| format!("could not read {}", cli.rom_path.display()))?;

    log::info!("loaded {} ({} bytes)", cli.rom_path.display(), bytes.len());

    run_rom(&bytes)
}
