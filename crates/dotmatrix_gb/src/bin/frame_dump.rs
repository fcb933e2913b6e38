use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use dotmatrix_gb::{GameBoy, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Headless harness: run a ROM for N frames and dump the framebuffer as
/// raw RGB24, for diffing against reference images.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(rom_path), Some(out_path)) = (args.next(), args.next()) else {
        bail!("usage: frame_dump <rom_path> <out_rgb24_path> [frames]");
    };
    let rom_path = PathBuf::from(rom_path);
    let out_path = PathBuf::from(out_path);
    let frames: u32 = args
        .next()
        .unwrap_or_else(|| "120".to_string())
        .parse()
        .context("frame count must be an integer")?;

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let mut gb = GameBoy::new();
    gb.load_rom(&rom)
        .with_context(|| format!("failed to load ROM '{}'", rom_path.display()))?;

    for _ in 0..frames {
        gb.step_frame()
            .context("bus fault while stepping; machine state is inconsistent")?;
        if gb.cpu.is_crashed() {
            eprintln!(
                "CPU crashed on opcode 0x{:02X} at pc=0x{:04X} af=0x{:04X} sp=0x{:04X}",
                gb.cpu.last_opcode(),
                gb.cpu.regs.pc,
                gb.cpu.regs.af(),
                gb.cpu.regs.sp
            );
            break;
        }
    }

    let mut buffer = vec![0u8; SCREEN_WIDTH * SCREEN_HEIGHT * 3];
    gb.frame(&mut buffer);

    std::fs::write(&out_path, &buffer)
        .with_context(|| format!("failed to write '{}'", out_path.display()))?;

    println!(
        "Wrote {} bytes ({}x{} rgb24) after {} frames of '{}' to '{}'",
        buffer.len(),
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        frames,
        gb.title(),
        out_path.display()
    );
    Ok(())
}
