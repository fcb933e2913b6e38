mod banking;
mod bus;
mod cartridge;
mod gameboy;
mod joypad;
mod ppu;
mod timer;

pub(crate) use bus::GameBoyBus;
pub use bus::InterruptFlags;
pub use cartridge::{Cartridge, CartridgeError, Mapper};
pub use gameboy::GameBoy;

/// Video RAM: 0x8000-0x9FFF.
const VRAM_SIZE: usize = 0x2000;
/// Sprite attribute table: 0xFE00-0xFE9F.
const OAM_SIZE: usize = 0xA0;
/// Working RAM: 0xC000-0xDFFF, echoed at 0xE000-0xFDFF.
const WRAM_SIZE: usize = 0x2000;
/// High RAM: 0xFF80-0xFFFE.
const HRAM_SIZE: usize = 0x7F;
/// External cartridge RAM, four switchable 8 KiB banks.
const EXTERNAL_RAM_SIZE: usize = 0x8000;
/// Boot overlay image mapped over 0x0000-0x00FF until disabled.
const BOOT_IMAGE_SIZE: usize = 0x100;
