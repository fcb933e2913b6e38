pub mod app;
pub mod cpu;
pub mod machine;

pub use app::GameBoyApp;
pub use cpu::{Bus, BusFault, Cpu};
pub use machine::{Cartridge, CartridgeError, GameBoy};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Default integer scaling factor suggested to frontends.
pub const SCREEN_SCALE: u32 = 4;

/// DMG master clock rate in T-cycles per second.
pub const CLOCK_RATE: u32 = 4_194_304;
