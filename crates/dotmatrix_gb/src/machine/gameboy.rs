use dotmatrix_common::Key;

use crate::cpu::{BusFault, Cpu};
use crate::CLOCK_RATE;

use super::bus::InterruptFlags;
use super::cartridge::CartridgeError;
use super::GameBoyBus;

/// T-cycle budget of a single display frame at ~60 Hz.
const CYCLES_PER_FRAME: u32 = CLOCK_RATE / 60;

/// High-level Game Boy machine: the CPU core plus the bus that owns all
/// shared state.
///
/// The host drives it one instruction at a time via [`step`](Self::step),
/// or by whole frames via [`step_frame`](Self::step_frame); each step
/// feeds the instruction's elapsed cycles to the timer and the pixel
/// unit and then resolves pending interrupts, in that order.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
    last_ticks: u64,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::default(),
            last_ticks: 0,
        }
    }

    /// Reset CPU, memory regions and peripherals to their power-on
    /// state. The loaded cartridge (and boot image, if any) survive.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
        self.last_ticks = 0;
        if self.bus.boot_active {
            self.cpu.regs.pc = 0x0000;
        }
    }

    /// Load a cartridge image. Empty or oversized images are rejected
    /// with a typed error for the caller to handle.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), CartridgeError> {
        self.bus.load_rom(rom)
    }

    /// Map a boot overlay over the first 256 bytes of address space and
    /// start execution from 0x0000. The overlay stays mapped until the
    /// program writes the 0xFF50 latch.
    pub fn load_boot_image(&mut self, image: &[u8]) {
        self.bus.load_boot_image(image);
        self.cpu.regs.pc = 0x0000;
    }

    /// Run one instruction and its peripheral fallout.
    ///
    /// Effects are ordered: the instruction mutates CPU/bus state, the
    /// elapsed cycles feed the timer, then the pixel unit (skipped while
    /// stopped), then pending interrupts are resolved. Returns the
    /// cumulative cycle counter. A crashed core returns without any
    /// further effect.
    pub fn step(&mut self) -> Result<u64, BusFault> {
        let ticks = self.cpu.step(&mut self.bus)?;
        if self.cpu.is_crashed() {
            return Ok(ticks);
        }

        let elapsed = (ticks - self.last_ticks) as u32;
        self.bus.update_timers(elapsed);

        if !self.cpu.is_stopped() {
            let video = self.bus.tick_video(elapsed);
            if video.vblank {
                self.bus.request_interrupt(InterruptFlags::VBLANK);
            }
            if video.lcd_stat {
                self.bus.request_interrupt(InterruptFlags::LCD);
            }
        }

        self.cpu.check_interrupts(&mut self.bus)?;
        self.last_ticks = ticks;
        Ok(ticks)
    }

    /// Step instructions until at least `budget` cycles have elapsed or
    /// the core crashes. Returns the cycles actually spent.
    pub fn run_cycles(&mut self, budget: u32) -> Result<u32, BusFault> {
        let mut spent = 0u32;
        while spent < budget && !self.cpu.is_crashed() {
            let before = self.last_ticks;
            let ticks = self.step()?;
            let elapsed = (ticks - before) as u32;
            if elapsed == 0 {
                break;
            }
            spent += elapsed;
        }
        Ok(spent)
    }

    /// Step the machine for one display frame's worth of time.
    pub fn step_frame(&mut self) -> Result<(), BusFault> {
        self.run_cycles(CYCLES_PER_FRAME).map(|_| ())
    }

    /// Copy the current 160x144 RGB24 framebuffer into `buffer`.
    pub fn frame(&self, buffer: &mut [u8]) {
        let source = self.bus.framebuffer();
        let len = source.len().min(buffer.len());
        buffer[..len].copy_from_slice(&source[..len]);
    }

    /// Cartridge title from the header, empty when nothing is loaded.
    pub fn title(&self) -> String {
        self.bus
            .cartridge()
            .map(|cartridge| cartridge.title())
            .unwrap_or_default()
    }

    /// Forward a logical key event to the joypad.
    ///
    /// Mapping: arrows to the d-pad, Z/X to A/B, A to Select, S to
    /// Start. Input wakes a stopped core; a press whose button group is
    /// selected raises the joypad interrupt.
    pub fn handle_key(&mut self, key: Key, pressed: bool) {
        let Some(index) = Self::key_index(key) else {
            return;
        };
        self.cpu.stopped = false;
        if pressed {
            if self.bus.joypad.key_pressed(index) {
                self.bus.request_interrupt(InterruptFlags::JOYPAD);
            }
        } else {
            self.bus.joypad.key_released(index);
        }
    }

    /// Mark every button released, as the hardware sees an untouched
    /// pad.
    pub fn release_all_keys(&mut self) {
        for index in 0..8 {
            self.bus.joypad.key_released(index);
        }
    }

    fn key_index(key: Key) -> Option<u8> {
        match key {
            Key::Right => Some(0),
            Key::Left => Some(1),
            Key::Up => Some(2),
            Key::Down => Some(3),
            Key::Z => Some(4), // A
            Key::X => Some(5), // B
            Key::A => Some(6), // Select
            Key::S => Some(7), // Start
            _ => None,
        }
    }
}
