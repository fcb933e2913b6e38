use crate::cpu::{Bus, BusFault};

use super::banking::BankController;
use super::cartridge::{Cartridge, CartridgeError, Mapper};
use super::joypad::Joypad;
use super::ppu::{Ppu, VideoInterrupts};
use super::timer::Timer;
use super::{BOOT_IMAGE_SIZE, EXTERNAL_RAM_SIZE, HRAM_SIZE, OAM_SIZE, VRAM_SIZE, WRAM_SIZE};

bitflags::bitflags! {
    /// Interrupt request/enable bits shared by 0xFF0F and 0xFFFF.
    /// Descending priority: v-blank, LCD status, timer, joypad.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD    = 1 << 1;
        const TIMER  = 1 << 2;
        const JOYPAD = 1 << 4;
    }
}

/// State of the IO window at power-on, indexed from 0xFF00.
const IO_POWER_ON: [u8; 0x100] = [
    0x0F, 0x00, 0x7C, 0xFF, 0x00, 0x00, 0x00, 0xF8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01,
    0x80, 0xBF, 0xF3, 0xFF, 0xBF, 0xFF, 0x3F, 0x00, 0xFF, 0xBF, 0x7F, 0xFF, 0x9F, 0xFF, 0xBF, 0xFF,
    0xFF, 0x00, 0x00, 0xBF, 0x77, 0xF3, 0xF1, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF,
    0x91, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x7E, 0xFF, 0xFE,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x3E, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC0, 0xFF, 0xC1, 0x00, 0xFE, 0xFF, 0xFF, 0xFF,
    0xF8, 0xFF, 0x00, 0x00, 0x00, 0x8F, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
    0x45, 0xEC, 0x52, 0xFA, 0x08, 0xB7, 0x07, 0x5D, 0x01, 0xFD, 0xC0, 0xFF, 0x08, 0xFC, 0x00, 0xE5,
    0x0B, 0xF8, 0xC2, 0xCE, 0xF4, 0xF9, 0x0F, 0x7F, 0x45, 0x6D, 0x3D, 0xFE, 0x46, 0x97, 0x33, 0x5E,
    0x08, 0xEF, 0xF1, 0xFF, 0x86, 0x83, 0x24, 0x74, 0x12, 0xFC, 0x00, 0x9F, 0xB4, 0xB7, 0x06, 0xD5,
    0xD0, 0x7A, 0x00, 0x9E, 0x04, 0x5F, 0x41, 0x2F, 0x1D, 0x77, 0x36, 0x75, 0x81, 0xAA, 0x70, 0x3A,
    0x98, 0xD1, 0x71, 0x02, 0x4D, 0x01, 0xC1, 0xFF, 0x0D, 0x00, 0xD3, 0x05, 0xF9, 0x00, 0x0B, 0x00,
];

/// Audio register values the bootstrap leaves behind. There is no audio
/// unit in this core; the bytes are only visible through the generic IO
/// window.
const POWER_ON_AUDIO_WRITES: [(usize, u8); 18] = [
    (0x10, 0x80),
    (0x11, 0xBF),
    (0x12, 0xF3),
    (0x14, 0xBF),
    (0x16, 0x3F),
    (0x17, 0x00),
    (0x19, 0xBF),
    (0x1A, 0x7A),
    (0x1B, 0xFF),
    (0x1C, 0x9F),
    (0x1E, 0xBF),
    (0x20, 0xFF),
    (0x21, 0x00),
    (0x22, 0x00),
    (0x23, 0xBF),
    (0x24, 0x77),
    (0x25, 0xF3),
    (0x26, 0xF1),
];

/// Memory bus: sole owner of every memory region and hardware register,
/// routing each load and store by address range.
///
/// CPU and PPU observe and mutate shared state only through this type,
/// never through private aliases.
pub(crate) struct GameBoyBus {
    cartridge: Option<Cartridge>,
    boot_image: Option<[u8; BOOT_IMAGE_SIZE]>,
    /// Boot overlay mapped over 0x0000-0x00FF until 0xFF50 is written.
    pub(super) boot_active: bool,
    pub(super) banking: BankController,
    vram: [u8; VRAM_SIZE],
    oam: [u8; OAM_SIZE],
    wram: [u8; WRAM_SIZE],
    hram: [u8; HRAM_SIZE],
    external_ram: [u8; EXTERNAL_RAM_SIZE],
    /// Fallback for IO addresses without dedicated registers.
    io: [u8; 0x100],
    pub(super) ppu: Ppu,
    pub(super) timer: Timer,
    pub(super) joypad: Joypad,
    pub(super) int_flags: InterruptFlags,
    pub(super) int_enable: InterruptFlags,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        let mut bus = Self {
            cartridge: None,
            boot_image: None,
            boot_active: false,
            banking: BankController::default(),
            vram: [0; VRAM_SIZE],
            oam: [0; OAM_SIZE],
            wram: [0; WRAM_SIZE],
            hram: [0; HRAM_SIZE],
            external_ram: [0; EXTERNAL_RAM_SIZE],
            io: IO_POWER_ON,
            ppu: Ppu::new(),
            timer: Timer::new(),
            joypad: Joypad::new(),
            int_flags: InterruptFlags::empty(),
            int_enable: InterruptFlags::empty(),
        };
        bus.apply_power_on_state();
        bus
    }
}

impl GameBoyBus {
    /// Register state as the bootstrap program leaves it when control
    /// reaches cartridge code.
    fn apply_power_on_state(&mut self) {
        for (offset, value) in POWER_ON_AUDIO_WRITES {
            self.io[offset] = value;
        }
        self.ppu.control = 0x91;
        self.ppu.scroll_y = 0;
        self.ppu.scroll_x = 0;
        self.ppu.compare = 0;
        self.ppu.background_palette = 0xFC;
        self.ppu.sprite_palettes = [0xFF, 0xFF];
        self.ppu.window_y = 0;
        self.ppu.window_x = 0;
        self.int_enable = InterruptFlags::empty();
    }

    /// Reinitialise every region and peripheral while keeping the loaded
    /// cartridge and boot image.
    pub(super) fn reset(&mut self) {
        let cartridge = self.cartridge.take();
        let boot_image = self.boot_image.take();
        *self = Self::default();
        self.boot_active = boot_image.is_some();
        self.cartridge = cartridge;
        self.boot_image = boot_image;
    }

    pub(super) fn load_rom(&mut self, rom: &[u8]) -> Result<(), CartridgeError> {
        let cartridge = Cartridge::from_bytes(rom)?;
        log::info!(
            "loaded cartridge '{}' ({} bytes, mapper {:?})",
            cartridge.title(),
            rom.len(),
            cartridge.mapper()
        );
        self.cartridge = Some(cartridge);
        self.banking = BankController::default();
        Ok(())
    }

    /// Map a boot overlay over the first 256 bytes of address space.
    pub(super) fn load_boot_image(&mut self, image: &[u8]) {
        let mut boot = [0u8; BOOT_IMAGE_SIZE];
        let len = image.len().min(BOOT_IMAGE_SIZE);
        boot[..len].copy_from_slice(&image[..len]);
        self.boot_image = Some(boot);
        self.boot_active = true;
    }

    pub(super) fn cartridge(&self) -> Option<&Cartridge> {
        self.cartridge.as_ref()
    }

    /// Single producer-side primitive for raising interrupt requests.
    pub(super) fn request_interrupt(&mut self, flags: InterruptFlags) {
        self.int_flags |= flags;
    }

    pub(super) fn update_timers(&mut self, cycles: u32) {
        if self.timer.update(cycles) {
            self.request_interrupt(InterruptFlags::TIMER);
        }
    }

    pub(super) fn tick_video(&mut self, cycles: u32) -> VideoInterrupts {
        self.ppu.update(cycles, &self.vram, &self.oam)
    }

    pub(super) fn framebuffer(&self) -> &[u8] {
        self.ppu.framebuffer()
    }

    pub(crate) fn read_byte(&mut self, address: u16) -> Result<u8, BusFault> {
        match address {
            0x0000..=0x7FFF => Ok(self.read_cartridge_space(address)),
            0x8000..=0x9FFF => Ok(self.vram[usize::from(address - 0x8000)]),
            0xA000..=0xBFFF => {
                // External RAM reads are not gated by the enable latch.
                let offset =
                    usize::from(address - 0xA000) + usize::from(self.banking.ram_bank) * 0x2000;
                Ok(self.external_ram[offset % EXTERNAL_RAM_SIZE])
            }
            0xC000..=0xDFFF => Ok(self.wram[usize::from(address - 0xC000)]),
            // Echo region: same cells as 0xC000-0xDDFF.
            0xE000..=0xFDFF => Ok(self.wram[usize::from(address - 0xE000)]),
            0xFE00..=0xFE9F => Ok(self.oam[usize::from(address - 0xFE00)]),
            0xFF00 => Ok(self.joypad.read()),
            0xFF04 => Ok(self.timer.divider),
            0xFF05 => Ok(self.timer.counter),
            0xFF06 => Ok(self.timer.modulo),
            0xFF07 => Ok(self.timer.control),
            0xFF0F => Ok(self.int_flags.bits()),
            0xFF40 => Ok(self.ppu.control),
            0xFF41 => Ok(self.ppu.status),
            0xFF42 => Ok(self.ppu.scroll_y),
            0xFF43 => Ok(self.ppu.scroll_x),
            0xFF44 => Ok(self.ppu.scanline),
            0xFF45 => Ok(self.ppu.compare),
            0xFF4A => Ok(self.ppu.window_y),
            0xFF4B => Ok(self.ppu.window_x),
            0xFF50 => Ok(u8::from(self.boot_active)),
            0xFF80..=0xFFFE => Ok(self.hram[usize::from(address - 0xFF80)]),
            0xFF00..=0xFF7F => Ok(self.io[usize::from(address - 0xFF00)]),
            0xFFFF => Ok(self.int_enable.bits()),
            _ => Err(BusFault::UnmappedRead { address }),
        }
    }

    pub(crate) fn write_byte(&mut self, address: u16, data: u8) -> Result<(), BusFault> {
        match address {
            // Writes never reach cartridge storage; they drive the bank
            // controller protocol.
            0x0000..=0x7FFF => {
                let mapper = self.cartridge.as_ref().map_or(Mapper::None, Cartridge::mapper);
                self.banking.write(mapper, address, data);
            }
            0x8000..=0x9FFF => self.vram[usize::from(address - 0x8000)] = data,
            0xA000..=0xBFFF => {
                if self.banking.ram_enabled {
                    let offset =
                        usize::from(address - 0xA000) + usize::from(self.banking.ram_bank) * 0x2000;
                    self.external_ram[offset % EXTERNAL_RAM_SIZE] = data;
                }
            }
            0xC000..=0xDFFF => self.wram[usize::from(address - 0xC000)] = data,
            // Echo region writes land in the working RAM cells they
            // mirror.
            0xE000..=0xFDFF => self.wram[usize::from(address - 0xE000)] = data,
            0xFE00..=0xFE9F => self.oam[usize::from(address - 0xFE00)] = data,
            0xFF00 => self.joypad.write(data),
            0xFF04 => self.timer.divider = 0,
            0xFF05 => self.timer.counter = data,
            0xFF06 => self.timer.modulo = data,
            0xFF07 => self.timer.write_control(data),
            0xFF0F => self.int_flags = InterruptFlags::from_bits_retain(data),
            0xFF40 => self.ppu.control = data,
            0xFF41 => self.ppu.status = data,
            0xFF42 => self.ppu.scroll_y = data,
            0xFF43 => self.ppu.scroll_x = data,
            // Scanline is read-only; writing resets it.
            0xFF44 => self.ppu.scanline = 0,
            0xFF45 => self.ppu.compare = data,
            0xFF46 => self.oam_dma(data)?,
            0xFF47..=0xFF49 => {
                // Write-only palettes. A 0xFF47 write also lands in the
                // second sprite palette.
                if address == 0xFF47 {
                    self.ppu.background_palette = data;
                }
                if address == 0xFF48 {
                    self.ppu.sprite_palettes[0] = data;
                } else {
                    self.ppu.sprite_palettes[1] = data;
                }
            }
            0xFF4A => self.ppu.window_y = data,
            0xFF4B => self.ppu.window_x = data,
            // Any write permanently disables the boot overlay.
            0xFF50 => self.boot_active = false,
            0xFF80..=0xFFFE => self.hram[usize::from(address - 0xFF80)] = data,
            0xFF00..=0xFF7F => self.io[usize::from(address - 0xFF00)] = data,
            0xFFFF => self.int_enable = InterruptFlags::from_bits_retain(data),
            _ => return Err(BusFault::UnmappedWrite { address }),
        }
        Ok(())
    }

    fn read_cartridge_space(&self, address: u16) -> u8 {
        if self.boot_active && address < 0x100 {
            if let Some(boot) = &self.boot_image {
                return boot[usize::from(address)];
            }
        }

        let Some(cartridge) = &self.cartridge else {
            return 0;
        };

        if address < 0x4000 || !cartridge.has_banking() {
            cartridge.read(usize::from(address))
        } else {
            let offset = usize::from(address - 0x4000);
            cartridge.read(offset + usize::from(self.banking.rom_bank) * 0x4000)
        }
    }

    /// Copy 160 bytes from `value << 8` into the sprite attribute table,
    /// one byte at a time through the normal read/write paths so that
    /// banking and mirroring rules apply to the source.
    fn oam_dma(&mut self, value: u8) -> Result<(), BusFault> {
        let source = u16::from(value) << 8;
        for i in 0..OAM_SIZE as u16 {
            let byte = self.read_byte(source.wrapping_add(i))?;
            self.write_byte(0xFE00 + i, byte)?;
        }
        Ok(())
    }
}

impl Bus for GameBoyBus {
    fn read8(&mut self, address: u16) -> Result<u8, BusFault> {
        self.read_byte(address)
    }

    fn write8(&mut self, address: u16, value: u8) -> Result<(), BusFault> {
        self.write_byte(address, value)
    }
}
