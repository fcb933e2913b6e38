use dotmatrix_common::{App, Key};

use crate::machine::GameBoy;
use crate::{SCREEN_HEIGHT, SCREEN_SCALE, SCREEN_WIDTH};

/// Frontend-facing application wrapper for the Game Boy machine.
///
/// Implements the shared `App` trait so any frontend can drive the
/// emulator: one `update` call steps a frame and fills the caller's
/// RGB24 screen buffer.
#[derive(Default)]
pub struct GameBoyApp {
    pub gb: GameBoy,
    should_exit: bool,
    frame_counter: u64,
    reported_halt_condition: bool,
}

impl GameBoyApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for GameBoyApp {
    fn init(&mut self) {
        log::info!("Game Boy init");
        self.gb.release_all_keys();
    }

    fn update(&mut self, screen: &mut [u8]) {
        if let Err(fault) = self.gb.step_frame() {
            if !self.reported_halt_condition {
                log::error!("bus fault: {fault}; execution stopped");
                self.reported_halt_condition = true;
            }
            self.should_exit = true;
        }

        if self.gb.cpu.is_crashed() && !self.reported_halt_condition {
            log::error!(
                "CPU crashed on opcode 0x{:02X} at 0x{:04X} (state kept for inspection)",
                self.gb.cpu.last_opcode(),
                self.gb.cpu.regs.pc
            );
            self.reported_halt_condition = true;
        }

        self.gb.frame(screen);

        self.frame_counter = self.frame_counter.wrapping_add(1);
        if self.frame_counter % 600 == 0 {
            let regs = &self.gb.cpu.regs;
            log::debug!(
                "frame={} pc=0x{:04X} sp=0x{:04X} af=0x{:04X} bc=0x{:04X} de=0x{:04X} hl=0x{:04X} ime={} halted={}",
                self.frame_counter,
                regs.pc,
                regs.sp,
                regs.af(),
                regs.bc(),
                regs.de(),
                regs.hl(),
                self.gb.cpu.ime,
                self.gb.cpu.halted,
            );
        }
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        self.gb.handle_key(key, is_down);
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Game Boy exit");
    }

    fn width(&self) -> u32 {
        SCREEN_WIDTH as u32
    }

    fn height(&self) -> u32 {
        SCREEN_HEIGHT as u32
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        let title = self.gb.title();
        if title.is_empty() {
            "DotMatrix".to_string()
        } else {
            format!("DotMatrix - {title}")
        }
    }
}
