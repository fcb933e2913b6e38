/// Joypad state byte and request-mode register.
///
/// `state` is active-low per button: a set bit means released. Bits 0-3
/// are the directions (Right Left Up Down), bits 4-7 the buttons
/// (A B Select Start). The request-mode byte written to 0xFF00 selects
/// which nibble a read exposes.
pub(super) struct Joypad {
    pub(super) state: u8,
    pub(super) select: u8,
}

impl Joypad {
    pub(super) fn new() -> Self {
        Self {
            state: 0,
            select: 0,
        }
    }

    pub(super) fn read(&self) -> u8 {
        match self.select {
            0x10 => self.state >> 4,
            0x20 => self.state & 0x0F,
            _ => 0,
        }
    }

    pub(super) fn write(&mut self, data: u8) {
        self.select = data;
    }

    /// Record a press. Returns true when the joypad interrupt should be
    /// requested: the key's group is currently selected and the key was
    /// previously released.
    pub(super) fn key_pressed(&mut self, key: u8) -> bool {
        let previously_unset = self.state & (1 << key) == 0;
        self.state &= !(1 << key);

        let button = key > 3;
        let selected = if button {
            self.select & 0b10_0000 == 0
        } else {
            self.select & 0b01_0000 == 0
        };
        selected && !previously_unset
    }

    pub(super) fn key_released(&mut self, key: u8) {
        self.state |= 1 << key;
    }
}
