use std::fmt;

/// Largest cartridge image the hardware can address: 2 MiB.
pub const MAX_IMAGE_SIZE: usize = 0x20_0000;

/// Offset of the banking-classification byte in the header.
const MAPPER_OFFSET: usize = 0x147;
/// Offset and length of the NUL-padded title string.
const TITLE_OFFSET: usize = 0x134;
const TITLE_LEN: usize = 11;

/// Banking hardware variant, selected by header byte 0x0147.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mapper {
    /// No banking controller; the image is addressed directly.
    None,
    /// 5-bit low bank register plus high bits / RAM bank select.
    Mbc1,
    /// 4-bit bank register; RAM-enable writes gated on address bit 4.
    Mbc2,
}

/// Failure to accept a cartridge image.
///
/// Raised to the loading collaborator; the core never terminates the
/// host over a bad image.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CartridgeError {
    Empty,
    TooLarge { size: usize },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::Empty => write!(f, "cartridge image is empty"),
            CartridgeError::TooLarge { size } => write!(
                f,
                "cartridge image is {size} bytes, larger than the {MAX_IMAGE_SIZE} byte maximum"
            ),
        }
    }
}

impl std::error::Error for CartridgeError {}

/// Immutable cartridge image plus its header-derived banking variant.
pub struct Cartridge {
    data: Vec<u8>,
    mapper: Mapper,
}

impl Cartridge {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CartridgeError> {
        if bytes.is_empty() {
            return Err(CartridgeError::Empty);
        }
        if bytes.len() > MAX_IMAGE_SIZE {
            return Err(CartridgeError::TooLarge { size: bytes.len() });
        }

        let mapper = match bytes.get(MAPPER_OFFSET).copied().unwrap_or(0) {
            0x01..=0x03 => Mapper::Mbc1,
            0x05 | 0x06 => Mapper::Mbc2,
            _ => Mapper::None,
        };

        Ok(Self {
            data: bytes.to_vec(),
            mapper,
        })
    }

    #[inline]
    pub fn mapper(&self) -> Mapper {
        self.mapper
    }

    #[inline]
    pub fn has_banking(&self) -> bool {
        self.mapper != Mapper::None
    }

    /// Read a byte at a physical image offset. Offsets beyond the loaded
    /// image read as zero, as they do on the zero-padded reference image.
    #[inline]
    pub fn read(&self, offset: usize) -> u8 {
        self.data.get(offset).copied().unwrap_or(0)
    }

    /// Title string from the header: upper-case ASCII, NUL padded, at
    /// most 11 bytes.
    pub fn title(&self) -> String {
        let bytes: Vec<u8> = self
            .data
            .iter()
            .skip(TITLE_OFFSET)
            .take(TITLE_LEN)
            .copied()
            .take_while(|&b| b != 0)
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
