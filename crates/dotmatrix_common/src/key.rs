/// Logical keys a frontend can report to an emulator.
///
/// Frontends translate their own input events (SDL scancodes, web key
/// codes, ...) into this shared set; each emulator decides what the keys
/// mean for its own controller layout.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    C,
    D,
    E,
    F,
    S,
    X,
    Z,
    Enter,
    Space,
    Escape,
}
