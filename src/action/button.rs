use serde::{Deserialize, Serialize};

/// Closed set of controller inputs, PlayStation layout. Sticks are discrete
/// directions because injection goes through a keyboard mapping, not an
/// analog device. Drivers translate these to concrete key codes with a
/// lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Cross,
    Moon,
    Pyramid,
    Box,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    L1,
    L2,
    L3,
    R1,
    R2,
    R3,
    Options,
    Share,
    Touchpad,
    Ps,
    LStickUp,
    LStickDown,
    LStickLeft,
    LStickRight,
    RStickUp,
    RStickDown,
    RStickLeft,
    RStickRight,
}
