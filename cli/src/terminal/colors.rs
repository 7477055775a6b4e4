use colored::Color;

pub const PRIMARY: Color = Color::BrightBlue;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const VLAN_NAME: Color = Color::BrightCyan;
pub const TAGGED: Color = Color::Magenta;
pub const UNTAGGED: Color = Color::Green;
pub const IPV4_ADDR: Color = Color::BrightGreen;
