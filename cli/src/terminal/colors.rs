use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 192, g: 192, b: 192 };

/// Values that read the same both ways.
pub const PALINDROME: Color = Color::TrueColor { r: 83, g: 179, b: 203 };
/// Values still growing when the budget ran out.
pub const DIVERGENT: Color = Color::Magenta;
/// Step counts.
pub const STEPS: Color = Color::TrueColor { r: 255, g: 176, b: 0 };
