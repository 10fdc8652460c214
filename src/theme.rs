use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(22, 22, 26); // #16161A
pub const FOREGROUND: Color = Color::Rgb(171, 166, 158); // #ABA69E
pub const RED: Color = Color::Rgb(158, 46, 22); // #9E2E16
pub const GREEN: Color = Color::Rgb(78, 148, 70); // #4E9446
pub const YELLOW: Color = Color::Rgb(133, 116, 25); // #857419
pub const BLUE: Color = Color::Rgb(79, 122, 133); // #4F7A85
pub const PURPLE: Color = Color::Rgb(124, 82, 54); // #7C5236
pub const CYAN: Color = Color::Rgb(63, 131, 94); // #3F835E

pub const DIMMED: Color = Color::Rgb(88, 86, 74); // #58564A
pub const SELECTION_BG: Color = Color::Rgb(60, 54, 42); // #3C362A

// Tint applied to row icons, matching the normal control color of the shell.
pub const CONTROL: Color = Color::Rgb(201, 196, 188); // #C9C4BC
