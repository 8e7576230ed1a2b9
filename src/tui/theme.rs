use ratatui::style::Color;

// Accent colors
pub const ACCENT_BLUE: Color = Color::Rgb(124, 175, 194);     // #7CAFC2
pub const ACCENT_MINT: Color = Color::Rgb(161, 193, 129);     // #A1C181

// Chips
pub const CHIP_BG: Color = Color::Rgb(68, 64, 60);            // stone
pub const CHIP_ARMED_BG: Color = Color::Rgb(96, 165, 250);    // armed for removal

// Dropdown
pub const ROW_HIGHLIGHT_BG: Color = Color::Rgb(30, 58, 138);

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255);      // #FFFFFF
