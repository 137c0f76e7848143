//! Color palette for the TUI.

use ratatui::style::Color;

/// Theme color palette (fixed dark palette).
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Timeline track
    pub track: Color,
    pub segment: Color,
    pub slider: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244

            // Foregrounds
            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            // Timeline track
            track: Color::Rgb(69, 71, 90),      // #45475a
            segment: Color::Rgb(137, 180, 250), // #89b4fa
            slider: Color::Rgb(249, 226, 175),  // #f9e2af

            // Borders
            border: Color::Rgb(88, 91, 112),          // #585b70
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }
}
