//! Colors - FormKit Theme Colors

use gpui::{rgb, Rgba};

/// FormKit color palette
///
/// Raw hex values are exposed as constants so style tables stay plain data;
/// associated functions return GPUI colors for rendering.
pub struct FormColors;

impl FormColors {
    pub const WHITE: u32 = 0xffffff;
    pub const GRAY_50: u32 = 0xf9fafb;
    pub const GRAY_100: u32 = 0xf3f4f6;
    pub const GRAY_200: u32 = 0xe5e7eb;
    pub const GRAY_300: u32 = 0xd1d5db;
    pub const GRAY_400: u32 = 0x9ca3af;
    pub const GRAY_500: u32 = 0x6b7280;
    pub const GRAY_600: u32 = 0x4b5563;
    pub const GRAY_700: u32 = 0x374151;
    pub const GRAY_900: u32 = 0x111827;
    pub const BLUE_50: u32 = 0xeff6ff;
    pub const BLUE_500: u32 = 0x3b82f6;
    pub const BLUE_600: u32 = 0x2563eb;
    pub const RED_50: u32 = 0xfef2f2;
    pub const RED_500: u32 = 0xef4444;
    pub const RED_600: u32 = 0xdc2626;
    pub const RED_700: u32 = 0xb91c1c;
    pub const GREEN_100: u32 = 0xdcfce7;
    pub const GREEN_800: u32 = 0x166534;
    pub const RED_100: u32 = 0xfee2e2;
    pub const RED_800: u32 = 0x991b1b;

    /// Resolve a palette constant
    pub fn hex(value: u32) -> Rgba {
        rgb(value)
    }

    // Background colors
    /// Gallery background
    pub fn background() -> Rgba { rgb(Self::GRAY_50) }
    /// Content surface
    pub fn surface() -> Rgba { rgb(Self::WHITE) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(Self::GRAY_900) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(Self::GRAY_600) }
    /// Muted text and inactive icons
    pub fn text_muted() -> Rgba { rgb(Self::GRAY_400) }
    /// Light text (on accent backgrounds)
    pub fn text_light() -> Rgba { rgb(Self::WHITE) }

    // Accent
    /// Active sort arrow, checked boxes, spinners
    pub fn accent() -> Rgba { rgb(Self::BLUE_600) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(Self::GRAY_200) }
    /// Checkbox border
    pub fn control_border() -> Rgba { rgb(Self::GRAY_300) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(Self::GRAY_50) }
    /// Table header text
    pub fn table_header_text() -> Rgba { rgb(Self::GRAY_500) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(Self::GRAY_50) }
    /// Selected row background
    pub fn table_row_selected() -> Rgba { rgb(Self::BLUE_50) }

    // Affordance buttons
    /// Hover background of clear/password buttons
    pub fn icon_button_hover() -> Rgba { rgb(Self::GRAY_100) }
}
