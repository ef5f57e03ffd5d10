//! Editor color palette.

use crate::canvas::{rgb, Rgba};

pub const BACKGROUND: Rgba = rgb(12, 12, 18);
pub const GRID: Rgba = rgb(20, 20, 30);
pub const ACCENT: Rgba = rgb(0, 200, 255);

pub const WINDOW_BODY: Rgba = rgb(30, 30, 40);
pub const WINDOW_TITLE_BAR: Rgba = rgb(45, 45, 55);
pub const WINDOW_TITLE_BAR_ACTIVE: Rgba = rgb(55, 55, 70);
pub const WINDOW_TITLE_TEXT: Rgba = rgb(255, 255, 255);

pub const SLIDER_TRACK: Rgba = rgb(60, 60, 75);

pub const OVERLAY_BOX: Rgba = rgb(20, 20, 30);
pub const OVERLAY_TEXT: Rgba = rgb(150, 150, 150);
pub const QUIT: Rgba = rgb(200, 71, 88);
