use eframe::egui::Color32;

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

pub struct Palette;

impl Palette {
    pub const ACCENT: &'static str = "#A159E1";
    pub const SUCCESS: &'static str = "#51A351";
    pub const ERROR: &'static str = "#BD362F";

    pub fn accent() -> Color32 {
        Color32::from_hex(Self::ACCENT).unwrap_or(Color32::LIGHT_BLUE)
    }

    pub fn success() -> Color32 {
        Color32::from_hex(Self::SUCCESS).unwrap_or(Color32::GREEN)
    }

    pub fn error() -> Color32 {
        Color32::from_hex(Self::ERROR).unwrap_or(Color32::RED)
    }
}
