//! Background color derivation.
//!
//! A pure projection of view state: an active item selects its family
//! accent; otherwise scroll progress selects one of three light buckets.
//! Bucket boundaries are half-open on the lower bound, so 0.3 is purple and
//! 0.6 is green.

use crate::model::theme::{ColorTheme, Rgb};

pub const C_BLUE: Rgb = Rgb::new(0x93, 0xc5, 0xfd);
pub const C_PURPLE: Rgb = Rgb::new(0xd8, 0xb4, 0xfe);
pub const C_GREEN: Rgb = Rgb::new(0x86, 0xef, 0xac);
pub const C_ORANGE: Rgb = Rgb::new(0xfd, 0xba, 0x74);
pub const C_RED: Rgb = Rgb::new(0xfc, 0xa5, 0xa5);
pub const C_NEUTRAL: Rgb = Rgb::new(0xcb, 0xd5, 0xe1);

pub const C_BLUE_LIGHT: Rgb = Rgb::new(0xbf, 0xdb, 0xfe);
pub const C_PURPLE_LIGHT: Rgb = Rgb::new(0xe9, 0xd5, 0xff);
pub const C_GREEN_LIGHT: Rgb = Rgb::new(0xbb, 0xf7, 0xd0);

/// Lower bound of the purple scroll bucket.
pub const PURPLE_BUCKET_START: f64 = 0.3;
/// Lower bound of the green scroll bucket.
pub const GREEN_BUCKET_START: f64 = 0.6;

/// Accent color of an active item's family.
pub fn theme_color(theme: ColorTheme) -> Rgb {
    match theme {
        ColorTheme::Blue => C_BLUE,
        ColorTheme::Purple => C_PURPLE,
        ColorTheme::Green => C_GREEN,
        ColorTheme::Orange => C_ORANGE,
        ColorTheme::Red => C_RED,
        ColorTheme::Neutral => C_NEUTRAL,
    }
}

/// Light bucket color for road scroll progress.
pub fn progress_color(progress: f64) -> Rgb {
    if progress < PURPLE_BUCKET_START {
        C_BLUE_LIGHT
    } else if progress < GREEN_BUCKET_START {
        C_PURPLE_LIGHT
    } else {
        C_GREEN_LIGHT
    }
}

/// Background color for the given active theme and scroll progress.
pub fn derive_color(active_theme: Option<ColorTheme>, scroll_progress: f64) -> Rgb {
    match active_theme {
        Some(theme) => theme_color(theme),
        None => progress_color(scroll_progress),
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_color, progress_color, C_BLUE_LIGHT, C_GREEN_LIGHT, C_PURPLE_LIGHT};
    use crate::model::theme::ColorTheme;

    #[test]
    fn hex_constants_match_palette() {
        assert_eq!(super::C_BLUE.to_hex(), "#93c5fd");
        assert_eq!(super::C_PURPLE.to_hex(), "#d8b4fe");
        assert_eq!(super::C_GREEN.to_hex(), "#86efac");
        assert_eq!(super::C_ORANGE.to_hex(), "#fdba74");
        assert_eq!(super::C_RED.to_hex(), "#fca5a5");
        assert_eq!(super::C_NEUTRAL.to_hex(), "#cbd5e1");
        assert_eq!(C_BLUE_LIGHT.to_hex(), "#bfdbfe");
        assert_eq!(C_PURPLE_LIGHT.to_hex(), "#e9d5ff");
        assert_eq!(C_GREEN_LIGHT.to_hex(), "#bbf7d0");
    }

    #[test]
    fn boundaries_belong_to_upper_bucket() {
        assert_eq!(progress_color(0.299_999), C_BLUE_LIGHT);
        assert_eq!(progress_color(0.3), C_PURPLE_LIGHT);
        assert_eq!(progress_color(0.599_999), C_PURPLE_LIGHT);
        assert_eq!(progress_color(0.6), C_GREEN_LIGHT);
    }

    #[test]
    fn active_theme_ignores_progress() {
        for progress in [0.0, 0.3, 0.6, 1.0] {
            assert_eq!(
                derive_color(Some(ColorTheme::Red), progress).to_hex(),
                "#fca5a5"
            );
        }
    }
}
