//! Color format conversion
//!
//! Parses `#rgb`, `#rrggbb`, `rgb()` and `hsl()` strings into an RGB
//! triple and renders any of the three formats back out. HSL math follows
//! the CSS Color 3 definitions, rounding to the nearest integer on output.

use crate::error::InspectError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref RGB_FN: Regex =
        Regex::new(r"^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap();
    static ref HSL_FN: Regex =
        Regex::new(r"^hsl\(\s*(\d{1,3}(?:\.\d+)?)\s*,\s*(\d{1,3}(?:\.\d+)?)%\s*,\s*(\d{1,3}(?:\.\d+)?)%\s*\)$")
            .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn hsl_string(&self) -> String {
        let (h, s, l) = self.to_hsl();
        format!("hsl({}, {}%, {}%)", h.round(), s.round(), l.round())
    }

    /// Hue in degrees [0, 360), saturation and lightness in percent
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return (0.0, 0.0, l * 100.0);
        }

        // Rounding error can push the quotient a hair past 1.0
        let s = (delta / (1.0 - (2.0 * l - 1.0).abs())).clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        let h = if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        (h.rem_euclid(360.0), s * 100.0, l * 100.0)
    }

    /// Hue in degrees, saturation/lightness in percent
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = h.rem_euclid(360.0);
        let s = (s / 100.0).clamp(0.0, 1.0);
        let l = (l / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r1, g1, b1) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color {
            r: ((r1 + m) * 255.0).round() as u8,
            g: ((g1 + m) * 255.0).round() as u8,
            b: ((b1 + m) * 255.0).round() as u8,
        }
    }
}

/// Parse any supported color string
pub fn parse_color(input: &str) -> Result<Color, InspectError> {
    let input = input.trim();

    if let Some(hex) = input.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| InspectError::Color(input.to_string()));
    }

    if let Some(caps) = RGB_FN.captures(input) {
        let channel = |i: usize| {
            caps[i]
                .parse::<u32>()
                .ok()
                .filter(|&v| v <= 255)
                .map(|v| v as u8)
        };
        return match (channel(1), channel(2), channel(3)) {
            (Some(r), Some(g), Some(b)) => Ok(Color::new(r, g, b)),
            _ => Err(InspectError::Color(input.to_string())),
        };
    }

    if let Some(caps) = HSL_FN.captures(input) {
        let h: f64 = caps[1].parse().map_err(|_| InspectError::Color(input.to_string()))?;
        let s: f64 = caps[2].parse().map_err(|_| InspectError::Color(input.to_string()))?;
        let l: f64 = caps[3].parse().map_err(|_| InspectError::Color(input.to_string()))?;
        if h > 360.0 || s > 100.0 || l > 100.0 {
            return Err(InspectError::Color(input.to_string()));
        }
        return Ok(Color::from_hsl(h, s, l));
    }

    Err(InspectError::Color(input.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    match hex.len() {
        // #abc is shorthand for #aabbcc
        3 => {
            let digits: Vec<u8> = hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| d as u8))
                .collect::<Option<_>>()?;
            Some(Color::new(digits[0] * 17, digits[1] * 17, digits[2] * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::new(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(parse_color("#ff8000").unwrap(), Color::new(255, 128, 0));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_color("#f80").unwrap(), Color::new(255, 136, 0));
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(parse_color("rgb(12, 34, 250)").unwrap(), Color::new(12, 34, 250));
    }

    #[test]
    fn test_parse_hsl_function() {
        assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), Color::new(255, 0, 0));
        assert_eq!(parse_color("hsl(120, 100%, 50%)").unwrap(), Color::new(0, 255, 0));
    }

    #[test]
    fn test_rejects_out_of_range_channels() {
        assert!(parse_color("rgb(300, 0, 0)").is_err());
        assert!(parse_color("hsl(400, 50%, 50%)").is_err());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("blue").is_err());
        assert!(parse_color("rgb(1,2)").is_err());
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Color::new(255, 128, 0).hex(), "#ff8000");
    }

    #[test]
    fn test_hsl_anchor_colors() {
        assert_eq!(Color::new(255, 0, 0).to_hsl(), (0.0, 100.0, 50.0));
        assert_eq!(Color::new(0, 0, 255).to_hsl().0, 240.0);
        // Grays have no hue or saturation
        assert_eq!(Color::new(128, 128, 128).to_hsl().1, 0.0);
        assert_eq!(Color::new(255, 255, 255).to_hsl(), (0.0, 0.0, 100.0));
    }

    #[test]
    fn test_saturation_never_exceeds_full() {
        // Near-saturated greens land a hair above 1.0 before the clamp
        let (_, s, _) = Color::new(24, 255, 24).to_hsl();
        assert!(s <= 100.0);
        assert!(s > 99.0);
    }

    #[test]
    fn test_hsl_string_rounds() {
        assert_eq!(Color::new(255, 0, 0).hsl_string(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn test_hex_and_rgb_strings_reparse_exactly() {
        let color = Color::new(17, 0, 255);
        assert_eq!(parse_color(&color.hex()).unwrap(), color);
        assert_eq!(parse_color(&color.rgb_string()).unwrap(), color);
    }

    #[test]
    fn test_round_trip_through_hsl_is_close() {
        for color in [
            Color::new(12, 200, 77),
            Color::new(255, 254, 1),
            Color::new(0, 0, 0),
        ] {
            let (h, s, l) = color.to_hsl();
            let back = Color::from_hsl(h, s, l);
            assert!((color.r as i16 - back.r as i16).abs() <= 1);
            assert!((color.g as i16 - back.g as i16).abs() <= 1);
            assert!((color.b as i16 - back.b as i16).abs() <= 1);
        }
    }
}
