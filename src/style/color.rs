//! CSS color to hex conversion.
//!
//! Supports named colors, 3/4/6/8-digit hex, `rgb()`/`rgba()` and
//! `hsl()`/`hsla()`. Conversion never fails: unparsable input degrades to
//! the fixed fallback so one bad declaration cannot abort a conversion.

use regex::Regex;

/// Fallback for colors that cannot be parsed.
pub const FALLBACK_COLOR: &str = "#000000";

const NAMED_COLORS: &[(&str, &str)] = &[
    ("red", "#FF0000"),
    ("blue", "#0000FF"),
    ("green", "#008000"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("yellow", "#FFFF00"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("pink", "#FFC0CB"),
    ("gray", "#808080"),
    ("silver", "#C0C0C0"),
    ("maroon", "#800000"),
    ("olive", "#808000"),
    ("lime", "#00FF00"),
    ("teal", "#008080"),
    ("navy", "#000080"),
    ("aqua", "#00FFFF"),
    ("fuchsia", "#FF00FF"),
    ("cyan", "#00FFFF"),
    ("brown", "#A52A2A"),
    ("gold", "#FFD700"),
    ("coral", "#FF7F50"),
    ("violet", "#EE82EE"),
    ("indigo", "#4B0082"),
    ("khaki", "#F0E68C"),
    ("salmon", "#FA8072"),
    ("chocolate", "#D2691E"),
    ("tan", "#D2B48C"),
    ("azure", "#F0FFFF"),
    ("beige", "#F5F5DC"),
    ("lavender", "#E6E6FA"),
    ("crimson", "#DC143C"),
    ("turquoise", "#40E0D0"),
    ("ivory", "#FFFFF0"),
    ("orchid", "#DA70D6"),
    ("plum", "#DDA0DD"),
    ("sienna", "#A0522D"),
    ("midnightblue", "#191970"),
    ("seashell", "#FFF5EE"),
    ("tomato", "#FF6347"),
    ("snow", "#FFFAFA"),
    ("mintcream", "#F5FFFA"),
    ("wheat", "#F5DEB3"),
    ("moccasin", "#FFE4B5"),
    ("hotpink", "#FF69B4"),
    ("skyblue", "#87CEEB"),
    ("slategray", "#708090"),
    ("darkblue", "#00008B"),
    ("darkgreen", "#006400"),
    ("darkred", "#8B0000"),
    ("lightblue", "#ADD8E6"),
    ("lightgreen", "#90EE90"),
    ("lightpink", "#FFB6C1"),
    ("lightgray", "#D3D3D3"),
];

/// Convert a CSS color value to an uppercase hex string.
pub fn color_to_hex(color: &str) -> String {
    let trimmed = color.trim();
    let lowered = trimmed.to_lowercase();

    if let Some((_, hex)) = NAMED_COLORS.iter().find(|(name, _)| *name == lowered) {
        return (*hex).to_string();
    }

    let hex_re = Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
        .unwrap();
    if hex_re.is_match(trimmed) {
        return trimmed.to_uppercase();
    }

    let rgb_re =
        Regex::new(r"^(?i)rgba?\((\d{1,3}),\s*(\d{1,3}),\s*(\d{1,3})(?:,\s*(\d?\.?\d+))?\)$")
            .unwrap();
    if let Some(caps) = rgb_re.captures(trimmed) {
        let r: u32 = caps[1].parse().unwrap_or(0);
        let g: u32 = caps[2].parse().unwrap_or(0);
        let b: u32 = caps[3].parse().unwrap_or(0);
        let mut hex = format!("#{:02X}{:02X}{:02X}", r.min(255), g.min(255), b.min(255));

        if let Some(alpha) = caps.get(4) {
            let a: f32 = alpha.as_str().parse().unwrap_or(1.0);
            hex.push_str(&format!("{:02X}", (a * 255.0).round() as u32));
        }

        return hex;
    }

    let hsl_re =
        Regex::new(r"^(?i)hsla?\((\d{1,3}),\s*([\d.]+)%,\s*([\d.]+)%(?:,\s*(\d?\.?\d+))?\)$")
            .unwrap();
    if let Some(caps) = hsl_re.captures(trimmed) {
        let h: f32 = caps[1].parse::<u32>().unwrap_or(0) as f32 % 360.0;
        let s: f32 = caps[2].parse::<f32>().unwrap_or(0.0) / 100.0;
        let l: f32 = caps[3].parse::<f32>().unwrap_or(0.0) / 100.0;
        let a: f32 = caps
            .get(4)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(1.0);

        let (r, g, b) = hsl_to_rgb(h, s, l);
        let mut hex = format!("#{:02X}{:02X}{:02X}", r, g, b);

        if a < 1.0 {
            hex.push_str(&format!("{:02X}", (a * 255.0).round() as u32));
        }

        return hex;
    }

    log::debug!("unparsable color {:?}, using fallback", color);
    FALLBACK_COLOR.to_string()
}

/// Convert HSL channels (h in degrees, s and l in 0..1) to RGB bytes.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
