use serde::{de, Deserialize, Deserializer, Serialize};

/// An opaque RGB color with 8-bit channels.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const WHITESMOKE: Color = Color::rgb(245, 245, 245);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalized to the 0..=1 range used by PDF color operators.
    pub fn components(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Color must be ASCII hex digits, got: {}", s));
        }

        match hex.len() {
            3 => {
                let channel = |i: usize, name: &str| {
                    u8::from_str_radix(&hex[i..i + 1].repeat(2), 16)
                        .map_err(|e| format!("Invalid {} component: {}", name, e))
                };
                Ok(Color::rgb(channel(0, "red")?, channel(1, "green")?, channel(2, "blue")?))
            }
            6 => {
                let channel = |i: usize, name: &str| {
                    u8::from_str_radix(&hex[i..i + 2], 16)
                        .map_err(|e| format!("Invalid {} component: {}", name, e))
                };
                Ok(Color::rgb(channel(0, "red")?, channel(2, "green")?, channel(4, "blue")?))
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color::rgb(r, g, b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::parse_hex("#0C4C44").unwrap(), Color::rgb(12, 76, 68));
        assert_eq!(Color::parse_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::parse_hex("0C4C44").is_err());
        assert!(Color::parse_hex("#0C4C").is_err());
        assert!(Color::parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn rejects_multibyte_characters_without_panicking() {
        // "aé" is three bytes, "ééé" six
        assert!(Color::parse_hex("#aé").is_err());
        assert!(Color::parse_hex("#ééé").is_err());
        assert!(serde_json::from_str::<Color>("\"#aé\"").is_err());
    }

    #[test]
    fn deserializes_from_string_or_map() {
        let a: Color = serde_json::from_str("\"#404040\"").unwrap();
        let b: Color = serde_json::from_str(r#"{"r": 64, "g": 64, "b": 64}"#).unwrap();
        assert_eq!(a, Color::DARK_GRAY);
        assert_eq!(a, b);
    }

    #[test]
    fn components_are_normalized() {
        assert_eq!(Color::WHITE.components(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.components(), [0.0, 0.0, 0.0]);
    }
}
