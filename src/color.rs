// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// Alpha is kept as a float since the canvas takes css rgba() strings

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num & 0xff) as u8;

        Color {
            r,
            g,
            b,
            a: a as f64 / 255.0,
        }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    // Formats as a css color string for fillStyle / strokeStyle
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        let color = Color::from_u32(0x0ea5e9ff);
        assert_eq!((color.r, color.g, color.b), (14, 165, 233));
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn css_string_keeps_fractional_alpha() {
        let color = Color::from_u32(0x0ea5e9ff).with_alpha(0.03);
        assert_eq!(color.to_css(), "rgba(14, 165, 233, 0.03)");
    }
}
