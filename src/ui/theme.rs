use ratatui::style::Color;

pub const HOT_PINK: Color = Color::Rgb(0xff, 0x69, 0xb4);
pub const AQUAMARINE: Color = Color::Rgb(0x7f, 0xff, 0xd4);
pub const CORAL: Color = Color::Rgb(0xff, 0x7f, 0x50);
pub const CYAN: Color = Color::Rgb(0x00, 0xff, 0xff);

/// Dial colors, cycled once per tick.
pub const PALETTE: [Color; 4] = [HOT_PINK, AQUAMARINE, CORAL, CYAN];

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_IDLE: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Opacity applied to the dial while the countdown is not running.
const FADED_OPACITY: f32 = 0.4;

/// Palette entry for a countdown value. Negative values wrap as well.
pub fn palette_color(current_time: i64) -> Color {
    let index = current_time.rem_euclid(PALETTE.len() as i64) as usize;
    PALETTE[index]
}

/// Blend an RGB color toward black, approximating reduced opacity on a dark
/// terminal background. Non-RGB colors are returned unchanged.
pub fn faded(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| (f32::from(c) * FADED_OPACITY).round() as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_by_current_time() {
        assert_eq!(palette_color(0), HOT_PINK);
        assert_eq!(palette_color(1), AQUAMARINE);
        assert_eq!(palette_color(10), CORAL);
        assert_eq!(palette_color(7), CYAN);
    }

    #[test]
    fn negative_time_wraps_into_palette() {
        assert_eq!(palette_color(-1), CYAN);
    }

    #[test]
    fn faded_darkens_rgb() {
        assert_eq!(faded(Color::Rgb(100, 200, 0)), Color::Rgb(40, 80, 0));
        assert_eq!(faded(Color::Reset), Color::Reset);
    }
}
