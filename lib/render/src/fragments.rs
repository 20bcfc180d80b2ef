//! Reusable markup fragments parameterized by value and theme.
//!
//! Fragments are plain strings positioned by the caller inside a
//! translated group; they carry no absolute coordinates of their own.

use crate::theme::Palette;

/// Battery fill switches from positive to negative at or below this
/// percentage.
pub const BATTERY_LOW_PCT: i64 = 20;

/// Interior width of the battery shell in px; the fill scales linearly
/// into it.
pub const BATTERY_FULL_W: f64 = 16.0;

/// Battery gauge at the given charge percentage.
///
/// Levels at or below zero return the empty fragment: the gauge is
/// omitted entirely, never drawn as an empty shell. The fill width is
/// `level / 100 * 16`; values above 100 pass through unclamped and
/// overflow the shell.
pub fn battery_gauge(level: i64, palette: &Palette) -> String {
    if level <= 0 {
        return String::new();
    }
    let fill_w = level as f64 / 100.0 * BATTERY_FULL_W;
    let fill = if level > BATTERY_LOW_PCT { palette.positive } else { palette.negative };
    format!(
        r#"<g><rect x="0" y="0" width="18" height="11" rx="1.5" fill="none" stroke="{stroke}" stroke-width="1"/><rect x="18.5" y="3" width="2" height="5" rx="0.5" fill="{stroke}"/><rect x="1" y="1" width="{fill_w}" height="9" rx="1" fill="{fill}"/></g>"#,
        stroke = palette.gauge_stroke,
    )
}

/// Running / stopped indicator: a filled circle with a check or cross.
pub fn status_icon(running: bool, palette: &Palette) -> String {
    if running {
        format!(
            r#"<circle cx="6" cy="6" r="6" fill="{color}"/><path d="M4 6l2 2 4-4" stroke="white" stroke-width="1.5" fill="none"/>"#,
            color = palette.positive,
        )
    } else {
        format!(
            r#"<circle cx="6" cy="6" r="6" fill="{color}"/><path d="M4 4l4 4M8 4l-4 4" stroke="white" stroke-width="1.5"/>"#,
            color = palette.negative,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_is_omitted_at_zero_or_below() {
        let palette = Palette::light();
        assert_eq!(battery_gauge(0, &palette), "");
        assert_eq!(battery_gauge(-5, &palette), "");
    }

    #[test]
    fn fill_width_is_linear_in_level() {
        let palette = Palette::light();
        assert!(battery_gauge(80, &palette).contains(r#"width="12.8""#));
        assert!(battery_gauge(100, &palette).contains(r#"width="16""#));
        assert!(battery_gauge(25, &palette).contains(r#"width="4""#));
    }

    #[test]
    fn out_of_domain_level_passes_through_unclamped() {
        // 150% fills 24px, wider than the 16px shell interior.
        let palette = Palette::light();
        assert!(battery_gauge(150, &palette).contains(r#"width="24""#));
    }

    #[test]
    fn fill_color_switches_at_low_threshold() {
        let palette = Palette::light();
        assert!(battery_gauge(21, &palette).contains(palette.positive));
        assert!(battery_gauge(20, &palette).contains(palette.negative));
        assert!(battery_gauge(5, &palette).contains(palette.negative));
    }

    #[test]
    fn gauge_stroke_follows_theme() {
        assert!(battery_gauge(50, &Palette::light()).contains("#6b7280"));
        assert!(battery_gauge(50, &Palette::dark()).contains("#9ca3af"));
    }

    #[test]
    fn status_icon_has_two_states() {
        let palette = Palette::light();
        let running = status_icon(true, &palette);
        let stopped = status_icon(false, &palette);
        assert!(running.contains(palette.positive));
        assert!(running.contains("M4 6l2 2 4-4"));
        assert!(stopped.contains(palette.negative));
        assert!(stopped.contains("M4 4l4 4M8 4l-4 4"));
    }
}
