//! Light and dark color palettes.
//!
//! A palette is an immutable mapping from semantic role to a hex color.
//! Exactly two palettes exist; the binary theme flag picks one per
//! render and nothing is ever mutated or shared between requests.

/// Color roles used across all three document shapes.
///
/// `positive` and `negative` double as battery fill colors; the pill
/// and error roles carry the handful of colors that do not derive from
/// the base set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Document background.
    pub background: &'static str,
    /// Primary text.
    pub text: &'static str,
    /// Card / inner surface background.
    pub surface: &'static str,
    /// Card border.
    pub border: &'static str,
    /// Secondary text (labels, timestamps).
    pub secondary: &'static str,
    /// Accent color (summary icon).
    pub accent: &'static str,
    /// Running status and healthy battery fill.
    pub positive: &'static str,
    /// Stopped status and low battery fill.
    pub negative: &'static str,
    /// Battery shell outline and terminal.
    pub gauge_stroke: &'static str,
    /// Status pill fill behind running text.
    pub pill_running_bg: &'static str,
    /// Status pill fill behind stopped text.
    pub pill_stopped_bg: &'static str,
    /// Running pill label color.
    pub running_text: &'static str,
    /// Stopped pill label color.
    pub stopped_text: &'static str,
    /// Error document background.
    pub error_bg: &'static str,
    /// Error title color.
    pub error_title: &'static str,
    /// Error detail and hint color.
    pub error_detail: &'static str,
}

impl Palette {
    /// The light palette (default).
    pub fn light() -> Self {
        Self {
            background: "#ffffff",
            text: "#1f2937",
            surface: "#f9fafb",
            border: "#e5e7eb",
            secondary: "#6b7280",
            accent: "#2563eb",
            positive: "#10b981",
            negative: "#ef4444",
            gauge_stroke: "#6b7280",
            pill_running_bg: "#dcfce7",
            pill_stopped_bg: "#fee2e2",
            running_text: "#10b981",
            stopped_text: "#ef4444",
            error_bg: "#fee2e2",
            error_title: "#dc2626",
            error_detail: "#7f1d1d",
        }
    }

    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            background: "#0f172a",
            text: "#f1f5f9",
            surface: "#1e293b",
            border: "#334155",
            secondary: "#94a3b8",
            accent: "#3b82f6",
            positive: "#10b981",
            negative: "#ef4444",
            gauge_stroke: "#9ca3af",
            pill_running_bg: "#064e3b",
            pill_stopped_bg: "#7f1d1d",
            running_text: "#065f46",
            stopped_text: "#7f1d1d",
            error_bg: "#1e293b",
            error_title: "#ef4444",
            error_detail: "#991b1b",
        }
    }

    /// Select a palette from the binary theme flag.
    pub fn select(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}
