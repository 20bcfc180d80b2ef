//! Bilingual text wrapping.
//!
//! Summary text mixes CJK and Latin freely, and SVG has no automatic
//! line breaking, so the engine estimates pixel widths itself with a
//! two-tier model: every ideograph in the CJK unified block costs one
//! fixed wide width, every other character one fixed narrow width.
//! Real glyph widths vary; a safety margin absorbs the estimation error
//! and the layout accepts visual slack instead of font metrics.

/// Fallback line emitted for empty or all-whitespace input.
pub const FALLBACK_LINE: &str = "暂无内容";

/// Width charged per CJK ideograph, sized for the 13px content font.
const WIDE_PX: f64 = 13.0;

/// Width charged per non-CJK character.
const NARROW_PX: f64 = 7.0;

/// Slack subtracted from the nominal budget before comparing widths.
const SAFETY_MARGIN_PX: f64 = 10.0;

/// Budget fraction past which clause punctuation forces a break.
const BREAK_PRESSURE: f64 = 0.70;

/// Punctuation preferred as a line end once pressure is reached.
const BREAK_CHARS: [char; 11] = ['。', '！', '？', '；', '，', '、', '.', '!', '?', ';', ','];

/// Pixel budget and character-width model for one wrapped block.
#[derive(Debug, Clone, Copy)]
pub struct FlowBudget {
    /// Nominal pixel width available to a line.
    pub max_px: f64,
    /// Fixed width charged per CJK ideograph.
    pub wide_px: f64,
    /// Fixed width charged per other character.
    pub narrow_px: f64,
    /// Safety margin subtracted from `max_px`.
    pub margin_px: f64,
}

impl FlowBudget {
    /// Budget over `max_px` pixels with the standard 13px-font widths.
    pub fn for_width(max_px: f64) -> Self {
        Self {
            max_px,
            wide_px: WIDE_PX,
            narrow_px: NARROW_PX,
            margin_px: SAFETY_MARGIN_PX,
        }
    }

    /// Effective per-line limit after the safety margin.
    pub fn limit(&self) -> f64 {
        self.max_px - self.margin_px
    }

    /// Estimated width of one character.
    fn char_px(&self, ch: char) -> f64 {
        if is_cjk(ch) { self.wide_px } else { self.narrow_px }
    }

    /// Estimated width of a whole line.
    pub fn line_px(&self, line: &str) -> f64 {
        line.chars().map(|ch| self.char_px(ch)).sum()
    }
}

/// CJK unified ideograph check (U+4E00..=U+9FA5).
///
/// Fullwidth punctuation sits outside this block and is deliberately
/// charged the narrow width; the safety margin covers the difference.
fn is_cjk(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// Wrap `text` into display lines that fit `budget`.
///
/// Whitespace runs (including newlines) collapse to single spaces and
/// the ends are trimmed first; empty results yield exactly one
/// [`FALLBACK_LINE`] so callers always have a non-zero content height.
/// The walk is greedy: a character that would push the line past the
/// effective limit starts a new line instead, and clause punctuation
/// ends the line early once it is more than 70% full, which reads more
/// naturally than breaking mid-clause on width exhaustion alone.
///
/// Guarantees: at least one line for any input, no empty lines, no
/// character split across lines. A single character wider than the
/// whole budget still occupies its own line and visually overflows;
/// that tradeoff is accepted rather than corrected.
pub fn flow_text(text: &str, budget: &FlowBudget) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return vec![FALLBACK_LINE.to_string()];
    }

    let limit = budget.limit();
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_px = 0.0f64;

    for ch in normalized.chars() {
        let w = budget.char_px(ch);
        if !line.is_empty() && line_px + w > limit {
            close_line(&mut lines, &mut line);
            line_px = 0.0;
        }
        line.push(ch);
        line_px += w;
        if line_px > limit * BREAK_PRESSURE && BREAK_CHARS.contains(&ch) {
            close_line(&mut lines, &mut line);
            line_px = 0.0;
        }
    }
    close_line(&mut lines, &mut line);

    tracing::debug!(lines = lines.len(), limit, "wrapped text block");
    lines
}

/// Push the trimmed accumulator as a line if anything visible remains.
fn close_line(lines: &mut Vec<String>, line: &mut String) {
    let trimmed = line.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    line.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cjk(n: usize) -> String {
        std::iter::repeat_n('设', n).collect()
    }

    #[test]
    fn empty_input_yields_fallback_line() {
        let budget = FlowBudget::for_width(460.0);
        assert_eq!(flow_text("", &budget), vec![FALLBACK_LINE]);
    }

    #[test]
    fn whitespace_only_input_yields_fallback_line() {
        let budget = FlowBudget::for_width(460.0);
        assert_eq!(flow_text("   \n\t  \u{3000} ", &budget), vec![FALLBACK_LINE]);
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let budget = FlowBudget::for_width(460.0);
        assert_eq!(flow_text("今天使用正常", &budget), vec!["今天使用正常"]);
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        let budget = FlowBudget::for_width(460.0);
        assert_eq!(flow_text("a\n\n  b\tc  d", &budget), vec!["a b c d"]);
    }

    #[test]
    fn cjk_fills_exactly_twenty_chars_per_line() {
        // limit = 270 - 10 = 260 = 20 wide chars. 300 ideographs wrap
        // to exactly 15 full lines.
        let budget = FlowBudget::for_width(270.0);
        let lines = flow_text(&cjk(300), &budget);
        assert_eq!(lines.len(), 15);
        for line in &lines {
            assert_eq!(line.chars().count(), 20);
        }
    }

    #[test]
    fn no_line_exceeds_the_effective_limit() {
        let budget = FlowBudget::for_width(270.0);
        let mixed = "Device usage 概览：今天一共使用了九个应用，总时长约三小时。\
                     Top apps were Chrome, 微信 and Figma; battery dropped from 90% to 41%."
            .repeat(3);
        for line in flow_text(&mixed, &budget) {
            assert!(
                budget.line_px(&line) <= budget.limit() || line.chars().count() == 1,
                "line too wide: {line}"
            );
        }
    }

    #[test]
    fn latin_packs_more_chars_than_cjk() {
        // limit 70px: ten 7px Latin chars fit, only five 13px ideographs.
        let budget = FlowBudget::for_width(80.0);
        let latin = flow_text("aaaaaaaaaaaa", &budget);
        assert_eq!(latin[0].chars().count(), 10);
        let wide = flow_text(&cjk(12), &budget);
        assert_eq!(wide[0].chars().count(), 5);
    }

    #[test]
    fn clause_punctuation_breaks_past_pressure_point() {
        // limit 260, pressure point 182. Fifteen ideographs (195px) put
        // the comma past the point, so the line ends there instead of
        // running to width exhaustion.
        let budget = FlowBudget::for_width(270.0);
        let text = format!("{}，{}", cjk(15), cjk(8));
        let lines = flow_text(&text, &budget);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with('，'));
        assert_eq!(lines[1], cjk(8));
    }

    #[test]
    fn early_punctuation_does_not_break() {
        let budget = FlowBudget::for_width(270.0);
        let text = format!("{}，{}", cjk(3), cjk(3));
        assert_eq!(flow_text(&text, &budget).len(), 1);
    }

    #[test]
    fn single_char_wider_than_budget_gets_its_own_line() {
        let budget = FlowBudget::for_width(20.0); // limit 10 < one ideograph
        let lines = flow_text("设备", &budget);
        assert_eq!(lines, vec!["设", "备"]);
    }

    #[test]
    fn produces_at_least_one_line_for_any_input() {
        let budget = FlowBudget::for_width(270.0);
        for text in ["x", "。", " a ", &cjk(1), &cjk(1000)] {
            assert!(!flow_text(text, &budget).is_empty());
        }
    }

    #[test]
    fn lines_concatenate_back_to_normalized_text() {
        // Wrapping only inserts breaks; no character is lost or added.
        let budget = FlowBudget::for_width(270.0);
        let text = format!("{}。{}", cjk(40), cjk(25));
        let joined: String = flow_text(&text, &budget).concat();
        assert_eq!(joined, text);
    }
}
