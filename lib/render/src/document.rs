//! Document assembly: the three complete SVG shapes.
//!
//! Each builder returns one self-contained document string with no
//! dependency on previously rendered state. Geometry comes from the
//! layout stacks, colors from the palette, leaf markup from the
//! fragment builders, and every user-controlled string passes through
//! the escaper exactly once on its way in.

use crate::escape::escape;
use crate::fragments::{battery_gauge, status_icon};
use crate::layout::{
    DEVICE_CANVAS_W, DEVICE_ROW_H, DEVICE_STACK, ERROR_CANVAS_H, ERROR_CANVAS_W, PADDING,
    SUMMARY_CANVAS_W, SUMMARY_CONTENT_W, SUMMARY_FIRST_LINE_Y, SUMMARY_STACK,
};
use crate::model::{DeviceStatus, UsageSummary};
use crate::textflow::{FlowBudget, flow_text};
use crate::theme::Palette;

/// Font stack shared by the list and summary documents.
const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

// ── Device list ─────────────────────────────────────────────────────

/// Render the device-list document.
///
/// One fixed-height row per record, stacked in input order. The header
/// reports the running/total aggregate; an empty list renders as just
/// the header band.
pub fn device_list_card(devices: &[DeviceStatus], palette: &Palette) -> String {
    let total_h = DEVICE_STACK.height(devices.len());
    let running = devices.iter().filter(|d| d.running).count();
    let card_w = DEVICE_CANVAS_W - 2 * PADDING;

    let mut svg = String::with_capacity(1600 + devices.len() * 1024);
    svg.push_str(&format!(
        r#"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <style>
      .title {{ font-family: {font}; font-size: 18px; font-weight: 600; fill: {text}; }}
      .device-name {{ font-family: {font}; font-size: 16px; font-weight: 600; fill: {text}; }}
      .device-info {{ font-family: {font}; font-size: 12px; fill: {secondary}; }}
      .status-text {{ font-family: {font}; font-size: 11px; font-weight: 500; }}
      .running {{ fill: {running_text}; }}
      .stopped {{ fill: {stopped_text}; }}
    </style>
  </defs>
  <rect width="100%" height="100%" fill="{bg}" rx="8"/>
  <g transform="translate({pad}, {pad})">
    <g transform="translate(0, 10)">
      <rect x="0" y="0" width="20" height="14" rx="2" fill="none" stroke="{text}" stroke-width="1.5"/>
      <rect x="4" y="3" width="12" height="8" rx="1" fill="none" stroke="{text}" stroke-width="1"/>
      <rect x="8" y="16" width="4" height="2" fill="{text}"/>
      <rect x="6" y="18" width="8" height="1" fill="{text}"/>
    </g>
    <text x="30" y="25" class="title">设备列表</text>
    <text x="{card_w}" y="25" class="device-info" text-anchor="end">{running}/{total} 在线</text>
  </g>
"#,
        w = DEVICE_CANVAS_W,
        h = total_h,
        font = FONT_STACK,
        text = palette.text,
        secondary = palette.secondary,
        running_text = palette.running_text,
        stopped_text = palette.stopped_text,
        bg = palette.background,
        pad = PADDING,
        card_w = card_w,
        running = running,
        total = devices.len(),
    ));

    for (index, device) in devices.iter().enumerate() {
        let y = DEVICE_STACK.header_h + DEVICE_STACK.offset(index);
        svg.push_str(&device_row(device, y, palette));
    }

    svg.push_str("</svg>");
    svg
}

/// One device row at absolute offset `y`.
fn device_row(device: &DeviceStatus, y: u32, palette: &Palette) -> String {
    let card_w = DEVICE_CANVAS_W - 2 * PADDING;
    let app = device.current_app.as_deref().unwrap_or("无");
    let pill_bg = if device.running { palette.pill_running_bg } else { palette.pill_stopped_bg };
    let pill_class = if device.running { "running" } else { "stopped" };
    let pill_label = if device.running { "运行中" } else { "已停止" };

    // The whole battery block disappears with the gauge, label and
    // percentage included, not just the shell.
    let battery = match device.battery_level {
        Some(level) if level > 0 => format!(
            r#"
    <g transform="translate(15, 50)">
      <text x="0" y="12" class="device-info">电量:</text>
      <g transform="translate(35, 2)">{gauge}</g>
      <text x="60" y="12" class="device-info">{level}%</text>
    </g>"#,
            gauge = battery_gauge(level, palette),
            level = level,
        ),
        _ => String::new(),
    };

    format!(
        r#"  <g transform="translate({pad}, {y})">
    <rect width="{card_w}" height="{row_h}" rx="8" fill="{surface}" stroke="{border}" stroke-width="1"/>
    <text x="15" y="25" class="device-name">{name}</text>
    <text x="15" y="42" class="device-info">当前应用: {app}</text>{battery}
    <g transform="translate({pill_x}, 15)">
      <rect width="70" height="20" rx="10" fill="{pill_bg}"/>
      <g transform="translate(8, 4)">{icon}</g>
      <text x="40" y="14" class="status-text {pill_class}" text-anchor="middle">{pill_label}</text>
    </g>
  </g>
"#,
        pad = PADDING,
        y = y,
        card_w = card_w,
        row_h = DEVICE_ROW_H,
        surface = palette.surface,
        border = palette.border,
        name = escape(&device.name),
        app = escape(app),
        battery = battery,
        pill_x = card_w - 80,
        pill_bg = pill_bg,
        icon = status_icon(device.running, palette),
        pill_class = pill_class,
        pill_label = pill_label,
    )
}

// ── Summary ─────────────────────────────────────────────────────────

/// Render the AI usage summary document.
///
/// The text block is wrapped by the flow engine against the fixed
/// content width; document height grows linearly with the line count
/// and is never capped, so long summaries simply produce a taller card.
pub fn summary_card(summary: &UsageSummary, palette: &Palette) -> String {
    let budget = FlowBudget::for_width(SUMMARY_CONTENT_W as f64);
    let lines = flow_text(&summary.text, &budget);
    let total_h = SUMMARY_STACK.height(lines.len());
    let card_w = SUMMARY_CANVAS_W - 2 * PADDING;

    let mut svg = String::with_capacity(1600 + lines.len() * 96);
    svg.push_str(&format!(
        r#"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <style>
      .title {{ font-family: {font}; font-size: 20px; font-weight: 700; fill: {text}; }}
      .subtitle {{ font-family: {font}; font-size: 14px; font-weight: 500; fill: {secondary}; }}
      .content {{ font-family: {font}; font-size: 13px; fill: {text}; line-height: 1.6; }}
      .timestamp {{ font-family: {font}; font-size: 11px; fill: {secondary}; }}
    </style>
  </defs>
  <rect width="100%" height="100%" fill="{bg}" rx="12"/>
  <g transform="translate({pad}, {pad})">
    <g transform="translate(0, 5)">
      <circle cx="12" cy="12" r="12" fill="{accent}" opacity="0.1"/>
      <path d="M8 12l2 2 4-4M12 6v12M6 12h12" stroke="{accent}" stroke-width="2" fill="none" stroke-linecap="round"/>
    </g>
    <text x="35" y="22" class="title">AI 使用总结</text>
  </g>
  <g transform="translate({pad}, 60)">
    <rect width="{card_w}" height="50" rx="8" fill="{surface}" stroke="{border}" stroke-width="1"/>
    <text x="15" y="20" class="subtitle">设备</text>
    <text x="15" y="38" class="content">{device}</text>
  </g>
  <g transform="translate({pad}, 125)">
    <text x="0" y="0" class="subtitle">总结内容</text>
"#,
        w = SUMMARY_CANVAS_W,
        h = total_h,
        font = FONT_STACK,
        text = palette.text,
        secondary = palette.secondary,
        bg = palette.background,
        pad = PADDING,
        accent = palette.accent,
        card_w = card_w,
        surface = palette.surface,
        border = palette.border,
        device = escape(&summary.device_label),
    ));

    for (index, line) in lines.iter().enumerate() {
        let line_y = SUMMARY_FIRST_LINE_Y + SUMMARY_STACK.offset(index);
        svg.push_str(&format!(
            "    <text x=\"0\" y=\"{line_y}\" class=\"content\">{line}</text>\n",
            line = escape(line),
        ));
    }

    svg.push_str(&format!(
        r#"  </g>
  <text x="{x}" y="{y}" class="timestamp" text-anchor="end">生成时间: {ts}</text>
</svg>
"#,
        x = SUMMARY_CANVAS_W - PADDING,
        y = total_h - 15,
        ts = escape(&format_timestamp(&summary.timestamp)),
    ));
    svg
}

/// Render an RFC 3339 timestamp in the zh-CN date style.
///
/// Anything unparseable passes through untouched; a wrong-looking date
/// beats an empty one on a status card.
fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y/%m/%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

// ── Error ───────────────────────────────────────────────────────────

/// Render the fixed-size error document.
///
/// Dimensions never vary with content; overlong messages overflow
/// rather than reflow, keeping the failure card embeddable at a
/// predictable size.
pub fn error_card(message: &str, detail: &str, palette: &Palette) -> String {
    format!(
        r#"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="{bg}" rx="8"/>
  <text x="{cx}" y="50" text-anchor="middle" font-family="Arial, sans-serif" font-size="18" font-weight="600" fill="{title}">❌ {message}</text>
  <text x="{cx}" y="80" text-anchor="middle" font-family="Arial, sans-serif" font-size="13" fill="{detail_color}">{detail}</text>
  <text x="{cx}" y="105" text-anchor="middle" font-family="Arial, sans-serif" font-size="11" fill="{detail_color}">请检查API地址和参数是否正确</text>
</svg>
"#,
        w = ERROR_CANVAS_W,
        h = ERROR_CANVAS_H,
        cx = ERROR_CANVAS_W / 2,
        bg = palette.error_bg,
        title = palette.error_title,
        detail_color = palette.error_detail,
        message = escape(message),
        detail = escape(detail),
    )
}
