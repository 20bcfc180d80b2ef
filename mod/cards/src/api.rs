//! SVG card endpoints.
//!
//! Both handlers share one shape: resolve the theme, demand the
//! required parameters, fetch upstream JSON, render. Every failure
//! path returns a rendered error document in the caller's theme, never
//! a bare status; the service degrades to an embeddable image even
//! when the data source is down.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::{info, warn};

use fleetcard_core::ServiceError;
use fleetcard_render::{
    Palette, UsageSummary, device_list_card, error_card, parse_device_list, summary_card,
};

use crate::fetch::{FetchConfig, Upstream, summary_url};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Shared application state.
pub type AppState = Arc<CardService>;

/// Renders cards against a caller-supplied upstream API.
pub struct CardService {
    upstream: Upstream,
    cache_max_age: u32,
}

impl CardService {
    pub fn new(config: FetchConfig, cache_max_age: u32) -> reqwest::Result<Self> {
        Ok(Self {
            upstream: Upstream::new(&config)?,
            cache_max_age,
        })
    }

    /// Fetch the device list and render the list document.
    async fn render_devices(&self, api: &str, dark: bool) -> Result<String, ServiceError> {
        let payload = self.upstream.fetch_json(api).await?;
        let devices = parse_device_list(&payload)
            .map_err(|err| ServiceError::BadPayload(err.to_string()))?;
        info!(devices = devices.len(), dark, "rendering device list card");
        Ok(device_list_card(&devices, &Palette::select(dark)))
    }

    /// Fetch one device's AI summary and render the summary document.
    async fn render_summary(
        &self,
        api: &str,
        device_id: &str,
        dark: bool,
    ) -> Result<String, ServiceError> {
        let payload = self.upstream.fetch_json(&summary_url(api, device_id)).await?;
        let summary = UsageSummary::from_json(&payload);
        info!(device = %summary.device_label, dark, "rendering summary card");
        Ok(summary_card(&summary, &Palette::select(dark)))
    }
}

/// Build the cards router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/devices-svg", get(devices_svg))
        .route("/ai-summary-svg", get(ai_summary_svg))
        .with_state(state)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardQuery {
    api: Option<String>,
    device_id: Option<String>,
    theme: Option<String>,
}

/// The literal "dark" selects the dark palette; anything else is light.
fn is_dark(theme: Option<&str>) -> bool {
    theme == Some("dark")
}

/// Which endpoint failed, for the error document title.
#[derive(Clone, Copy)]
enum CardKind {
    Devices,
    Summary,
}

impl CardKind {
    fn failure_title(self) -> &'static str {
        match self {
            CardKind::Devices => "生成SVG失败",
            CardKind::Summary => "获取AI总结失败",
        }
    }
}

/// Handler failure: the taxonomy error plus the resolved theme, so the
/// error document comes back in the palette the caller asked for.
struct CardError {
    err: ServiceError,
    dark: bool,
    kind: CardKind,
}

impl IntoResponse for CardError {
    fn into_response(self) -> Response {
        let status = self.err.status_code();
        let title = if matches!(self.err, ServiceError::MissingParam(_)) {
            "缺少必需参数"
        } else {
            self.kind.failure_title()
        };
        let svg = error_card(title, &self.err.to_string(), &Palette::select(self.dark));
        (
            status,
            [
                (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
                (header::CACHE_CONTROL, "no-cache"),
            ],
            svg,
        )
            .into_response()
    }
}

/// Reject absent or empty required parameters.
fn require<'a>(
    value: Option<&'a str>,
    missing: &str,
    dark: bool,
    kind: CardKind,
) -> Result<&'a str, CardError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CardError {
            err: ServiceError::MissingParam(missing.to_string()),
            dark,
            kind,
        }),
    }
}

/// 200 response with the SVG body and the public cache policy.
fn svg_response(svg: String, max_age: u32) -> Response {
    (
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE.to_string()),
            (header::CACHE_CONTROL, format!("public, max-age={max_age}")),
        ],
        svg,
    )
        .into_response()
}

async fn devices_svg(
    State(svc): State<AppState>,
    Query(q): Query<CardQuery>,
) -> Result<Response, CardError> {
    let dark = is_dark(q.theme.as_deref());
    let api = require(q.api.as_deref(), "请提供api参数", dark, CardKind::Devices)?;
    match svc.render_devices(api, dark).await {
        Ok(svg) => Ok(svg_response(svg, svc.cache_max_age)),
        Err(err) => {
            warn!(error = ?err, api, "device list card failed");
            Err(CardError { err, dark, kind: CardKind::Devices })
        }
    }
}

async fn ai_summary_svg(
    State(svc): State<AppState>,
    Query(q): Query<CardQuery>,
) -> Result<Response, CardError> {
    let dark = is_dark(q.theme.as_deref());
    let api = require(q.api.as_deref(), "请提供api和deviceId参数", dark, CardKind::Summary)?;
    let device_id = require(
        q.device_id.as_deref(),
        "请提供api和deviceId参数",
        dark,
        CardKind::Summary,
    )?;
    match svc.render_summary(api, device_id, dark).await {
        Ok(svg) => Ok(svg_response(svg, svc.cache_max_age)),
        Err(err) => {
            warn!(error = ?err, api, device_id, "summary card failed");
            Err(CardError { err, dark, kind: CardKind::Summary })
        }
    }
}
