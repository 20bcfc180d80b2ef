//! SVG card rendering for fleet status dashboards.
//!
//! Pure, synchronous engine: loose JSON in, one complete SVG document
//! string out. Three document shapes exist (device list, AI usage
//! summary, fixed-size error card); all geometry is a deterministic
//! function of the input cardinality, so rendered cards never clip or
//! overlap regardless of how much content arrives. No I/O happens
//! here; fetching and HTTP concerns live with the service crates.

pub mod document;
pub mod escape;
pub mod fragments;
pub mod layout;
pub mod model;
pub mod textflow;
pub mod theme;

pub use document::{device_list_card, error_card, summary_card};
pub use escape::escape;
pub use model::{DeviceStatus, ModelError, UsageSummary, parse_device_list};
pub use textflow::{FlowBudget, flow_text};
pub use theme::Palette;
