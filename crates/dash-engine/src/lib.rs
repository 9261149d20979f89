//! Filter & aggregate engine for the campaign dashboard.
//!
//! Everything here is derived state: given a validated upload and a filter
//! selection, the engine recomputes the filtered table, the grouped sums,
//! the pivot frame, and the chart specifications from scratch on every
//! interaction. Nothing is mutated in place between interactions.
//!
//! - **selection**: the user-chosen subset of `name` values
//! - **filter**: order-preserving row subset by `name`
//! - **record**: typed rows decoded from the validated frame
//! - **aggregate**: group-by-(name, camp_name, action_date) sums
//! - **pivot**: aggregate rows reshaped for table display
//! - **chart**: grouped-bar-chart encoding intents for the renderer
//! - **session**: per-session holder wiring the stages together

pub mod aggregate;
pub mod chart;
pub mod filter;
pub mod pivot;
pub mod record;
pub mod selection;
pub mod session;

pub use aggregate::{AggregateRow, aggregate};
pub use chart::{ChartBar, ChartSpec, Measure, chart_specs};
pub use filter::{FilteredTable, apply_filter};
pub use pivot::pivot_frame;
pub use record::{CampaignRecord, decode_records};
pub use selection::FilterSelection;
pub use session::{DashboardSession, DashboardView};
