//! Team cost estimator: role list, rate tables, derived totals and CSV export.
//!
//! Everything here except `export::download_csv` is plain data and pure
//! functions, so the pricing page can recompute after every interaction.

pub mod aggregates;
pub mod catalog;
pub mod engine;
pub mod export;
pub mod model;

pub use aggregates::{build_cost_breakdown, compute_aggregates, format_money, BreakdownSlice};
pub use catalog::{PRESETS, ROLE_TEMPLATES};
pub use engine::Estimator;
pub use export::{download_csv, export_csv};
pub use model::{parse_rate_input, Currency, Duration, RoleId, RoleUpdate, Seniority, WorkModel};
