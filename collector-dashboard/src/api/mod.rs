//! HTTP handlers for collector-dashboard
//!
//! `/api/*` routes forward to the collector backend and relay its JSON;
//! `ui` serves the HTML pages and their static assets.

pub mod artists;
pub mod collect;
pub mod extraction;
pub mod health;
pub mod scoring;
pub mod ui;

mod proxy;

pub use artists::artist_routes;
pub use collect::collect_routes;
pub use extraction::extraction_routes;
pub use health::health_routes;
pub use scoring::scoring_routes;
pub use ui::ui_routes;
