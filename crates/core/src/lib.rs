// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod render;
mod state;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use render::{DayLane, RenderBlock, RenderModel, SiteRow, build_render_model};
pub use state::{PlanningDataset, PlanningView, ViewMode};
