// Copyright (C) 2026 Planview Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{shift, site, utc};
use crate::{PlanningDataset, PlanningView, ViewMode};
use chrono::NaiveDate;
use planview_domain::{LifecycleStatus, LocalCalendar, TimeWindow};

fn view(mode: ViewMode) -> PlanningView {
    PlanningView::new(
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
        mode,
        TimeWindow::default(),
        LocalCalendar::utc(),
    )
}

#[test]
fn test_day_mode_shows_one_day() {
    let view = view(ViewMode::Day);
    assert_eq!(view.visible_days(), vec![view.anchor]);
}

#[test]
fn test_week_mode_shows_monday_first_week() {
    // Anchored on a Wednesday.
    let view = view(ViewMode::Week);
    let days = view.visible_days();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    assert_eq!(days[6], NaiveDate::from_ymd_opt(2026, 3, 8).unwrap());
}

#[test]
fn test_step_forward_by_mode() {
    let mut day_view = view(ViewMode::Day);
    day_view.step_forward();
    assert_eq!(day_view.anchor, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());

    let mut week_view = view(ViewMode::Week);
    week_view.step_forward();
    assert_eq!(
        week_view.anchor,
        NaiveDate::from_ymd_opt(2026, 3, 11).unwrap()
    );
}

#[test]
fn test_step_back_by_mode() {
    let mut day_view = view(ViewMode::Day);
    day_view.step_back();
    assert_eq!(day_view.anchor, NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());

    let mut week_view = view(ViewMode::Week);
    week_view.step_back();
    assert_eq!(
        week_view.anchor,
        NaiveDate::from_ymd_opt(2026, 2, 25).unwrap()
    );
}

#[test]
fn test_go_to_jumps_anchor() {
    let mut view = view(ViewMode::Day);
    let target = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    view.go_to(target);
    assert_eq!(view.anchor, target);
}

#[test]
fn test_replace_dataset_is_wholesale() {
    let mut view = view(ViewMode::Day);
    view.replace_dataset(PlanningDataset {
        sites: vec![site(10, "HQ")],
        collaborators: Vec::new(),
        shifts: vec![shift(
            1,
            10,
            utc(4, 8, 0),
            utc(4, 10, 0),
            LifecycleStatus::Draft,
            Vec::new(),
        )],
    });
    assert_eq!(view.dataset.shifts.len(), 1);

    // A later snapshot replaces everything; nothing merges.
    view.replace_dataset(PlanningDataset {
        sites: vec![site(20, "Studio")],
        collaborators: Vec::new(),
        shifts: Vec::new(),
    });
    assert!(view.dataset.shifts.is_empty());
    assert_eq!(view.dataset.sites[0].id, 20);
}
