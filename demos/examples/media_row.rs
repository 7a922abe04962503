// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated media row: paging buttons on desktop, focus-follow on TV.
//!
//! This example drives a `windrow_scroller::Scroller` against a fake scroll
//! container to show:
//! - window paging on button clicks, with locale-aware button state,
//! - focus-follow recentering with the skip-when-visible policy,
//! - a time-driven progress fill ticking over the row's items.
//!
//! Run:
//! - `cargo run -p windrow_demos --example media_row`

use kurbo::Rect;
use windrow_paging::{Direction, LayoutMode, ViewportState};
use windrow_progress::{AUTO_TIME_PERIOD_MS, TickerRegistry, fill_percent};
use windrow_scroller::{HostCaps, ItemRow, ScrollPrimitive, Scroller, ScrollerConfig};

/// A stand-in scroll container that just tracks its position.
#[derive(Debug, Default)]
struct FakeContainer {
    position: f64,
}

impl ScrollPrimitive for FakeContainer {
    fn set_position(&mut self, offset: f64) {
        self.position = offset;
    }

    fn animate_to(&mut self, offset: f64) -> bool {
        // Pretend the animation completes instantly.
        self.position = offset;
        true
    }
}

fn main() {
    // Ten 100 px posters in a 350 px viewport.
    let card_rects: Vec<Rect> = (0..10)
        .map(|i| Rect::new(f64::from(i) * 100.0, 0.0, f64::from(i + 1) * 100.0, 150.0))
        .collect();
    let row = ItemRow::from_rects(card_rects.iter().copied(), windrow_anchor::Axis::Horizontal);

    let mut container = FakeContainer::default();
    let mut scroller = Scroller::new(
        ScrollerConfig::default(),
        HostCaps {
            desktop: true,
            tv: false,
        },
    );
    scroller.attach();

    let sync = |scroller: &mut Scroller, container: &FakeContainer| {
        scroller.on_metrics(ViewportState::new(container.position, 350.0, 1000.0));
    };
    sync(&mut scroller, &container);

    println!("buttons shown: {}", scroller.buttons_shown());
    println!("at start: {:?}", scroller.button_state(&LayoutMode::Ltr));

    // Click "next" twice, then "previous" once.
    for (direction, label) in [
        (Direction::Forward, "forward"),
        (Direction::Forward, "forward"),
        (Direction::Backward, "backward"),
    ] {
        scroller.page(row.extents(), direction, &LayoutMode::Ltr, &mut container);
        sync(&mut scroller, &container);
        println!(
            "paged {label}: position {:>6.1}, {:?}",
            container.position,
            scroller.button_state(&LayoutMode::Ltr)
        );
    }

    // A TV layout follows focus instead of showing buttons.
    let mut tv_container = FakeContainer::default();
    let mut tv = Scroller::new(
        ScrollerConfig {
            center_focus: true,
            skip_focus_when_visible: true,
            ..ScrollerConfig::default()
        },
        HostCaps {
            desktop: false,
            tv: true,
        },
    );
    tv.attach();

    let viewport = Rect::new(tv_container.position, 0.0, tv_container.position + 350.0, 150.0);
    tv.on_focus_moved(viewport, Some(card_rects[6]), &mut tv_container);
    println!("tv focus on card 6: position {:>6.1}", tv_container.position);

    // An already-visible card does not move the row.
    let viewport = Rect::new(tv_container.position, 0.0, tv_container.position + 350.0, 150.0);
    tv.on_focus_moved(viewport, Some(card_rects[6]), &mut tv_container);
    println!("tv focus unchanged: position {:>6.1}", tv_container.position);

    // Progress fills tick once a minute while their cards stay in the row.
    let mut tickers: TickerRegistry<usize> = TickerRegistry::new();
    tickers.attach(6, AUTO_TIME_PERIOD_MS, 0);

    let now = AUTO_TIME_PERIOD_MS;
    for card in tickers.poll(now) {
        // Card 6 plays from t=0 for five minutes.
        let pct = fill_percent(0, 5 * AUTO_TIME_PERIOD_MS, now);
        println!("card {card} progress: {pct:.0}%");
    }
    tickers.detach(&6);
}
