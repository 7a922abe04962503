// Copyright 2026 the Windrow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windrow Progress: time-driven progress fills for media rows.
//!
//! A row of in-progress media items shows a fill that advances with wall
//! time between a known start and end: live broadcasts, currently-airing
//! episodes, and similar. This crate provides the two pieces a host needs:
//!
//! - [`fill_percent`]: the fill width for one item as a pure function of
//!   start, end, and now — all host-supplied milliseconds, so there is no
//!   clock to mock in tests.
//! - [`TickerRegistry`]: keyed periodic deadlines driving re-evaluation.
//!   Each owning element attaches a ticker when it enters the interface and
//!   detaches on removal, which cancels the periodic task so nothing leaks
//!   past the owner's lifetime.
//!
//! The registry never sleeps or spawns anything; the host calls
//! [`TickerRegistry::poll`] from whatever timing facility it already has
//! and re-renders the returned keys.
//!
//! ## Example
//!
//! ```rust
//! use windrow_progress::{AUTO_TIME_PERIOD_MS, TickerRegistry, fill_percent};
//!
//! // A program running from t=0 for 90 minutes, observed at minute 27.
//! let pct = fill_percent(0, 5_400_000, 1_620_000);
//! assert_eq!(pct, 30.0);
//!
//! let mut tickers: TickerRegistry<u32> = TickerRegistry::new();
//! tickers.attach(7, AUTO_TIME_PERIOD_MS, 0);
//!
//! // Nothing due until a full period has elapsed.
//! assert!(tickers.poll(59_000).is_empty());
//! assert_eq!(tickers.poll(60_000), [7]);
//!
//! // The owner goes away; its ticker must go with it.
//! assert!(tickers.detach(&7));
//! assert!(tickers.poll(240_000).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

/// Default re-evaluation period for time-driven fills, in milliseconds.
///
/// Fills move slowly enough that once a minute keeps them honest.
pub const AUTO_TIME_PERIOD_MS: u64 = 60_000;

/// Progress through the `[start_ms, end_ms]` window at `now_ms`, in percent.
///
/// The result is clamped to `[0.0, 100.0]`: times before the window read 0,
/// times past it read 100. A degenerate window (`end_ms <= start_ms`) reads
/// 100 once `now_ms` reaches the end and 0 before it.
#[must_use]
pub fn fill_percent(start_ms: u64, end_ms: u64, now_ms: u64) -> f64 {
    if end_ms <= start_ms {
        return if now_ms >= end_ms { 100.0 } else { 0.0 };
    }
    if now_ms <= start_ms {
        return 0.0;
    }

    let elapsed = (now_ms - start_ms) as f64;
    let total = (end_ms - start_ms) as f64;
    let pct = 100.0 * (elapsed / total);
    if pct > 100.0 { 100.0 } else { pct }
}

#[derive(Copy, Clone, Debug)]
struct Ticker {
    period_ms: u64,
    next_due_ms: u64,
}

/// Keyed periodic deadlines with host-supplied time.
///
/// Keys identify the owning element. Attaching an already-present key
/// replaces its ticker outright — a re-attached owner must not inherit a
/// stale schedule — and detaching cancels the deadline entirely.
#[derive(Clone, Debug, Default)]
pub struct TickerRegistry<K> {
    tickers: HashMap<K, Ticker>,
}

impl<K> TickerRegistry<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tickers: HashMap::new(),
        }
    }

    /// Schedules a ticker for `key`, first firing one period after `now_ms`.
    ///
    /// Any existing ticker for the same key is replaced. A zero period is
    /// clamped to one millisecond.
    pub fn attach(&mut self, key: K, period_ms: u64, now_ms: u64) {
        debug_assert!(period_ms > 0, "ticker period must be non-zero");
        let period_ms = period_ms.max(1);
        self.tickers.insert(
            key,
            Ticker {
                period_ms,
                next_due_ms: now_ms.saturating_add(period_ms),
            },
        );
    }

    /// Cancels the ticker for `key`. Returns `false` when none existed.
    pub fn detach(&mut self, key: &K) -> bool {
        self.tickers.remove(key).is_some()
    }

    /// Returns `true` when a ticker exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.tickers.contains_key(key)
    }

    /// Number of scheduled tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Returns `true` when nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Collects the keys whose deadline has arrived at `now_ms`.
    ///
    /// Each returned ticker's deadline advances by whole periods until it
    /// lies in the future again, so a delayed poll fires once rather than
    /// replaying every missed period, and the schedule keeps its original
    /// phase instead of drifting by the polling latency.
    pub fn poll(&mut self, now_ms: u64) -> Vec<K> {
        let mut due = Vec::new();
        for (key, ticker) in &mut self.tickers {
            if ticker.next_due_ms <= now_ms {
                due.push(key.clone());
                while ticker.next_due_ms <= now_ms {
                    ticker.next_due_ms = ticker.next_due_ms.saturating_add(ticker.period_ms);
                }
            }
        }
        due
    }
}
