// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! View-side navigation state and lifecycle events

mod event;
mod tracker;

pub use event::{EventLog, EventSink, NavigationEvent};
pub use tracker::{LoadState, NavigationTracker};
