// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scrolling page that exercises the tracing and diagnostics
//! pipeline.
//!
//! A page of stacked sections is scrolled in bursts while a 60 Hz display
//! delivers frames. Events go to both a
//! [`PrettyPrintSink`](hunt_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](hunt_debug::recorder::RecorderSink), and the recording is
//! exported as a Chrome trace JSON file.

use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::BufWriter;
use std::rc::Rc;

use hunt_core::Hunter;
use hunt_core::backend::{FrameHost, FrameRequest, Target};
use hunt_core::config::{HuntConfig, Settings};
use hunt_core::scheduler::FrameSlot;
use hunt_core::time::{Duration, HostTime, Timebase};
use hunt_core::tracked::Tracked;
use kurbo::Rect;

use hunt_debug::pretty::PrettyPrintSink;
use hunt_debug::recorder::RecorderSink;

const SECTION_COUNT: usize = 12;
const SECTION_HEIGHT: f64 = 400.0;
const SECTION_GAP: f64 = 200.0;
const VIEWPORT_HEIGHT: f64 = 800.0;
/// Debounce threshold in milliseconds.
const DEBOUNCE_MS: u64 = 50;
/// Simulation step, refresh interval and scroll event interval, in µs.
const STEP_US: u64 = 4_000;
const REFRESH_US: u64 = 16_000;
const SCROLL_EVERY_US: u64 = 8_000;
/// (start ms, end ms, pixels per scroll event)
const BURSTS: [(u64, u64, f64); 4] = [
    (100, 400, 60.0),
    (700, 900, 90.0),
    (1_300, 1_500, -120.0),
    (1_800, 2_300, 150.0),
];
const RUN_US: u64 = 2_800_000;

/// A section of the page, positioned in page coordinates.
struct Section {
    page_top: f64,
    scroll_y: Rc<Cell<f64>>,
}

impl Target for Section {
    fn bounding_rect(&self) -> Rect {
        let top = self.page_top - self.scroll_y.get();
        Rect::new(0.0, top, 600.0, top + SECTION_HEIGHT)
    }
}

/// A display that can always deliver a frame; time is set by the loop.
#[derive(Debug, Default)]
struct SimHost {
    now: HostTime,
    next_request: i32,
}

impl FrameHost for SimHost {
    fn now(&self) -> HostTime {
        self.now
    }

    fn request_frame(&mut self) -> Option<FrameRequest> {
        self.next_request += 1;
        Some(FrameRequest(self.next_request))
    }

    fn cancel_frame(&mut self, _request: FrameRequest) {}
}

fn main() {
    let timebase = Timebase::MICROS;

    // -- sinks -------------------------------------------------------------
    let pretty = PrettyPrintSink::new(Box::new(std::io::stdout()), timebase);
    let recorder = Rc::new(RefCell::new(RecorderSink::new()));

    // -- service -----------------------------------------------------------
    let settings = Settings::from_millis(DEBOUNCE_MS, timebase);
    let mut hunter = Hunter::new(SimHost::default(), settings, VIEWPORT_HEIGHT);
    hunter.set_trace_sink((pretty, Rc::clone(&recorder)));

    let scroll_y = Rc::new(Cell::new(0.0));
    let entered = Rc::new(Cell::new(0_u32));
    let left = Rc::new(Cell::new(0_u32));

    let sections: Vec<Section> = (0..SECTION_COUNT)
        .map(|i| Section {
            page_top: i as f64 * (SECTION_HEIGHT + SECTION_GAP),
            scroll_y: Rc::clone(&scroll_y),
        })
        .collect();
    let (persistent, once): (Vec<_>, Vec<_>) = sections
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);

    let on_enter = {
        let entered = Rc::clone(&entered);
        move |_: &Tracked<Section>| entered.set(entered.get() + 1)
    };
    let on_leave = {
        let left = Rc::clone(&left);
        move |_: &Tracked<Section>| left.set(left.get() + 1)
    };
    let config = HuntConfig::new()
        .offset(50.0)
        .on_enter(on_enter)
        .on_leave(on_leave);

    hunter
        .register(
            persistent.into_iter().map(|(_, s)| s).collect::<Vec<_>>(),
            &config.clone().persist(true),
        )
        .expect("offset is finite");
    hunter
        .register(once.into_iter().map(|(_, s)| s).collect::<Vec<_>>(), &config)
        .expect("offset is finite");

    // -- simulated loop ----------------------------------------------------
    let mut t_us: u64 = 0;
    while t_us < RUN_US {
        hunter.host_mut().now = HostTime(t_us);
        let t_ms = t_us / 1_000;

        if t_us % SCROLL_EVERY_US == 0
            && let Some(&(_, _, delta)) = BURSTS
                .iter()
                .find(|(start, end, _)| (*start..*end).contains(&t_ms))
        {
            scroll_y.set((scroll_y.get() + delta).max(0.0));
            hunter.scroll();
        }

        if t_us % REFRESH_US == 0 && matches!(hunter.slot(), FrameSlot::Scheduled(_)) {
            hunter.frame();
        }

        if t_us == 1_000_000 {
            hunter.resize(VIEWPORT_HEIGHT * 1.25);
        }

        t_us += STEP_US;
    }
    hunter.host_mut().now = HostTime(t_us) + Duration(REFRESH_US);
    hunter.evaluate();

    drop(hunter.take_trace_sink());

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    hunt_debug::chrome::export(recorder.borrow().events(), timebase, &mut writer)
        .expect("failed to write Chrome trace");

    println!(
        "Wrote {path} ({} events, {} enters, {} leaves, {} still tracked)",
        recorder.borrow().len(),
        entered.get(),
        left.get(),
        hunter.len(),
    );
}
