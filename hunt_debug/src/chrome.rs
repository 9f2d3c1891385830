// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads events from a [`RecorderSink`](super::recorder::RecorderSink)
//! recording and writes [Chrome Trace Event Format][format] JSON to the given
//! writer.
//!
//! Scroll, frame and resize signals land on the `Scheduler` track, evaluation
//! passes and their transitions on the `Evaluate` track. Registry size is
//! emitted as a counter after every pass.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use hunt_core::time::Timebase;
use hunt_core::trace::Transition;

use crate::recorder::RecordedEvent;

const TID_SCHEDULER: u32 = 0;
const TID_EVALUATE: u32 = 1;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(
    recording: &[RecordedEvent],
    timebase: Timebase,
    writer: &mut dyn Write,
) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in recording {
        match recorded {
            RecordedEvent::Register(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Register",
                    "cat": "Registry",
                    "ts": ticks_to_us(e.at.ticks(), timebase),
                    "pid": 0,
                    "tid": TID_EVALUATE,
                    "s": "t",
                    "args": {
                        "first": e.first.map(|id| id.get()),
                        "count": e.count,
                        "tracked": e.tracked,
                    }
                }));
            }
            RecordedEvent::Transition(e) => {
                let name = match e.transition {
                    Transition::Enter => "Enter",
                    Transition::Leave => "Leave",
                };
                events.push(json!({
                    "ph": "i",
                    "name": name,
                    "cat": "Evaluate",
                    "ts": ticks_to_us(e.stamp.at.ticks(), timebase),
                    "pid": 0,
                    "tid": TID_EVALUATE,
                    "s": "t",
                    "args": {
                        "pass": e.stamp.pass,
                        "id": e.id.get(),
                        "top": e.top,
                        "height": e.height,
                        "offset": e.offset,
                        "viewport_height": e.viewport_height,
                    }
                }));
            }
            RecordedEvent::Evict(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Evict",
                    "cat": "Evaluate",
                    "ts": ticks_to_us(e.stamp.at.ticks(), timebase),
                    "pid": 0,
                    "tid": TID_EVALUATE,
                    "s": "t",
                    "args": {
                        "pass": e.stamp.pass,
                        "id": e.id.get(),
                    }
                }));
            }
            RecordedEvent::PassSummary(s) => {
                let ts = ticks_to_us(s.stamp.at.ticks(), timebase);
                events.push(json!({
                    "ph": "i",
                    "name": "Pass",
                    "cat": "Evaluate",
                    "ts": ts,
                    "pid": 0,
                    "tid": TID_EVALUATE,
                    "s": "t",
                    "args": {
                        "pass": s.stamp.pass,
                        "examined": s.examined,
                        "entered": s.entered,
                        "left": s.left,
                        "evicted": s.evicted,
                    }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": "Tracked",
                    "ts": ts,
                    "pid": 0,
                    "args": {
                        "remaining": s.remaining,
                    }
                }));
            }
            RecordedEvent::Scroll(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Scroll",
                    "cat": "Scheduler",
                    "ts": ticks_to_us(e.at.ticks(), timebase),
                    "pid": 0,
                    "tid": TID_SCHEDULER,
                    "s": "t",
                    "args": {
                        "superseded": e.superseded.map(|r| r.0),
                        "scheduled": e.scheduled.map(|r| r.0),
                    }
                }));
            }
            RecordedEvent::Frame(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Frame",
                    "cat": "Scheduler",
                    "ts": ticks_to_us(e.at.ticks(), timebase),
                    "pid": 0,
                    "tid": TID_SCHEDULER,
                    "s": "t",
                    "args": {
                        "quiet_us": ticks_to_us(e.elapsed.ticks(), timebase),
                        "outcome": format!("{:?}", e.outcome),
                    }
                }));
            }
            RecordedEvent::Resize(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Resize",
                    "cat": "Scheduler",
                    "ts": ticks_to_us(e.at.ticks(), timebase),
                    "pid": 0,
                    "tid": TID_SCHEDULER,
                    "s": "g",
                    "args": {
                        "height": e.height,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn ticks_to_us(ticks: u64, timebase: Timebase) -> f64 {
    timebase.ticks_to_nanos(ticks) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use hunt_core::scheduler::FrameOutcome;
    use hunt_core::time::{Duration, HostTime};
    use hunt_core::trace::{FrameEvent, PassStamp, PassSummary, ScrollEvent, TraceSink};

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_scroll(&ScrollEvent {
            at: HostTime(1_000),
            superseded: None,
            scheduled: None,
        });
        rec.on_frame(&FrameEvent {
            at: HostTime(17_000),
            elapsed: Duration(16_000),
            outcome: FrameOutcome::Settled,
        });
        rec.on_pass_summary(&PassSummary {
            stamp: PassStamp {
                pass: 3,
                at: HostTime(17_000),
            },
            examined: 2,
            entered: 1,
            left: 0,
            evicted: 0,
            remaining: 2,
        });

        let mut out = Vec::new();
        export(rec.events(), Timebase::MICROS, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4, "pass summary also emits a counter");

        assert_eq!(parsed[0]["name"], "Scroll");
        assert_eq!(parsed[0]["ts"], 1_000.0);
        assert_eq!(parsed[0]["args"]["scheduled"], Value::Null);

        assert_eq!(parsed[1]["name"], "Frame");
        assert_eq!(parsed[1]["args"]["outcome"], "Settled");
        assert_eq!(parsed[1]["args"]["quiet_us"], 16_000.0);

        assert_eq!(parsed[2]["name"], "Pass");
        assert_eq!(parsed[3]["ph"], "C");
        assert_eq!(parsed[3]["args"]["remaining"], 2);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], Timebase::NANOS, &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
