//! Echo pacing of the outbound report stream.
//!
//! The host consumes one report per poll but only acts on a command after
//! seeing it several polls in a row, so every fresh decision is resent a
//! configured number of times before the next one is produced.

use pokken_pad::Report;

/// Report index at which the 30 fps alignment echo is injected.
const FRAME_ALIGN_INJECT_AT: u8 = 13;
/// Alignment window: 25 reports at 8 ms equal 200 ms, six video frames.
const FRAME_ALIGN_PERIOD: u8 = 25;

#[derive(Clone, Copy, Debug)]
pub struct Pacer {
    echoes: u8,
    align_to_30fps: bool,
    last: Report,
    echoes_left: u8,
    frame_tick: u8,
}

impl Pacer {
    pub const fn new(echoes: u8, align_to_30fps: bool) -> Self {
        Self {
            echoes,
            align_to_30fps,
            last: Report::neutral(),
            echoes_left: 0,
            frame_tick: 0,
        }
    }

    /// Returns the report to repeat this tick, or `None` when a fresh
    /// synthesizer decision is due.
    ///
    /// The alignment echo does not consume a repeat: it stretches the current
    /// command by one report so the cadence lands back on a frame boundary.
    pub fn take_echo(&mut self) -> Option<Report> {
        if self.align_to_30fps {
            self.frame_tick += 1;
            if self.frame_tick == FRAME_ALIGN_INJECT_AT {
                return Some(self.last);
            }
            if self.frame_tick == FRAME_ALIGN_PERIOD {
                self.frame_tick = 0;
            }
        }

        if self.echoes_left > 0 {
            self.echoes_left -= 1;
            return Some(self.last);
        }

        None
    }

    /// Stores a fresh report and arms its repeats.
    pub fn arm(&mut self, fresh: Report) -> Report {
        self.last = fresh;
        self.echoes_left = self.echoes;
        fresh
    }
}
