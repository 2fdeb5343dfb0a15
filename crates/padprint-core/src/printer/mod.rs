//! Input-synthesizer state machine driving the canvas scan.

use log::debug;

use pokken_pad::{Buttons, Hat, Report, STICK_CENTER, STICK_MAX, STICK_MIN};

use crate::{canvas::CanvasBitmap, config::PrinterConfig, input::ResetLine, pacer::Pacer};

/// Consecutive same-direction moves allowed before a centered tick is
/// inserted; the host accelerates its cursor on the third one.
const MOVE_RUN_LIMIT: u8 = 2;

/// Stage of the overall print.
///
/// The raster stage is decomposed into move/stop states so the forced pause
/// between same-direction moves is explicit rather than an embedded counter.
/// A single combined raster state walking two rows at a time would rasterize
/// the same image; the decomposed form is easier to reason about.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    SyncController,
    SyncPosition,
    MoveX,
    StopX,
    MoveY,
    StopY,
    Done,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Cursor {
    x: u16,
    y: u16,
}

/// The whole printer state: one owned record, one tick entry point.
pub struct Printer<'a, RST: ResetLine> {
    canvas: CanvasBitmap<'a>,
    reset: RST,
    config: PrinterConfig,
    pacer: Pacer,
    phase: Phase,
    tick: u32,
    cursor: Cursor,
    move_run: u8,
    skip_balance: i8,
}

impl<'a, RST: ResetLine> Printer<'a, RST> {
    pub fn new(canvas: CanvasBitmap<'a>, reset: RST, config: PrinterConfig) -> Self {
        Self {
            canvas,
            reset,
            config,
            pacer: Pacer::new(config.echoes, config.sync_to_30fps),
            phase: Phase::SyncController,
            tick: 0,
            cursor: Cursor { x: 0, y: 0 },
            move_run: 0,
            skip_balance: 1,
        }
    }

    /// One host poll tick: the report to put on the wire.
    ///
    /// Either an echo of the previous report or a fresh decision; the only
    /// fallible step is sampling the reset line.
    pub fn poll(&mut self) -> Result<Report, RST::Error> {
        if let Some(echo) = self.pacer.take_echo() {
            return Ok(echo);
        }

        let fresh = self.decide()?;
        Ok(self.pacer.arm(fresh))
    }

    /// Whether the scan has visited the last pixel of the last row.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    fn decide(&mut self) -> Result<Report, RST::Error> {
        match self.phase {
            Phase::SyncController => Ok(self.sync_controller_tick()),
            Phase::SyncPosition => Ok(self.sync_position_tick()),
            Phase::MoveX | Phase::StopX | Phase::MoveY | Phase::StopY => self.raster_tick(),
            Phase::Done => Ok(Report::neutral()),
        }
    }
}

include!("sync.rs");
include!("raster.rs");
