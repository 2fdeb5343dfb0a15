// Boustrophedon raster: even rows scan left-to-right, odd rows right-to-left,
// one pixel per move tick, a vertical step at each row end. The arrival tick
// of every move visits a pixel; the ink button is decided on that same tick.

/// Pixels covered by one analog blank-skip deflection.
const SKIP_SPAN: u16 = 4;

impl<'a, RST: ResetLine> Printer<'a, RST> {
    fn raster_tick(&mut self) -> Result<Report, RST::Error> {
        if self.reset.is_asserted()? {
            self.tick = 0;
            self.phase = Phase::SyncPosition;
            debug!(
                "raster: reprint requested at ({}, {})",
                self.cursor.x, self.cursor.y
            );
            return Ok(Report::neutral());
        }

        let mut report = Report::neutral();
        match self.phase {
            Phase::MoveX => self.move_x_tick(&mut report),
            Phase::MoveY => self.move_y_tick(&mut report),
            Phase::StopX | Phase::StopY => self.stop_tick(&mut report),
            Phase::SyncController | Phase::SyncPosition | Phase::Done => {}
        }

        // Ink the pixel under the (possibly moved) cursor in the same report,
        // never a later one.
        if self.canvas.is_ink(self.cursor.x, self.cursor.y) {
            report.buttons |= Buttons::A;
        }

        Ok(report)
    }

    /// One horizontal step, or an analog skip over a blank run.
    fn move_x_tick(&mut self, report: &mut Report) {
        if self.config.skip_blanks && self.move_run == 0 && self.try_skip_blanks(report) {
            return;
        }

        if self.scan_right() {
            self.cursor.x += 1;
            report.hat = Hat::Right;
        } else {
            self.cursor.x -= 1;
            report.hat = Hat::Left;
        }
        self.move_run += 1;

        self.phase = if self.at_scan_end() {
            self.row_end_phase()
        } else if self.move_run >= MOVE_RUN_LIMIT {
            Phase::StopX
        } else {
            Phase::MoveX
        };
    }

    /// The vertical step onto the next row; its arrival visits that row's
    /// first column.
    fn move_y_tick(&mut self, report: &mut Report) {
        self.cursor.y += 1;
        report.hat = Hat::Down;
        self.move_run = 0;

        self.phase = if self.at_scan_end() {
            // Single-column canvas: the next step is vertical again and needs
            // a stop in between.
            if self.on_last_row() {
                self.done()
            } else {
                Phase::StopY
            }
        } else {
            Phase::MoveX
        };
    }

    /// Centered tick resetting the host's cursor acceleration.
    fn stop_tick(&mut self, report: &mut Report) {
        report.hat = Hat::Center;
        let stopped = self.phase;
        self.move_run = 0;

        self.phase = if stopped == Phase::StopY {
            Phase::MoveY
        } else if self.at_scan_end() {
            self.row_end_phase()
        } else {
            Phase::MoveX
        };
    }

    /// Covers `SKIP_SPAN` blank pixels with one stick deflection when the
    /// whole run ahead is blank and the row end is far enough away. A stop
    /// always follows so the host never sees back-to-back analog moves.
    fn try_skip_blanks(&mut self, report: &mut Report) -> bool {
        let (x, y) = (self.cursor.x, self.cursor.y);
        let headroom = if self.scan_right() {
            self.canvas.width() - 1 - x
        } else {
            x
        };
        if headroom <= SKIP_SPAN {
            return false;
        }

        for step in 0..=SKIP_SPAN {
            let probe = if self.scan_right() { x + step } else { x - step };
            if self.canvas.is_ink(probe, y) {
                return false;
            }
        }

        report.hat = Hat::Center;
        report.left_x = if self.scan_right() { STICK_MAX } else { STICK_MIN };
        // Both axes must leave center for the host to register a move; the
        // vertical nudge alternates so it never accumulates into a drift.
        report.left_y = STICK_CENTER.wrapping_add_signed(self.skip_balance);
        self.skip_balance = -self.skip_balance;

        self.cursor.x = if self.scan_right() {
            x + SKIP_SPAN
        } else {
            x - SKIP_SPAN
        };
        self.move_run = 0;
        self.phase = Phase::StopX;
        true
    }

    fn scan_right(&self) -> bool {
        self.cursor.y % 2 == 0
    }

    fn at_scan_end(&self) -> bool {
        if self.scan_right() {
            self.cursor.x == self.canvas.width() - 1
        } else {
            self.cursor.x == 0
        }
    }

    fn on_last_row(&self) -> bool {
        self.cursor.y == self.canvas.height() - 1
    }

    fn row_end_phase(&mut self) -> Phase {
        if self.on_last_row() {
            self.done()
        } else {
            Phase::MoveY
        }
    }

    fn done(&mut self) -> Phase {
        debug!("raster: image complete");
        Phase::Done
    }
}
