// Handshake and homing phases. Their schedules are indexed by the
// phase-local tick counter, converted from wall-clock marks.

const SYNC_CONTROLLER_MS: u32 = 2000;
const SYNC_POSITION_MS: u32 = 4000;

impl<'a, RST: ResetLine> Printer<'a, RST> {
    /// Pairing handshake: L+R twice, then A twice, otherwise neutral.
    fn sync_controller_tick(&mut self) -> Report {
        let mut report = Report::neutral();

        if self.tick > self.config.ms_to_ticks(SYNC_CONTROLLER_MS) {
            self.tick = 0;
            self.phase = Phase::SyncPosition;
            debug!("sync: controller handshake complete");
            return report;
        }

        if self.tick == self.config.ms_to_ticks(500) || self.tick == self.config.ms_to_ticks(1000)
        {
            report.buttons |= Buttons::L | Buttons::R;
        } else if self.tick == self.config.ms_to_ticks(1500)
            || self.tick == self.config.ms_to_ticks(2000)
        {
            report.buttons |= Buttons::A;
        }

        self.tick += 1;
        report
    }

    /// Drives the cursor to the canvas origin and clears the canvas twice.
    ///
    /// The diagonal ride into the corner uses the analog stick, which is much
    /// faster than hat taps; overshoot is harmless because the host clamps at
    /// the canvas edge.
    fn sync_position_tick(&mut self) -> Report {
        let mut report = Report::neutral();

        if self.tick > self.config.ms_to_ticks(SYNC_POSITION_MS) {
            self.tick = 0;
            self.cursor = Cursor { x: 0, y: 0 };
            self.move_run = 0;
            // Enter the raster through a stop so the origin pixel is visited.
            self.phase = Phase::StopX;
            debug!("sync: cursor homed, raster start");
            return report;
        }

        report.left_x = STICK_MIN;
        report.left_y = STICK_MIN;
        if self.tick == self.config.ms_to_ticks(1500) || self.tick == self.config.ms_to_ticks(3000)
        {
            report.buttons |= Buttons::LCLICK;
        }

        self.tick += 1;
        report
    }
}
