//! Printer timing and pacing configuration.

/// Timing knobs chosen at startup.
///
/// `echoes` is how many extra times each fresh report is resent before the
/// host is assumed to have acted on it. The default of 4 paces one command
/// per 40 ms at the 8 ms endpoint cadence; [`PrinterConfig::sync_30fps`]
/// trades one echo for an injected alignment report so the command stream
/// tracks the host's 30 fps screen updates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrinterConfig {
    /// Advertised endpoint polling interval in milliseconds.
    pub polling_ms: u8,
    /// Extra repeats of each fresh report.
    pub echoes: u8,
    /// Inject one additional echo every 13th report to align the cadence to
    /// the host's effective 30 fps update rate.
    pub sync_to_30fps: bool,
    /// Cover runs of blank pixels with a single analog deflection instead of
    /// per-pixel hat taps. Only sound when the tick timing is exact.
    pub skip_blanks: bool,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            polling_ms: 8,
            echoes: 4,
            sync_to_30fps: false,
            skip_blanks: false,
        }
    }
}

impl PrinterConfig {
    /// Preset matching the 30 fps-aligned cadence.
    pub const fn sync_30fps() -> Self {
        Self {
            polling_ms: 8,
            echoes: 3,
            sync_to_30fps: true,
            skip_blanks: false,
        }
    }

    pub const fn with_skip_blanks(mut self, skip_blanks: bool) -> Self {
        self.skip_blanks = skip_blanks;
        self
    }

    /// Converts a wall-clock duration into a count of fresh decisions.
    ///
    /// The host consumes reports no faster than every 8 ms regardless of the
    /// advertised interval, and each decision occupies `echoes + 1` reports.
    pub(crate) fn ms_to_ticks(&self, ms: u32) -> u32 {
        let slot_ms = (self.polling_ms.max(8) / 8 * 8) as u32;
        ms / (self.echoes as u32 + 1) / slot_ms
    }
}
