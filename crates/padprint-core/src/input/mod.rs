//! Reset-line abstraction.

pub mod mock;

/// Level-sampled reprint request, read once per raster tick.
///
/// The last sampled level wins; there is no debouncing or queuing. While the
/// line reads asserted the printer abandons the scan and re-homes the cursor.
pub trait ResetLine {
    type Error;

    fn is_asserted(&mut self) -> Result<bool, Self::Error>;
}
