use super::ResetLine;

/// Reset line that is never asserted, used during bring-up and on boards
/// without a reprint button.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockReset;

impl MockReset {
    pub const fn new() -> Self {
        Self
    }
}

impl ResetLine for MockReset {
    type Error = core::convert::Infallible;

    fn is_asserted(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}
