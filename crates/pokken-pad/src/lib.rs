#![cfg_attr(not(test), no_std)]

//! HORI Pokken Tournament Pro Pad protocol primitives.
//!
//! The Nintendo Switch recognizes this pad as a Pro Controller and accepts
//! its 8-byte input reports without any negotiation, which makes the layout
//! a convenient wire format for synthetic controllers.

pub mod descriptor;
mod report;

pub use report::{
    Buttons, Hat, Report, OUT_REPORT_LEN, REPORT_LEN, STICK_CENTER, STICK_MAX, STICK_MIN,
};
