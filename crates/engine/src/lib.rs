//! Reminder engine: word store access, random sampling and message
//! composition.

pub mod composer;
pub mod reminder;
pub mod sampler;
pub mod store;
