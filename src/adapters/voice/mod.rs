//! Voice adapters

mod unsupported;

pub use unsupported::UnsupportedVoice;
