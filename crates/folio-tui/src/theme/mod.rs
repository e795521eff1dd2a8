//! Theme: palette constants and semantic style builders

pub mod palette;
pub mod styles;
