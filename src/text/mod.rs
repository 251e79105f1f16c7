//! Text normalization helpers
//!
//! Pure string transforms applied to runner payloads before display.

pub mod method_name;
pub mod sanitize;

pub use method_name::{decode_method_name, snake_case};
pub use sanitize::{strip_ansi, ANSI_CSI_PATTERN};
