//! Pure encoders/decoders for the Night Light registry blobs.
//!
//! Nothing in here touches the registry; every function takes the raw bytes
//! and returns either a decoded value or a freshly built buffer.

pub mod generation;
pub mod settings_blob;
pub mod state_blob;

pub use generation::{GENERATION_RANGE, bump};
pub use settings_blob::{
    MAX_KELVIN, MIN_KELVIN, decode_kelvin, decode_percentage, encode_percentage,
    kelvin_to_bytes, kelvin_to_percentage, percentage_to_kelvin,
};
pub use state_blob::{Validation, decode_enabled, toggle, toggle_with, validate};
