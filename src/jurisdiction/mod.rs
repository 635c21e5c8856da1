//! Place-of-supply resolution and state-name normalization

pub mod resolver;
pub mod states;

pub use resolver::*;
pub use states::{lookup_state, normalize_state_name, state_by_gst_code, IndianState, STATES};
