pub use crate::error::{Error, StResult};
pub use crate::types::NodeId;

pub use tracing::{debug, debug_span, error, info, trace, warn};

// vim: ts=4
