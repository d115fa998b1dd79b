// ============================================================================
// Domain Models Module
// Operator catalogue, requests and formatting configuration
// ============================================================================

pub mod config;
pub mod operation;

pub use config::{MagnitudeTest, NormalizerConfig, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
pub use operation::{Arity, Operation, OperationRequest};
