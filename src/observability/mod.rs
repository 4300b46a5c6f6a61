//! Observability for `sitegen`.
//!
//! Ambient diagnostics go to stderr through `tracing`; the status lines the
//! generator prints for humans stay on stdout and are not log events.

pub mod logging;

pub use logging::{LogFormat, init_logging, verbosity_to_directive};
