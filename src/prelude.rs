//! # guardpost Prelude
//!
//! This module provides a convenient prelude for the most commonly used
//! types and modules of the guardpost library. Import it to get quick
//! access to the whole check catalogue.
//!
//! # Example
//!
//! ```rust
//! use guardpost::prelude::*;
//!
//! let port = numeric::in_between(8080u16, 1024, 49151, "port")?;
//! let name = string::not_null_or_white_space(Some("edge"), "name")?;
//! # Ok::<(), Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all guardpost checks
pub use crate::Error;

/// The result type used throughout guardpost
pub use crate::Result;

// ================================================================================================
// Check Catalogue
// ================================================================================================

/// The per-type check modules
pub use crate::require::{self, float, fs, guid, io, numeric, sequence, stream, string, uri, value};

/// Conversion and predicate checks
pub use crate::ensure;

// ================================================================================================
// Capability Traits
// ================================================================================================

/// IEEE-754 classification consumed by the floating-point checks
pub use crate::require::float::FloatingPoint;

/// Power-of-two classification consumed by the binary integer checks
pub use crate::require::numeric::Pow2;

/// Byte-stream capability reporting consumed by the I/O checks
pub use crate::require::io::{Capabilities, StreamInfo};
