// Copyright 2025 The guardpost developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # guardpost
//!
//! Fail-fast guard clauses for validating function arguments. Each check
//! either hands the validated value back unchanged or reports a typed
//! [`Error`] naming the parameter that failed and why, so a routine can
//! verify its whole contract in a handful of lines at the top:
//!
//! ```rust
//! use guardpost::{require, Result};
//!
//! fn connect(endpoint: Option<&str>, port: u16, pool: usize) -> Result<String> {
//!     let endpoint = require::string::not_null_or_white_space(endpoint, "endpoint")?;
//!     let port = require::numeric::in_between(port, 1024, 49151, "port")?;
//!     let pool = require::numeric::not_pow2(pool, "pool")?;
//!
//!     Ok(format!("{endpoint}:{port} x{pool}"))
//! }
//!
//! assert!(connect(Some("db.internal"), 5432, 8).is_ok());
//! assert!(connect(Some("  "), 5432, 8).is_err());
//! ```
//!
//! ## Features
//!
//! - **Typed failures** - absence, content violations, range violations,
//!   missing files and cancellation are distinct [`Error`] variants
//! - **Identity pass-through** - successful checks return the input, so
//!   guards compose inside assignments and with `?`
//! - **One generic comparison catalogue** - every ordered type shares the
//!   same range and ordering checks, from `u8` to calendar dates
//! - **Cheap sequence probes** - sized containers are classified without
//!   enumeration; lazy sequences cost a single element pull that is handed
//!   back to the caller
//! - **Async aware** - asynchronously produced sequences are validated at
//!   their first element, with cooperative cancellation
//! - **Label capture** - the [`guard!`] and [`ensure_that!`] macros derive
//!   diagnostic labels from call-site source text
//!
//! ## Quick Start
//!
//! Add `guardpost` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! guardpost = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use guardpost::prelude::*;
//!
//! let replicas = value::not_null_or_default(Some(3u32), "replicas")?;
//! assert_eq!(replicas, 3);
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Architecture
//!
//! `guardpost` is a flat catalogue of stateless functions grouped by the
//! type they guard:
//!
//! - [`require`] - the per-type check modules (strings, numerics, floats,
//!   sequences, streams, I/O handles, paths, URIs, GUIDs, optional values)
//! - [`ensure`] - type narrowing and caller-supplied predicates
//! - [`prelude`] - convenient re-exports of the whole surface
//! - [`Error`] and [`Result`] - the failure taxonomy
//!
//! No check depends on another beyond two tiny shared helpers (whitespace
//! scanning and the sequence count probe); every call is independent and
//! safe to issue from any number of threads.
//!
//! ## Error Handling
//!
//! All checks return [`Result<T, Error>`](Result). Failure is always a
//! programming-contract violation to fix at the call site, never a runtime
//! condition to route around, so errors carry diagnostics rather than
//! recovery hooks:
//!
//! ```rust
//! use guardpost::{require, Error};
//!
//! match require::numeric::greater_than(0u32, 10, "retries") {
//!     Err(Error::OutOfRange { parameter, value }) => {
//!         assert_eq!(parameter, "retries");
//!         assert_eq!(value, "0");
//!     }
//!     other => panic!("expected an out-of-range error, got {other:?}"),
//! }
//! ```

mod macros;

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and modules.
///
/// # Example
///
/// ```rust
/// use guardpost::prelude::*;
///
/// let name = string::not_null_or_empty(Some("edge"), "name")?;
/// # Ok::<(), Error>(())
/// ```
pub mod prelude;

/// The per-type check catalogue.
///
/// One module per guarded type: [`require::value`] for optional values,
/// [`require::string`], [`require::numeric`], [`require::float`],
/// [`require::sequence`] and [`require::stream`] for synchronous and
/// asynchronous sequences, [`require::io`] for handle capabilities,
/// [`require::fs`] for existence, [`require::uri`] and [`require::guid`].
///
/// # Examples
///
/// ```rust
/// use guardpost::require;
///
/// let hosts = require::sequence::not_null_or_empty(Some(vec!["a"]), "hosts")?;
/// assert_eq!(hosts.count(), 1);
/// # Ok::<(), guardpost::Error>(())
/// ```
pub mod require;

/// Type narrowing and caller-supplied predicate checks.
///
/// # Examples
///
/// ```rust
/// use guardpost::{ensure, ensure_that};
///
/// let limit = ensure_that!(100u32, |n| *n <= 1000)?;
/// assert_eq!(limit, 100);
/// # Ok::<(), guardpost::Error>(())
/// ```
pub mod ensure;

/// `guardpost` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type
/// is always [`Error`]. Used consistently throughout the crate for all
/// checks.
///
/// # Examples
///
/// ```rust
/// use guardpost::{require, Result};
///
/// fn label(value: Option<&str>) -> Result<&str> {
///     require::string::not_null_or_empty(value, "value")
/// }
/// # assert!(label(None).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `guardpost` Error type
///
/// The main error type for all checks in this crate. Selects its variant by
/// failure cause: [`Error::NullArgument`] for absence,
/// [`Error::InvalidArgument`] for content violations, [`Error::OutOfRange`]
/// for bound violations, [`Error::NotFound`] for missing file-system
/// entries and [`Error::Canceled`] for aborted asynchronous probes.
pub use error::Error;
