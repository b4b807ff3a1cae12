//! The check catalogue
//!
//! One module per guarded type. Every check takes the value first and the
//! diagnostic label last, and passes the validated value through on
//! success, so a guard can sit inside an assignment or at the top of a
//! routine with `?`.
//!
//! The checks are stateless and free of shared data; any number of callers
//! may run them concurrently. The only suspension points live in
//! [`stream`], which validates asynchronously produced sequences.

pub mod float;
pub mod fs;
pub mod guid;
pub mod io;
pub mod numeric;
pub mod sequence;
pub mod stream;
pub mod string;
pub mod uri;
pub mod value;
