//! Lloyd prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::Error;

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;

#[doc(no_inline)]
pub use crate::dataset::{Cluster, Float, Record, Records};

#[doc(no_inline)]
pub use crate::distance::{Distance, L2Dist, MinkowskiDist};
