//! `lloyd` provides the building blocks for partitioning numeric records into a fixed number of
//! clusters with Lloyd's k-means algorithm.
//!
//! ## The big picture
//!
//! The workspace is split the same way most clustering toolkits are:
//! * this crate holds the shared vocabulary: [`Record`], the deduplicating [`Records`] working set,
//!   [`Cluster`], the [distance metrics](distance) and the [`ParamGuard`](param_guard::ParamGuard)
//!   and [`Fit`](traits::Fit) traits;
//! * `lloyd-clustering` implements the k-means engine on top of them;
//! * `lloyd-datasets` reads delimited text into [`Records`] and writes clusters back to disk;
//! * `lloyd-cli` glues the three together.
//!
//! ## Records and value equality
//!
//! Records compare by value, bit for bit. A working set therefore never contains two records
//! with the same values: when two input lines parse to the same vector, only the first one is
//! kept. Every record remembers the line it came from, so clusters can be written back in input
//! order.
//!

pub mod dataset;
pub mod distance;
pub mod error;
pub mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Cluster, Float, Record, Records};
pub use error::Error;
pub use param_guard::ParamGuard;
