//! `lloyd-datasets` moves records in and out of the `lloyd` ecosystem.
//!
//! ## The Big Picture
//!
//! The clustering crates work on [`lloyd::Records`]. This crate produces them from delimited text
//! files or from synthetic generators, and persists the resulting clusters again.
//!
//! ## Current State
//!
//! * [`text`]: parse a line-oriented text file with a regular-expression separator. Bad lines are
//!   skipped and reported instead of aborting the load.
//! * [`writer`]: write each cluster into its own file, members in input order.
//! * [`generate`]: Gaussian blobs around given centroids for tests and benchmarks.
//!
//! ## Using a text dataset
//!
//! ```no_run
//! use lloyd_datasets::text::TextLoader;
//!
//! let report = TextLoader::new(" ")?.load_file::<f64>("points.data")?;
//! for rejected in &report.rejected {
//!     eprintln!("line {}: {}", rejected.line_number, rejected.reason);
//! }
//! println!("{} distinct records", report.records.len());
//! # Ok::<(), lloyd_datasets::DatasetError>(())
//! ```

pub mod error;
pub mod generate;
pub mod text;
pub mod writer;

pub use error::{DatasetError, LineError};
pub use text::{LoadReport, RejectedLine, TextLoader};
pub use writer::{ClusterText, ClusterWriter};
