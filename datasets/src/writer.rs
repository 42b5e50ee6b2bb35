//! Persist clusters as one text file per cluster

use crate::error::{DatasetError, Result};
use lloyd::{Cluster, Float};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the `i`-th cluster to `<dir>/<prefix><i + 1>.<extension>`.
///
/// Inside a file, members are listed in input order, one per line, values separated by a single
/// space. The last line carries no trailing newline. Empty clusters produce empty files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterWriter {
    prefix: String,
    extension: String,
}

impl Default for ClusterWriter {
    fn default() -> Self {
        ClusterWriter::new("class", "data")
    }
}

impl ClusterWriter {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        ClusterWriter {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File name for the cluster at 0-based position `index`
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{}.{}", self.prefix, index + 1, self.extension)
    }

    /// Write every cluster into `dir`, returning the created paths in cluster order
    pub fn write_clusters<F: Float>(
        &self,
        dir: impl AsRef<Path>,
        clusters: &[Cluster<F>],
    ) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        clusters
            .iter()
            .enumerate()
            .map(|(index, cluster)| {
                let path = dir.join(self.file_name(index));
                File::create(&path)
                    .map(BufWriter::new)
                    .and_then(|mut file| {
                        write_cluster(&mut file, cluster)?;
                        file.flush()
                    })
                    .map_err(|source| DatasetError::Write {
                        path: path.clone(),
                        source,
                    })?;
                info!(path = %path.display(), members = cluster.len(), "wrote cluster");
                Ok(path)
            })
            .collect()
    }
}

/// Displays a cluster in the text layout read back by [`TextLoader`](crate::text::TextLoader)
pub struct ClusterText<'a, F>(pub &'a Cluster<F>);

impl<F: Float> fmt::Display for ClusterText<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.0.sorted_by_original_index().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in record.values().iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:?}", value)?;
            }
        }
        Ok(())
    }
}

/// Stream a cluster, see [`ClusterText`]
pub fn write_cluster<F: Float, W: Write>(writer: &mut W, cluster: &Cluster<F>) -> io::Result<()> {
    write!(writer, "{}", ClusterText(cluster))
}

/// Render a cluster to a string, see [`ClusterText`]
pub fn format_cluster<F: Float>(cluster: &Cluster<F>) -> String {
    ClusterText(cluster).to_string()
}
