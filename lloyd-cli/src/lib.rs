//! Load a delimited text file, cluster it with k-means and write one file per cluster.

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use lloyd::Cluster;
use lloyd_clustering::{KMeans, KMeansError, TracingObserver};
use lloyd_datasets::{ClusterWriter, TextLoader};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::fs;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug, Clone)]
#[command(name = "lloyd", version, about = "Cluster numeric records with Lloyd's k-means")]
pub struct Args {
    /// File with one record per line; asked for on stdin when omitted
    pub input: Option<PathBuf>,

    /// Number of clusters to look for
    #[arg(short = 'k', long, default_value_t = 6)]
    pub clusters: usize,

    /// Regular expression separating the fields of a line
    #[arg(short, long, default_value = " ")]
    pub separator: String,

    /// File name prefix of the written clusters
    #[arg(long, default_value = "class")]
    pub prefix: String,

    /// File extension of the written clusters
    #[arg(long, default_value = "data")]
    pub extension: String,

    /// Directory receiving the cluster files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Give up when the centroids still move after this many iterations
    #[arg(long, default_value_t = 300)]
    pub max_iterations: u64,

    /// Seed for the random initialisation, drawn at random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Run the whole pipeline, returning the paths of the written cluster files
pub fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let raw = match &args.input {
        Some(path) => read_input(path)?,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_for_input(&mut stdin.lock(), &mut stdout.lock())?
        }
    };
    cluster_text(args, &raw)
}

/// Cluster already loaded text and write the clusters according to `args`
pub fn cluster_text(args: &Args, raw: &str) -> Result<Vec<PathBuf>> {
    let loader = TextLoader::new(&args.separator)?;
    let report = loader.load_str::<f64>(raw);
    info!(
        records = report.records.len(),
        rejected = report.rejected.len(),
        duplicates = report.duplicates.len(),
        "loaded records"
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding centroid initialisation");

    let fitted = KMeans::params_with_rng(args.clusters, Xoshiro256Plus::seed_from_u64(seed))
        .max_n_iterations(args.max_iterations)
        .fit_observed(&report.records, &mut TracingObserver);
    let model = match fitted {
        Ok(model) => model,
        Err(KMeansError::NotConverged(model)) => {
            warn!(
                iterations = model.n_iterations(),
                "writing the clusters of the last iteration"
            );
            model
        }
        Err(err) => return Err(err).context("clustering failed"),
    };
    info!(
        iterations = model.n_iterations(),
        inertia = model.inertia(),
        "clustering finished"
    );

    write_clusters(args, model.clusters())
}

fn write_clusters(args: &Args, clusters: &[Cluster<f64>]) -> Result<Vec<PathBuf>> {
    let writer = ClusterWriter::new(args.prefix.as_str(), args.extension.as_str());
    let paths = writer.write_clusters(&args.output_dir, clusters)?;
    Ok(paths)
}

/// Read the input file named on the command line. Empty files are refused.
pub fn read_input(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    if raw.is_empty() {
        bail!("{} is empty, please read from a non-empty file", path.display());
    }
    Ok(raw)
}

/// Ask for a file name until one names a readable, non-empty file.
///
/// Fails only when `input` is exhausted.
pub fn prompt_for_input<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    loop {
        write!(output, "Enter the name of the file containing the records: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no input file given");
        }
        let name = line.trim();
        if name.is_empty() {
            continue;
        }

        match fs::read_to_string(name) {
            Ok(raw) if raw.is_empty() => {
                writeln!(output, "That file is empty. Please read from a non-empty file.")?;
            }
            Ok(raw) => return Ok(raw),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                writeln!(
                    output,
                    "Could not find {}. Use a path relative to the working directory or an absolute path.",
                    name
                )?;
            }
            Err(err) => {
                writeln!(output, "Failed to read {}: {}", name, err)?;
            }
        }
    }
}
