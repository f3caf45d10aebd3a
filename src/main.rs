use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

use mepla_json::{
    mepla::{convert_file, resolve_files, MeplaFileKind},
    sink::DocumentSink,
};

struct Args {
    mepla_path: String,
    file: Option<MeplaFileKind>,
    output_path: Option<String>,
    dry_run: bool,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt(
        "f",
        "file",
        "file to convert; both .dat and .rep when omitted",
        "dat|rep",
    );
    opts.optopt("o", "output", "output directory (default: PATH)", "DIR");
    opts.optflag("n", "dry-run", "parse without writing");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: mepla-json PATH [options]"));
        return Ok(None);
    }

    let mepla_path = matches
        .free
        .first()
        .context("path to mepla calculations folder is required")?
        .clone();

    let file = match matches.opt_str("f") {
        Some(name) => Some(
            MeplaFileKind::of(&name)
                .with_context(|| format!("Invalid --file {:?}, expected dat or rep", name))?,
        ),
        None => None,
    };

    Ok(Some(Args {
        mepla_path,
        file,
        output_path: matches.opt_str("o"),
        dry_run: matches.opt_present("n"),
    }))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = get_args()? else {
        return Ok(());
    };

    let mepla_path = PathBuf::from(&args.mepla_path);

    // nothing is created on disk until the input files are known to exist
    let files = resolve_files(&mepla_path, args.file)?;

    let out = if args.dry_run {
        DocumentSink::Null
    } else {
        let output_path = args
            .output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| mepla_path.clone());
        DocumentSink::init_directory(&output_path)?
    };

    if files.is_empty() {
        tracing::warn!(path = %mepla_path.display(), "no .dat or .rep file found");
    }

    println!("Processing {} file(s)...", files.len());

    let pb = create_progress_bar(files.len() as u64);
    for (kind, path) in files.iter().progress_with(pb) {
        (|| -> Result<()> {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .context("Invalid file name")?;

            let document = convert_file(*kind, path)?;
            out.save(file_name, &document)?;

            Ok(())
        })()
        .with_context(|| format!("Failed to process {}", path.display()))?;
    }

    println!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
