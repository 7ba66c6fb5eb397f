use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};
use walkdir::WalkDir;

use resume_parser::config::Settings;
use resume_parser::report::{self, Report};
use resume_parser::source::{self, Document, Limits};
use resume_parser::{process, ParsedResume};

const TRANSCRIPT_WIDTH: usize = 80;

#[derive(Parser)]
#[command(name = "resume_parser", about = "Heuristic resume parser (PDF or plain text)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one resume and print the JSON report
    Parse {
        /// Path to a .pdf/.txt file, or "-" to read pasted text from stdin
        path: PathBuf,
        /// Extra hyperlink targets to merge (repeatable)
        #[arg(short, long = "link")]
        links: Vec<String>,
        /// Indented JSON regardless of settings
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,
        /// Single-line JSON regardless of settings
        #[arg(long)]
        compact: bool,
    },
    /// Print the annotated line transcript
    Lines {
        /// Path to a .pdf/.txt file, or "-" for stdin
        path: PathBuf,
    },
    /// Parse every supported resume in a directory
    Batch {
        dir: PathBuf,
        /// Write <stem>.json reports here instead of printing a summary
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Max files to parse
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}

fn main() -> Result<()> {
    let settings = Settings::load().context("Failed to load settings")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_level.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            path,
            links,
            pretty,
            compact,
        } => {
            let mut doc = read_document(&path, &settings.limits())?;
            doc.links.extend(links);
            let resume = process(&doc.text, &doc.links);
            info!(name = %resume.name, lines = resume.annotated_lines.len(), "parsed");
            let pretty = pretty || (settings.pretty && !compact);
            let json = Report::new(&resume).to_json(pretty)?;
            println!("{json}");
            Ok(())
        }
        Commands::Lines { path } => {
            let doc = read_document(&path, &settings.limits())?;
            let resume = process(&doc.text, &doc.links);
            print!("{}", report::transcript_table(&resume.annotated_lines, TRANSCRIPT_WIDTH));
            println!("\n{} lines | {} sections", resume.annotated_lines.len(), resume.sections.len());
            Ok(())
        }
        Commands::Batch {
            dir,
            out,
            limit,
            recursive,
        } => {
            let files = collect_files(&dir, &settings.limits(), recursive, limit);
            if files.is_empty() {
                println!("No .pdf/.txt resumes found in {}", dir.display());
                return Ok(());
            }
            if let Some(out) = &out {
                std::fs::create_dir_all(out)
                    .with_context(|| format!("Failed to create output dir {}", out.display()))?;
            }
            println!("Parsing {} resumes...", files.len());
            let counts = parse_batch(&files, &settings, out.as_deref())?;
            counts.print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn read_document(path: &Path, limits: &Limits) -> Result<Document> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read resume text from stdin")?;
        return Ok(Document::from_text(text));
    }
    source::load(path, limits).with_context(|| format!("Failed to load {}", path.display()))
}

fn collect_files(dir: &Path, limits: &Limits, recursive: bool, limit: Option<usize>) -> Vec<PathBuf> {
    let depth = if recursive { usize::MAX } else { 1 };
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(depth)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && limits.kind_of(e.path()).is_some())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    if let Some(n) = limit {
        files.truncate(n);
    }
    files
}

struct BatchCounts {
    ok: usize,
    errors: usize,
    score_sum: f64,
}

impl BatchCounts {
    fn print(&self) {
        let avg = if self.ok == 0 {
            0.0
        } else {
            self.score_sum / self.ok as f64
        };
        println!(
            "Parsed {} resumes ({} errors), average score {:.2}.",
            self.ok, self.errors, avg
        );
    }
}

fn parse_batch(files: &[PathBuf], settings: &Settings, out: Option<&Path>) -> Result<BatchCounts> {
    let limits = settings.limits();
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let mut counts = BatchCounts {
        ok: 0,
        errors: 0,
        score_sum: 0.0,
    };
    let mut taken = HashSet::new();

    for chunk in files.chunks(settings.batch_chunk.max(1)) {
        let results: Vec<(&PathBuf, Result<ParsedResume>)> = chunk
            .par_iter()
            .map(|path| {
                let parsed = source::load(path, &limits)
                    .map(|doc| process(&doc.text, &doc.links))
                    .map_err(anyhow::Error::from);
                (path, parsed)
            })
            .collect();

        for (path, parsed) in results {
            let resume = match parsed {
                Ok(resume) => resume,
                Err(e) => {
                    counts.errors += 1;
                    warn!("{}: {:#}", path.display(), e);
                    continue;
                }
            };
            let rep = Report::new(&resume);
            match out {
                Some(dir) => {
                    let name = report_file_name(path, &mut taken);
                    if let Err(e) = write_report(&dir.join(&name), &rep, settings.pretty) {
                        counts.errors += 1;
                        warn!("{}: {:#}", path.display(), e);
                        continue;
                    }
                }
                None => pb.println(format!(
                    "{:<40} {:<24} {:>6.2}",
                    report::truncate(&path.display().to_string(), 40),
                    report::truncate(rep.name, 24),
                    rep.score
                )),
            }
            counts.ok += 1;
            counts.score_sum += rep.score;
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();
    Ok(counts)
}

/// `<stem>.json`, or `<stem>-<n>.json` when an earlier file in this run
/// already took that name.
fn report_file_name(source_path: &Path, taken: &mut HashSet<String>) -> String {
    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    let mut name = format!("{stem}.json");
    let mut n = 1;
    while !taken.insert(name.clone()) {
        name = format!("{stem}-{n}.json");
        n += 1;
    }
    if n > 1 {
        warn!("{}: report name taken, writing {}", source_path.display(), name);
    }
    name
}

fn write_report(target: &Path, rep: &Report<'_>, pretty: bool) -> Result<()> {
    let json = rep.to_json(pretty)?;
    std::fs::write(target, json).with_context(|| format!("Failed to write {}", target.display()))
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

// ── Tests ──
