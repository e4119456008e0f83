use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use xbrl_labels::{
    AuditReport, Header, LabelTranslator, audit, default_translator, header, label_items,
    union_line_items,
};

#[derive(Parser, Debug)]
#[command(
    name = "xbrl-labels",
    version,
    about = "Japanese display labels for XBRL line-item identifiers"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate identifiers ("-" reads identifiers from stdin, one per line)
    Translate {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Translate the line items of CSV header rows (sorted union for several files)
    Header {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print JSON instead of tab-separated lines
        #[arg(long = "json")]
        json: bool,
    },
    /// Check label coverage of every company/statement CSV under a root
    Audit {
        /// Extraction root holding {COMPANY}/{PL,BS,CF}.csv
        #[arg(short = 'r', long = "root", default_value = "XBRL_output")]
        root: PathBuf,

        /// Print the report as JSON
        #[arg(long = "json")]
        json: bool,

        /// Exit with status 1 when a label is blank or still English
        #[arg(long = "strict")]
        strict: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    xbrl_labels::logging::init(cli.verbose);
    let translator = default_translator();

    match cli.command {
        Command::Translate { ids } => run_translate(translator, &ids),
        Command::Header { files, json } => run_header(translator, &files, json),
        Command::Audit { root, json, strict } => run_audit(translator, root, json, strict),
    }
}

fn run_translate(translator: &LabelTranslator, ids: &[String]) -> Result<ExitCode> {
    let mut out = io::stdout().lock();
    for id in ids {
        if id == "-" {
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read stdin")?;
                let line = line.trim();
                if !line.is_empty() {
                    writeln!(out, "{line}\t{}", translator.translate(line))?;
                }
            }
        } else {
            writeln!(out, "{id}\t{}", translator.translate(id))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_header(translator: &LabelTranslator, files: &[PathBuf], json: bool) -> Result<ExitCode> {
    let headers = files
        .iter()
        .map(|path| Header::read(path).with_context(|| format!("reading {}", path.display())))
        .collect::<Result<Vec<_>>>()?;

    let keys: Vec<String> = match headers.as_slice() {
        [single] => single.line_items().map(str::to_owned).collect(),
        many => union_line_items(many),
    };
    let items = label_items(translator, &keys);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &items)?;
        writeln!(out)?;
    } else {
        for item in &items {
            writeln!(out, "{}\t{}", item.key, item.label)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_audit(
    translator: &LabelTranslator,
    root: PathBuf,
    json: bool,
    strict: bool,
) -> Result<ExitCode> {
    let scan = header::scan_root(&root)
        .with_context(|| format!("scanning {}", root.display()))?;
    let keys = union_line_items(scan.headers());
    let report = audit(translator, &keys);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{} line items across {} sheets ({} missing files)",
            report.total,
            scan.sheets.len(),
            scan.missing.len()
        )?;
        let lexicon = translator.lexicon();
        writeln!(
            out,
            "lexicon: {} curated labels, {} tokens, {} rules",
            lexicon.label_count(),
            lexicon.token_count(),
            translator.rules().len()
        )?;
        print_summary(&mut out, &report)?;
    }

    if strict && !report.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_summary(out: &mut impl Write, report: &AuditReport) -> io::Result<()> {
    print_section(out, "no curated label", &report.missing)?;
    print_section(out, "unknown tokens", &report.missing_tokens)?;
    print_section(out, "blank labels", &report.blank)?;
    print_section(out, "English labels", &report.english)?;
    writeln!(out, "shared labels: {}", report.duplicate_labels.len())?;
    for (label, keys) in &report.duplicate_labels {
        writeln!(out, "  {label}: {}", keys.join(", "))?;
    }
    Ok(())
}

fn print_section(out: &mut impl Write, title: &str, items: &[String]) -> io::Result<()> {
    writeln!(out, "{title}: {}", items.len())?;
    for item in items {
        writeln!(out, "  {item}")?;
    }
    Ok(())
}
