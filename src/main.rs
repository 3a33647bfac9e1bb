use pinyin_subst::pinyin::DecodeMode;
use pinyin_subst::records::{self, SyllableRecord};
use pinyin_subst::records_check;
use pinyin_subst::records_to_db;
use pinyin_subst::records_to_plist;
use pinyin_subst::syllable_table;

use clap::{ArgAction, Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use rusqlite::{Connection, backup};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pinyin_subst")]
#[command(version = "0.1.0")]
#[command(about = "Text substitutions from numbered pinyin (ni3) to pinyin with tone marks (nǐ)", long_about = None)]
struct Cli {
    /// Output file, standard output if not given
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plist)]
    format: OutputFormat,

    /// Also write the substitutions to a .db file (sqlite)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Keep the tone digit or append "!" for syllables where no tone mark can be placed, instead of failing
    #[arg(long)]
    lenient: bool,

    /// Log more details to stderr, can be repeated
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Property list for macOS text replacements
    Plist,
    /// JSON array of phrase/shortcut objects
    Json,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn write_records(
    writer: &mut dyn Write,
    records: &[SyllableRecord],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plist => records_to_plist::write_plist(writer, records),
        OutputFormat::Json => records_to_plist::write_json(writer, records),
    }
}

fn write_db(records: &[SyllableRecord], path_out: &Path) -> anyhow::Result<()> {
    let mut conn = Connection::open_in_memory()?;
    records_to_db::records_to_db(&mut conn, records)?;
    let mut db_out = Connection::open(path_out).context(format!(
        "Could not create output file {}",
        path_out.display()
    ))?;
    let backup = backup::Backup::new(&conn, &mut db_out)?;
    backup.run_to_completion(4000, Duration::new(0, 0), None)?;
    Ok(())
}

fn write_output(records: &[SyllableRecord], cli: &Cli) -> anyhow::Result<()> {
    if cli.db.is_some() && cli.db == cli.output {
        bail!("Substitution list and database must be written to different files");
    }

    if let Some(path_out) = &cli.output {
        let file_out = File::create(path_out).context(format!(
            "Could not create output file {}",
            path_out.display()
        ))?;
        let mut writer_out = BufWriter::new(file_out);
        write_records(&mut writer_out, records, cli.format)?;
        info!("wrote {} records to {}", records.len(), path_out.display());
    } else {
        let mut writer_out = BufWriter::new(io::stdout().lock());
        write_records(&mut writer_out, records, cli.format)?;
    }

    if let Some(path_out) = &cli.db {
        write_db(records, path_out)?;
        info!("wrote {} records to {}", records.len(), path_out.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = if cli.lenient {
        DecodeMode::Lenient
    } else {
        DecodeMode::Strict
    };

    let syllables = syllable_table::syllable_table()?;
    info!("{} syllables in table", syllables.len());
    let records = records::generate_records(&syllables, mode)?;

    let errors = records_check::check_records(&records)?;
    for err in &errors {
        error!("{err}");
    }

    write_output(&records, &cli)?;

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Failure!"))
    }
}
