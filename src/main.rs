mod config;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use flate2::read::GzDecoder;
use jisx4061::{Attribute, DiacriticalMark, KanaType, LetterCase, SymbolType, Voiced};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Sort lines in Japanese dictionary order (JIS X 4061).
#[derive(Parser)]
struct Args {
    /// Check that the input is already sorted instead of sorting it.
    #[arg(long, short = 'c')]
    check: bool,
    /// Sort in descending order.
    #[arg(long, short = 'r')]
    reverse: bool,
    /// Only output the first of a run of lines which compare equal.
    #[arg(long, short = 'u')]
    unique: bool,
    /// Don't preserve the input order of lines which compare equal.
    #[arg(long)]
    unstable: bool,
    /// Load configuration from the given path.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,
    /// Print the effective configuration and exit.
    #[arg(long)]
    print_config: bool,
    /// Print the collation attribute of every character in the given text
    /// and exit.
    #[arg(long, value_name = "text")]
    explain: Vec<String>,
    /// Files to read lines from. Reads standard input if none are specified
    /// or if the file is `-`. Files ending in `.gz` are decompressed.
    #[arg(name = "inputs")]
    inputs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    let mut config = Config::load(args.config.as_deref())?;
    config.reverse |= args.reverse;
    config.unique |= args.unique;

    if args.unstable {
        config.stable = false;
    }

    if args.print_config {
        print!("{}", toml::to_string(&config)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if !args.explain.is_empty() {
        for text in &args.explain {
            explain(&mut out, text)?;
        }

        out.flush()?;
        return Ok(());
    }

    let mut inputs = args.inputs;

    if inputs.is_empty() {
        inputs.push(PathBuf::from("-"));
    }

    let mut lines = Vec::new();

    for path in &inputs {
        let start = lines.len();
        read_lines(path, &mut lines).with_context(|| path.display().to_string())?;
        tracing::debug!(path = ?path, lines = lines.len() - start, "Read input");
    }

    let order = |a: &Vec<u8>, b: &Vec<u8>| {
        let ordering = jisx4061::compare(a, b);

        if config.reverse {
            ordering.reverse()
        } else {
            ordering
        }
    };

    if args.check {
        for (n, window) in lines.windows(2).enumerate() {
            let ordering = order(&window[0], &window[1]);

            if ordering.is_gt() || (config.unique && ordering.is_eq()) {
                let line = String::from_utf8_lossy(&window[1]);
                bail!("Line {} is out of order: {line}", n + 2);
            }
        }

        return Ok(());
    }

    let start = Instant::now();

    if config.stable {
        lines.sort_by(order);
    } else {
        lines.sort_unstable_by(order);
    }

    if config.unique {
        lines.dedup_by(|a, b| jisx4061::compare(&*a, &*b).is_eq());
    }

    let duration = Instant::now().duration_since(start);
    tracing::info!(lines = lines.len(), ?duration, "Sorted");

    for line in &lines {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(())
}

/// Read newline separated lines from the given path into `lines`.
fn read_lines(path: &Path, lines: &mut Vec<Vec<u8>>) -> Result<()> {
    let input: Box<dyn Read> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path)?;

        if path.extension() == Some("gz".as_ref()) {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        }
    };

    for line in BufReader::new(input).split(b'\n') {
        let mut line = line?;

        if line.last() == Some(&b'\r') {
            line.pop();
        }

        lines.push(line);
    }

    Ok(())
}

/// Print the resolved attribute of every character in `text`.
fn explain<O>(out: &mut O, text: &str) -> Result<()>
where
    O: ?Sized + Write,
{
    writeln!(out, "{text}:")?;

    let mut offset = 0;

    while offset < text.len() {
        let (attribute, n) = jisx4061::classify(text, offset);
        let part = &text[offset..offset + n];
        writeln!(out, "  {part} {attribute} ({})", notes(&attribute).join(", "))?;
        offset += n;
    }

    Ok(())
}

/// Descriptions of the class and of every field which is set.
fn notes(attribute: &Attribute) -> Vec<&'static str> {
    let mut notes = vec![attribute.class.help()];

    if attribute.voiced != Voiced::None {
        notes.push(attribute.voiced.help());
    }

    if attribute.symbol_type != SymbolType::None {
        notes.push(attribute.symbol_type.help());
    }

    if attribute.kana_type != KanaType::None {
        notes.push(attribute.kana_type.help());
    }

    if attribute.diacritical_mark != DiacriticalMark::None {
        notes.push(attribute.diacritical_mark.help());
    }

    if attribute.letter_case != LetterCase::None {
        notes.push(attribute.letter_case.help());
    }

    notes
}

#[test]
fn explain_describes_fields() -> Result<()> {
    let mut out = Vec::new();
    explain(&mut out, "がĀ")?;
    let out = String::from_utf8(out)?;

    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("がĀ:"));

    let ga = lines.next().context("missing kana")?;
    assert!(ga.starts_with("  が kana:"), "{ga}");
    assert!(ga.ends_with("(仮名, 濁音, 大文字, 平仮名)"), "{ga}");

    let macron = lines.next().context("missing latin")?;
    assert!(macron.ends_with("(ラテンアルファベット, マクロン, 大文字)"), "{macron}");

    assert_eq!(lines.next(), None);
    Ok(())
}
