//! makeslidedict - builds a slide dictionary from a keyboard layout and a word list.
//!
//! Rows go to stdout as `word\tv0\t…\tv16`; logs and skipped words go to stderr.

use anyhow::Context;
use clap::Parser;
use slide_dict::slide::{process_words, read_word_list, write_rows, write_skipped, KeyLayout};
use slide_dict::SlideExtractor;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "makeslidedict", version, about)]
struct Cli {
    /// Keyboard layout XML (`<keyboard keyWidth=.. keyHeight=..><row offset=..><key char=../>`)
    keyboard: PathBuf,

    /// Word list XML (`<wordlist><w>word</w>…</wordlist>`)
    wordlist: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout 은 데이터 전용이므로 로그는 stderr 로
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let layout = KeyLayout::from_path(&cli.keyboard)
        .with_context(|| format!("loading keyboard layout {}", cli.keyboard.display()))?;
    let words = read_word_list(&cli.wordlist)
        .with_context(|| format!("loading word list {}", cli.wordlist.display()))?;
    info!(keys = layout.len(), words = words.len(), "inputs loaded");

    let extractor = SlideExtractor::default();
    let report = process_words(&extractor, &layout, &words);
    if !report.skipped.is_empty() {
        warn!(skipped = report.skipped.len(), "some words have no slide parameters");
    }
    // 누락 단어 목록은 로그 필터와 무관하게 항상 stderr 로
    write_skipped(&mut io::stderr().lock(), &report).context("writing skipped words")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_rows(&mut out, &report).context("writing slide dictionary")?;
    Ok(())
}
