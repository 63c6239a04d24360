use super::{KeyLayout, SlideExtractor, SlideParameters};
use crate::error::SlideError;
use rayon::prelude::*;
use tracing::info;

/// A word the extractor could not turn into parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedWord {
    /// 입력 목록에서의 위치
    pub index: usize,
    pub word: String,
    pub reason: SlideError,
}

/// Result of a batch run. Both lists keep input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub rows: Vec<(String, SlideParameters)>,
    pub skipped: Vec<SkippedWord>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.rows.len() + self.skipped.len()
    }
}

/// Extracts every word of `words`.
///
/// Words are independent, so with `config.parallel` they are spread over the
/// rayon pool; collection keeps the original order either way.
pub fn process_words(
    extractor: &SlideExtractor,
    layout: &KeyLayout,
    words: &[String],
) -> BatchReport {
    let run = |(index, word): (usize, &String)| (index, extractor.extract(word, layout));

    let results: Vec<_> = if extractor.config().parallel {
        words.par_iter().enumerate().map(run).collect()
    } else {
        words.iter().enumerate().map(run).collect()
    };

    let mut report = BatchReport::default();
    for (index, result) in results {
        let word = words[index].clone();
        match result {
            Ok(params) => report.rows.push((word, params)),
            Err(reason) => report.skipped.push(SkippedWord {
                index,
                word,
                reason,
            }),
        }
    }

    info!(
        words = words.len(),
        rows = report.rows.len(),
        skipped = report.skipped.len(),
        transform = %extractor.transform_name(),
        "slide parameters extracted"
    );
    report
}
