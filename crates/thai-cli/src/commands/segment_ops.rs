use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};

use serde::Serialize;

use thai_core::script_ratio;
use thai_core::segmenter::{Token, Tokenize};
use thai_core::sentence::{split_sentences, SentenceMode};

use super::{die, SegmenterArgs};
use crate::render::{join_tokens, token_table};
use crate::CliError;

fn print_tokens(tokens: &[Token], json: bool, verbose: bool) {
    if json {
        println!("{}", die!(serde_json::to_string(tokens), "Error encoding JSON: {}"));
    } else if verbose {
        print!("{}", token_table(tokens));
    } else {
        println!("{}", join_tokens(tokens));
    }
}

pub fn words_cmd(args: &SegmenterArgs, text: &str, json: bool, verbose: bool) {
    let settings = die!(args.settings(), "Error: {}");
    let segmenter = die!(settings.build_segmenter(), "Error loading lexicon: {}");
    let tokens = die!(segmenter.tokenize(text), "Error: {}");
    print_tokens(&tokens, json, verbose);
}

pub fn syllables_cmd(args: &SegmenterArgs, text: &str, json: bool, verbose: bool) {
    let settings = die!(args.settings(), "Error: {}");
    let syllabifier = die!(settings.build_syllabifier(), "Error loading lexicon: {}");
    let tokens = die!(syllabifier.syllabify(text), "Error: {}");
    print_tokens(&tokens, json, verbose);
}

pub fn ratio_cmd(text: &str, per_char: bool, json: bool) {
    let ratio = die!(script_ratio(text, per_char), "Error: {}");
    if json {
        println!("{}", die!(serde_json::to_string(&ratio), "Error encoding JSON: {}"));
        return;
    }
    println!("thai: {:.2}%", ratio.ratio);
    for (c, thai) in ratio.breakdown.iter().flatten() {
        println!("  {c:?}\t{thai}");
    }
}

pub fn sentences_cmd(text: &str, lines: bool) {
    let mode = if lines {
        SentenceMode::LineBreaks
    } else {
        SentenceMode::Whitespace
    };
    for sentence in split_sentences(text, mode) {
        println!("{sentence}");
    }
}

/// One JSONL record per input line.
#[derive(Debug, Serialize)]
struct BatchRecord<'a> {
    text: &'a str,
    tokens: Vec<String>,
    unknown: usize,
}

/// Segment every non-blank line of `input` and write one JSON record per
/// line to `output`. Returns the number of records written.
pub fn run_batch(
    segmenter: &dyn Tokenize,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<usize, CliError> {
    let mut written = 0;
    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let tokens = segmenter.tokenize(text)?;
        let record = BatchRecord {
            text,
            unknown: tokens.iter().filter(|t| t.is_unknown()).count(),
            tokens: tokens.into_iter().map(|t| t.text).collect(),
        };
        serde_json::to_writer(&mut output, &record)?;
        writeln!(output)?;
        written += 1;
    }
    output.flush()?;
    Ok(written)
}

pub fn batch_cmd(args: &SegmenterArgs, input_file: &str, output_file: &str) {
    let settings = die!(args.settings(), "Error: {}");
    let segmenter = die!(settings.build_segmenter(), "Error loading lexicon: {}");
    let input = BufReader::new(die!(File::open(input_file), "Error opening input: {}"));
    let output = BufWriter::new(die!(File::create(output_file), "Error creating output: {}"));
    let count = die!(run_batch(&segmenter, input, output), "Error: {}");
    eprintln!("Wrote {count} records to {output_file}");
}
