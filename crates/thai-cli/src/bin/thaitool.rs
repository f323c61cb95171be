use clap::{Args, Parser, Subcommand};

use thai_cli::commands::{lexicon_ops, segment_ops, SegmenterArgs};

#[derive(Parser)]
#[command(name = "thaitool", about = "Thai word and syllable segmentation tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct LexiconArgs {
    /// Word lexicon, one entry per line (default: bundled list)
    #[arg(long)]
    dict: Option<String>,
    /// Compiled word lexicon (see `compile`)
    #[arg(long, conflicts_with = "dict")]
    compiled: Option<String>,
    /// Path-selection policy: maximum-matching or greedy-longest-match
    #[arg(long)]
    policy: Option<String>,
    /// Settings TOML file
    #[arg(long)]
    config: Option<String>,
}

impl From<LexiconArgs> for SegmenterArgs {
    fn from(a: LexiconArgs) -> Self {
        SegmenterArgs {
            dict: a.dict,
            compiled: a.compiled,
            policy: a.policy,
            config: a.config,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Segment text into words
    Words {
        /// Input text
        text: String,
        #[command(flatten)]
        lexicon: LexiconArgs,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Print one row per token
        #[arg(short, long)]
        verbose: bool,
    },
    /// Segment text into syllables
    Syllables {
        /// Input text
        text: String,
        #[command(flatten)]
        lexicon: LexiconArgs,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Print one row per token
        #[arg(short, long)]
        verbose: bool,
    },
    /// Percentage of Thai characters in text
    Ratio {
        /// Input text
        text: String,
        /// Also classify each character
        #[arg(long)]
        per_char: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Split text into sentences on whitespace
    Sentences {
        /// Input text
        text: String,
        /// One sentence per line; keep spaces within a line
        #[arg(long)]
        lines: bool,
    },
    /// Exact and prefix lookup in a lexicon
    Lookup {
        /// Lexicon file (plain or compiled)
        dict_file: String,
        /// Word to look up
        word: String,
    },
    /// Compile a plain lexicon into the binary format
    Compile {
        /// Input lexicon, one entry per line
        input_file: String,
        /// Output file
        output_file: String,
    },
    /// Show lexicon statistics
    Info {
        /// Lexicon file (plain or compiled)
        file: String,
    },
    /// Segment each line of a file and write JSONL
    Batch {
        /// Input file (one text per line)
        input_file: String,
        /// Output JSONL file
        output_file: String,
        #[command(flatten)]
        lexicon: LexiconArgs,
    },
    /// Export default settings as TOML
    SettingsExport,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Words {
            text,
            lexicon,
            json,
            verbose,
        } => segment_ops::words_cmd(&lexicon.into(), &text, json, verbose),
        Command::Syllables {
            text,
            lexicon,
            json,
            verbose,
        } => segment_ops::syllables_cmd(&lexicon.into(), &text, json, verbose),
        Command::Ratio {
            text,
            per_char,
            json,
        } => segment_ops::ratio_cmd(&text, per_char, json),
        Command::Sentences { text, lines } => segment_ops::sentences_cmd(&text, lines),
        Command::Lookup { dict_file, word } => lexicon_ops::lookup(&dict_file, &word),
        Command::Compile {
            input_file,
            output_file,
        } => lexicon_ops::compile(&input_file, &output_file),
        Command::Info { file } => lexicon_ops::info(&file),
        Command::Batch {
            input_file,
            output_file,
            lexicon,
        } => segment_ops::batch_cmd(&lexicon.into(), &input_file, &output_file),
        Command::SettingsExport => {
            print!("{}", thai_core::settings::DEFAULT_SETTINGS_TOML);
        }
    }
}
