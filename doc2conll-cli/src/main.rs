//! doc2conll command-line entry point

use clap::Parser;
use doc2conll_cli::commands::convert::ConvertArgs;

/// Convert a doccano span export and tokenized text into an IOB2/CoNLL corpus
#[derive(Debug, Parser)]
#[command(name = "doc2conll", version, about)]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.args.execute()
}
