use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::buffer::TextBuffer;
use editing::{EditBatch, LineAccessor, Position, TextRange, WorkflowError};

/// In-memory line buffer the workflows run against
mod buffer;

struct Args {
    pub command: String,
    pub input: String,
    pub selections: Vec<TextRange>,
    pub trace: bool,
}

fn main() {
    let args = parse_args().expect("Could not parse arguments");
    if args.trace {
        tracing_subscriber::fmt::fmt()
            .with_span_events(FmtSpan::ACTIVE)
            .with_max_level(Level::DEBUG)
            .with_env_filter(EnvFilter::from_default_env())
            .finish()
            .init();
        info!("Logger initialized");
    }

    let source = std::fs::read_to_string(&args.input).expect("Could not read input file");
    let mut document = TextBuffer::from_text(&source);
    match run(&document, &args) {
        Ok(batch) => {
            document.apply(&batch);
            print!("{}", document.to_text());
        }
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();
    let trace = pargs.contains(["--trace", "-t"]);
    let command = pargs.free_from_str()?;
    let input = pargs.free_from_str()?;
    let mut selections = Vec::new();
    while let Some(spec) = pargs.opt_free_from_str::<String>()? {
        selections.push(parse_selection(&spec).expect("Selections look like LINE:COL-LINE:COL"));
    }
    Ok(Args {
        command,
        input,
        selections,
        trace,
    })
}

fn run(document: &TextBuffer, args: &Args) -> Result<EditBatch, WorkflowError> {
    match args.command.as_str() {
        "rearrange" => {
            let selections: Vec<(TextRange, String)> = args
                .selections
                .iter()
                .map(|range| (*range, document.text_in(*range)))
                .collect();
            editing::rearrange(&selections)
        }
        "label" => {
            // Only the first selection matters for labelling
            let selection = args
                .selections
                .first()
                .copied()
                .ok_or(WorkflowError::EmptySelection)?;
            let text = document.text_in(selection);
            editing::wrap_selection_as_label(document, selection, &text, document.line_count())
        }
        other => {
            eprintln!("Unknown command '{other}', expected 'rearrange' or 'label'");
            std::process::exit(2);
        }
    }
}

/// `LINE:COL-LINE:COL`, 0-based, byte columns.
fn parse_selection(spec: &str) -> Option<TextRange> {
    let (start, end) = spec.split_once('-')?;
    Some(TextRange::new(parse_position(start)?, parse_position(end)?))
}

fn parse_position(spec: &str) -> Option<Position> {
    let (line, column) = spec.split_once(':')?;
    Some(Position::new(line.parse().ok()?, column.parse().ok()?))
}

#[cfg(test)]
#[test]
fn test_parse_selection() {
    assert_eq!(
        parse_selection("1:4-1:20"),
        Some(TextRange::new(Position::new(1, 4), Position::new(1, 20)))
    );
    assert_eq!(parse_selection("1:4"), None);
    assert_eq!(parse_selection("1-2"), None);
}
