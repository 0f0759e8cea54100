//! bmc-drv - Driver for the B-Minor lexical front end.
//!
//! Thin glue around `bmc-lex`: opens the input (a file or stdin), runs the
//! scanner to completion, writes one human-readable trace line per token,
//! and reports the first lexical error with its position. Identifier
//! interning happens here, at token emission, not in the scanner.

use std::env;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use bmc_lex::{LexError, LexErrorKind, Lexer, Payload, Token, TokenKind};
use bmc_util::{SymbolError, SymbolTable};

/// Driver configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Source path; `None` or `-` reads stdin.
    pub input: Option<PathBuf>,
    /// Trace output path; `None` writes stdout.
    pub output: Option<PathBuf>,
    /// Emit `[verbose]` progress notes on stderr.
    pub verbose: bool,
    /// Print usage and exit.
    pub help: bool,
    /// Print version and exit.
    pub version: bool,
}

/// Parse command line arguments.
pub fn parse_args() -> Result<Config, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_arg_list(&args)
}

fn parse_arg_list(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();

    for arg in args {
        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(format!("unknown option: {}", arg));
        } else if config.input.is_none() {
            config.input = Some(PathBuf::from(arg));
        } else if config.output.is_none() {
            config.output = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument: {}", arg));
        }
    }

    Ok(config)
}

/// Print help message.
pub fn print_help() {
    println!("B-Minor Lexer v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: bmc [OPTIONS] [INPUT] [OUTPUT]");
    println!();
    println!("Reads B-Minor source from INPUT (default: stdin, also `-`) and");
    println!("writes one trace line per token to OUTPUT (default: stdout).");
    println!();
    println!("Options:");
    println!("  -h, --help       Print this help message");
    println!("  -V, --version    Print version information");
    println!("  -v, --verbose    Enable verbose output");
}

/// Print version.
pub fn print_version() {
    println!("bmc {}", env!("CARGO_PKG_VERSION"));
}

/// Entry point shared by the binary: parse arguments, then run.
pub fn main() -> Result<()> {
    let config = parse_args().map_err(|msg| anyhow!(msg))?;

    if config.help {
        print_help();
        return Ok(());
    }
    if config.version {
        print_version();
        return Ok(());
    }

    run(&config)
}

/// Run one tokenization pass over the configured input.
pub fn run(config: &Config) -> Result<()> {
    let source = read_source(config)?;

    if config.verbose {
        eprintln!("[verbose] lexing {} bytes", source.len());
    }

    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path)
                .with_context(|| format!("can't open {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let count = emit_trace(&source, &mut out)?;
    out.flush().context("flushing trace output")?;

    if config.verbose {
        eprintln!("[verbose] {} tokens", count);
    }

    Ok(())
}

fn read_source(config: &Config) -> Result<String> {
    match &config.input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("can't open {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("reading stdin")?;
            Ok(source)
        }
    }
}

/// Scan `source` to completion, writing one trace line per token.
///
/// Returns the number of tokens emitted, the end-of-input token included.
/// Stops at the first lexical error.
pub fn emit_trace<W: Write>(source: &str, out: &mut W) -> Result<usize> {
    let mut lexer = Lexer::new(source);
    let mut symbols = SymbolTable::new();
    let mut count = 0usize;

    loop {
        let token = lexer.next_token()?;
        let line = trace_line(&token, &mut symbols)?;
        writeln!(out, "{}", line).context("writing trace output")?;
        count += 1;
        if token.is_eof() {
            return Ok(count);
        }
    }
}

/// Formats the trace line for one token, interning identifiers as they
/// surface. Keywords print their numeric kind code; `[` `]` `=` `^` and
/// the operators print as operands, the remaining punctuation as
/// delimiters.
fn trace_line(token: &Token, symbols: &mut SymbolTable) -> Result<String, LexError> {
    let line = match &token.payload {
        Payload::Int(n) => format!("Number\t\t{}", n),
        Payload::Str { delim, text } => {
            format!("String\t\t{} ---> \"{}\"", *delim as u32, text)
        }
        Payload::Text(text) => {
            let id = symbols.intern(text).map_err(|err| match err {
                SymbolError::TableFull { capacity } => {
                    LexError::new(LexErrorKind::SymbolTableOverflow(capacity), token.pos)
                }
            })?;
            format!("Identifier\tID: {} ---> {}", id, text)
        }
        Payload::Empty => {
            if token.kind == TokenKind::Eof {
                "End-of-input".to_owned()
            } else if token.kind.is_keyword() {
                format!("Keyword\t\t{}", token.kind.code())
            } else if is_delimiter(token.kind) {
                format!("Delimiter\t{}", token.kind)
            } else {
                format!("Operand\t\t{}", token.kind)
            }
        }
    };
    Ok(line)
}

/// The kinds the trace prints as delimiters; everything else
/// fixed-spelling (brackets included) prints as an operand.
fn is_delimiter(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::Colon
            | TokenKind::Semicolon
            | TokenKind::Comma
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace_to_string(source: &str) -> String {
        let mut out = Vec::new();
        emit_trace(source, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn trace_covers_every_category() {
        let trace = trace_to_string("while (x <= 10) { print \"hi\", x[0]; }");
        assert!(trace.contains("Keyword\t\t15"));
        assert!(trace.contains("Delimiter\t("));
        assert!(trace.contains("Identifier\tID: 1 ---> x"));
        assert!(trace.contains("Operand\t\t<="));
        assert!(trace.contains("Number\t\t10"));
        assert!(trace.contains("String\t\t34 ---> \"hi\""));
        assert!(trace.contains("Operand\t\t["));
        assert!(trace.ends_with("End-of-input\n"));
    }

    #[test]
    fn identifier_ids_are_stable_and_ordered() {
        let trace = trace_to_string("foo bar foo");
        let ids: Vec<&str> = trace
            .lines()
            .filter(|l| l.starts_with("Identifier"))
            .collect();
        assert_eq!(
            ids,
            [
                "Identifier\tID: 1 ---> foo",
                "Identifier\tID: 2 ---> bar",
                "Identifier\tID: 1 ---> foo",
            ]
        );
    }

    #[test]
    fn char_literal_traces_as_number() {
        let trace = trace_to_string("'\\n'");
        assert!(trace.starts_with("Number\t\t10\n"));
    }

    #[test]
    fn lex_error_stops_the_trace() {
        let mut out = Vec::new();
        let err = emit_trace("ok then 12ab", &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid number: 12ab"));
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.lines().count(), 2); // ok, then - nothing after
    }

    #[test]
    fn symbol_table_overflow_reports_the_token_position() {
        let source: String = (0..=bmc_util::MAX_IDENTIFIERS)
            .map(|i| format!("id{} ", i))
            .collect();
        let mut out = Vec::new();
        let err = emit_trace(&source, &mut out).unwrap_err();
        let lex_err = err.downcast::<LexError>().unwrap();
        assert_eq!(
            lex_err.kind,
            LexErrorKind::SymbolTableOverflow(bmc_util::MAX_IDENTIFIERS)
        );
    }

    #[test]
    fn parse_arg_list_positional_order() {
        let args: Vec<String> = ["-v", "in.bminor", "out.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let config = parse_arg_list(&args).unwrap();
        assert!(config.verbose);
        assert_eq!(config.input.as_deref(), Some(std::path::Path::new("in.bminor")));
        assert_eq!(config.output.as_deref(), Some(std::path::Path::new("out.txt")));
    }

    #[test]
    fn parse_arg_list_rejects_unknown_option() {
        let args = vec!["--emit".to_string()];
        assert!(parse_arg_list(&args).is_err());
    }
}
