use std::io::{self, BufRead, Write};

use urlcanon_core::engine::{self, Options};
use urlcanon_core::output;

const USAGE: &str = "\
usage: urlcanon [options] [URL ...]

Canonicalize URLs given as arguments, or read one per line from stdin.
Each input produces exactly one output line; inputs with no recognizable
URL structure produce an empty line.

options:
  --sort-query          sort query parameters by key
  --strip-empty-query   drop the bare `?` left by an empty query
  --json                emit JSON Lines records instead of plain text
  -h, --help            show this help
";

fn main() {
    let mut options = Options::default();
    let mut json = false;
    let mut urls: Vec<String> = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--sort-query" => options.sort_query_params = true,
            "--strip-empty-query" => options.remove_empty_query_delimiter = true,
            "--json" => json = true,
            "-h" | "--help" => {
                print!("{USAGE}");
                return;
            }
            other if other.starts_with('-') => {
                eprintln!("urlcanon: unknown option '{other}'");
                eprint!("{USAGE}");
                std::process::exit(2);
            }
            url => urls.push(url.to_string()),
        }
    }

    let code = if urls.is_empty() {
        run_stdin(&options, json)
    } else {
        run_args(&urls, &options, json)
    };
    std::process::exit(code);
}

fn run_args(urls: &[String], options: &Options, json: bool) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for url in urls {
        if emit(url, options, json, &mut out).is_err() {
            return 1;
        }
    }
    0
}

fn run_stdin(options: &Options, json: bool) -> i32 {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => return 1,
        };
        if emit(&line, options, json, &mut out).is_err() {
            return 1;
        }
    }
    0
}

fn emit(input: &str, options: &Options, json: bool, w: impl Write) -> io::Result<()> {
    let canonical = engine::canonicalize(input, options);
    if canonical.is_empty() {
        warn_unparsable(input);
    }
    if json {
        output::write_json(input, &canonical, w)
    } else {
        output::write_plain(&canonical, w)
    }
}

/// Warn on stderr, with color only when stderr is a terminal.
fn warn_unparsable(input: &str) {
    let stderr = io::stderr();
    if is_terminal::is_terminal(&stderr) {
        eprintln!("\x1b[33murlcanon: warning:\x1b[0m no URL structure in input: {input:?}");
    } else {
        eprintln!("urlcanon: warning: no URL structure in input: {input:?}");
    }
}
