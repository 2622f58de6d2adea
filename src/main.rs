use std::{env, fs::read_to_string, io, path::Path, process::ExitCode, rc::Rc, time::Instant};

use boolexpr::{config::{Config, USAGE}, errors::errors::{Error, ErrorTip}, get_line_at_position, lexer::lexer::tokenize, parser::parser::parse};

fn main() -> ExitCode {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let source = match read_to_string(&config.input) {
        Ok(source) => source,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            println!("File '{}' not found.", config.input.display());
            return ExitCode::FAILURE;
        }
        Err(error) => {
            println!("Failed to read '{}': {}", config.input.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = config
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.input.display().to_string());

    let start = Instant::now();
    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &config.input, &source);
            return ExitCode::FAILURE;
        }
    };

    if config.timings {
        println!("Tokenized in {:?}", start.elapsed());
    }

    println!("Token table:");
    println!("================");
    for token in &tokens {
        println!("{}", token.table_row());
    }

    println!("\nParse tree:");
    println!("================");

    let parse_start = Instant::now();
    let tree = parse(tokens, Rc::new(file_name));

    if config.timings {
        println!("Parsed in {:?}", parse_start.elapsed());
    }

    match tree {
        Ok(tree) => {
            print!("{}", tree);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, &config.input, &source);
            ExitCode::FAILURE
        }
    }
}

fn display_error(error: &Error, file: &Path, source: &str) {
    /*
        Error: UnexpectedToken (Expected SEMICOLON, found IDENT)
        -> input.txt
          |
        1 | x := a b;
          | -------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file.display());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
