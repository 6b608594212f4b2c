use std::env::args;
use std::io::{self, Write as _};
use std::process::ExitCode;

use calc::{Calc, DEFAULT_PROMPT};
use calc_derive::EnumFromStr;
use log::debug;

use display::*;
pub use style::*;

mod display;
mod json;
mod style;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumFromStr)]
#[calc(rename_all = "snake_case")]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

struct Args {
    format: OutputFormat,
    prompt: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            prompt: DEFAULT_PROMPT.into(),
        }
    }
}

enum Action {
    Interactive,
    Help,
    Version,
}

macro_rules! error {
    ($pat:expr $(,$args:expr),*) => {{
        println_styled!(Failure::BOLD, $pat $(,$args)*);
        println!();
        help();
        return ExitCode::FAILURE;
    }}
}

fn main() -> ExitCode {
    env_logger::init();

    let mut action = Action::Interactive;
    let mut user_args = Args::default();

    let mut args = args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "i" | "interactive" => action = Action::Interactive,
            "-h" | "--help" => action = Action::Help,
            "-v" | "--version" => action = Action::Version,
            "-p" | "--prompt" => match args.next() {
                Some(p) => user_args.prompt = p,
                None => {
                    error!("Missing --prompt");
                }
            },
            "-f" | "--format" => match args.next() {
                Some(f) => match f.parse::<OutputFormat>() {
                    Ok(f) => user_args.format = f,
                    Err(_) => {
                        error!("Invalid --format: `{f}`, possible values are [pretty, json]");
                    }
                },
                None => {
                    error!("Missing --format, possible values are [pretty, json]");
                }
            },
            "--" => {
                let items = args.collect::<Vec<_>>();
                return eval_args(&user_args, &items);
            }
            a => {
                error!("Invalid argument: `{a}`");
            }
        }
    }

    match action {
        Action::Interactive => repl(&user_args),
        Action::Help => {
            help();
            ExitCode::SUCCESS
        }
        Action::Version => {
            version();
            ExitCode::SUCCESS
        }
    }
}

fn repl(args: &Args) -> ExitCode {
    debug!("starting repl");

    let mut output = io::stdout();
    let input = io::stdin();
    let mut buf = String::new();
    let mut calc = Calc::new(args.prompt.as_str());
    loop {
        buf.clear();

        print_styled!(Prompt::NORMAL, "{}", calc.prompt());
        let _ = output.flush();
        match input.read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => (),
            Err(_) => {
                println_styled!(Failure::BOLD, "Error reading line");
                continue;
            }
        }

        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            break;
        }

        calc.set_input(line);
        let offset = calc.prompt_width();
        match calc.result() {
            Ok(Some(v)) => println!("> {v}\n"),
            Ok(None) => match calc.arith_error() {
                Some(e) => println!("{}\n", e.display(line, offset)),
                None => println!(),
            },
            Err(e) => println!("{}\n", e.display(line, offset)),
        }
    }

    println!("quit");
    ExitCode::SUCCESS
}

fn eval_args(args: &Args, items: &[String]) -> ExitCode {
    let input = items.join(" ");
    debug!("evaluating '{input}' once");

    let mut calc = Calc::with_input(args.prompt.as_str(), input.as_str());
    let (value, error) = match calc.result() {
        Ok(v) => (v, calc.arith_error().cloned()),
        Err(e) => (None, Some(e)),
    };

    match args.format {
        OutputFormat::Pretty => match (&error, value) {
            (Some(e), _) => {
                println!("{input}");
                println!("{}", e.display(&input, 0));
            }
            (None, Some(v)) => println!("{v}"),
            (None, None) => (),
        },
        OutputFormat::Json => {
            let mut buf = String::new();
            let errors: Vec<_> = error.iter().collect();
            let _ = json::write_result(&mut buf, value, &errors);
            println!("{buf}");
        }
    }

    match error {
        Some(_) => ExitCode::FAILURE,
        None => ExitCode::SUCCESS,
    }
}

fn help() {
    println!(
        "\
{keyword}calc{esc} {vers}
{authors}
{desc}

{heading}USAGE:{esc}
    calc [COMMAND][OPTIONS] [-- EXPRESSION]

{heading}EXPRESSION:{esc}
    An expression that will be evaluated once

{heading}COMMANDS:{esc}
    {keyword}i{esc}, {keyword}interactive{esc}          Start an interactive repl [default]

{heading}OPTIONS:{esc}
    {keyword}-h{esc}, {keyword}--help{esc}              Show this help message
    {keyword}-v{esc}, {keyword}--version{esc}           Print the version
    {keyword}-p{esc}, {keyword}--prompt <prompt>{esc}   The prompt of the repl [default: \"{prompt}\"]
    {keyword}-f{esc}, {keyword}--format <format>{esc}   The output format [default: \"pretty\"] [possible values: \"pretty\", \"json\"]
",
        vers = env!("CARGO_PKG_VERSION"),
        authors = env!("CARGO_PKG_AUTHORS"),
        desc = env!("CARGO_PKG_DESCRIPTION"),
        prompt = DEFAULT_PROMPT,
        keyword = Keyword::NORMAL,
        heading = Heading::NORMAL,
        esc = RESET,
    );
}

fn version() {
    println!(env!("CARGO_PKG_VERSION"));
}
