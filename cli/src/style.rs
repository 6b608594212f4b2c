use std::fmt::{self, Display};

/// Resets every attribute set by a [`Style`].
pub const RESET: &str = "\x1B[0m";

/// Prints with a [`Style`] and resets it afterwards.
#[macro_export]
macro_rules! print_styled {
    ($style:expr, $pat:expr $(,$args:expr),*) => {{
        print!("{}", $style);
        print!($pat $(,$args)*);
        print!("{}", $crate::style::RESET);
    }}
}

/// Like [`print_styled`], followed by a newline.
#[macro_export]
macro_rules! println_styled {
    ($style:expr, $pat:expr $(,$args:expr),*) => {{
        print!("{}", $style);
        print!($pat $(,$args)*);
        println!("{}", $crate::style::RESET);
    }}
}

/// An SGR escape sequence setting the foreground color, optionally bold.
#[derive(Clone, Copy)]
pub struct Style {
    code: u8,
    bold: bool,
}

impl Style {
    const fn new(code: u8, bold: bool) -> Self {
        Self { code, bold }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bold = if self.bold { "1;" } else { "" };
        write!(f, "\x1B[{bold}{}m", self.code)
    }
}

/// The role a piece of output plays, mapped to a terminal color.
pub trait Color {
    const CODE: u8;
    const NORMAL: Style = Style::new(Self::CODE, false);
    const BOLD: Style = Style::new(Self::CODE, true);
}

/// Carets and messages of rejected input.
pub struct Failure;
impl Color for Failure {
    const CODE: u8 = 91;
}

/// The repl prompt.
pub struct Prompt;
impl Color for Prompt {
    const CODE: u8 = 94;
}

/// Commands and flags in the help text.
pub struct Keyword;
impl Color for Keyword {
    const CODE: u8 = 32;
}

/// Section headings in the help text.
pub struct Heading;
impl Color for Heading {
    const CODE: u8 = 33;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn escape_sequences() {
        assert_eq!(Prompt::NORMAL.to_string(), "\x1B[94m");
        assert_eq!(Failure::BOLD.to_string(), "\x1B[1;91m");
    }
}
