use proc_macro::{Delimiter, Literal, TokenStream, TokenTree};
use std::fmt::Write as _;
use std::iter::Peekable;

const ATTRIBUTE: &str = "calc";

struct Enum {
    vis: String,
    name: String,
    rename_all: Option<Case>,
    members: Vec<Member>,
}

#[derive(Clone, Copy)]
enum Case {
    /// caseexample
    Lower,
    /// case_example
    Snake,
    /// case-example
    Kebab,
}

impl Case {
    fn parse(lit: &str) -> Self {
        match lit {
            "lowercase" => Self::Lower,
            "snake_case" => Self::Snake,
            "kebab-case" => Self::Kebab,
            _ => panic!("unknown case: {lit}"),
        }
    }

    fn apply(self, ident: &str) -> String {
        let sep = match self {
            Self::Lower => None,
            Self::Snake => Some('_'),
            Self::Kebab => Some('-'),
        };

        let mut output = String::with_capacity(ident.len() + 3);
        for (i, c) in ident.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                if let Some(s) = sep {
                    output.push(s);
                }
            }
            output.push(c.to_ascii_lowercase());
        }
        output
    }
}

struct Member {
    ident: String,
    rename: Option<Literal>,
}

impl Member {
    /// The string a member is displayed as and parsed from, already quoted.
    fn literal(&self, rename_all: Option<Case>) -> String {
        match (&self.rename, rename_all) {
            (Some(r), _) => r.to_string(),
            (None, Some(case)) => format!("\"{}\"", case.apply(&self.ident)),
            (None, None) => format!("\"{}\"", self.ident),
        }
    }
}

/// A `key = "value"` pair from inside `#[calc(...)]`.
struct Arg {
    key: String,
    value: Literal,
}

fn expect_punct(tokens: &mut impl Iterator<Item = TokenTree>, punct: char) {
    match tokens.next() {
        Some(TokenTree::Punct(p)) if p.as_char() == punct => (),
        _ => panic!("expected punctuation: '{punct}'"),
    }
}

/// Consumes all leading attributes and returns the arguments of our own.
fn parse_attributes<I: Iterator<Item = TokenTree>>(tokens: &mut Peekable<I>) -> Vec<Arg> {
    let mut args = Vec::new();

    while let Some(TokenTree::Punct(p)) = tokens.peek() {
        if p.as_char() != '#' {
            break;
        }
        tokens.next();

        let mut attribute = match tokens.next() {
            Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Bracket => {
                g.stream().into_iter()
            }
            _ => panic!("expected attribute list"),
        };

        match attribute.next() {
            Some(TokenTree::Ident(i)) if i.to_string() == ATTRIBUTE => (),
            Some(TokenTree::Ident(_)) => continue,
            _ => panic!("expected attribute identifier"),
        }

        let mut inner = match attribute.next() {
            Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Parenthesis => {
                g.stream().into_iter()
            }
            _ => panic!("expected attribute args"),
        };

        let key = match inner.next() {
            Some(TokenTree::Ident(i)) => i.to_string(),
            Some(t) => panic!("unexpected token: {t}"),
            None => continue,
        };
        expect_punct(&mut inner, '=');
        let value = match inner.next() {
            Some(TokenTree::Literal(l)) => l,
            _ => panic!("expected literal for `{key}`"),
        };

        args.push(Arg { key, value });
    }

    args
}

fn parse_enum(input: TokenStream) -> Enum {
    let mut tokens = input.into_iter().peekable();

    let mut rename_all = None;
    for arg in parse_attributes(&mut tokens) {
        match arg.key.as_str() {
            "rename_all" => {
                let lit = arg.value.to_string();
                rename_all = Some(Case::parse(lit.trim_matches('"')));
            }
            k => panic!("unknown enum attribute: `{k}`"),
        }
    }

    let mut vis = String::new();
    if let Some(TokenTree::Ident(i)) = tokens.peek() {
        if i.to_string() == "pub" {
            vis = "pub".into();
            tokens.next();
            // pub(crate) and friends
            if let Some(TokenTree::Group(g)) = tokens.peek() {
                vis.push_str(&g.to_string());
                tokens.next();
            }
        }
    }

    match tokens.next() {
        Some(TokenTree::Ident(i)) if i.to_string() == "enum" => (),
        Some(t) => panic!("expected enum keyword found {t}"),
        None => panic!("expected enum keyword"),
    }

    let name = match tokens.next() {
        Some(TokenTree::Ident(i)) => i.to_string(),
        _ => panic!("expected identifier"),
    };

    let mut body = match tokens.next() {
        Some(TokenTree::Group(g)) if g.delimiter() == Delimiter::Brace => {
            g.stream().into_iter().peekable()
        }
        _ => panic!("expected body"),
    };

    let mut members = Vec::new();
    while body.peek().is_some() {
        let mut rename = None;
        for arg in parse_attributes(&mut body) {
            match arg.key.as_str() {
                "rename" => rename = Some(arg.value),
                k => panic!("unknown variant attribute: `{k}`"),
            }
        }

        let ident = match body.next() {
            Some(TokenTree::Ident(i)) => i.to_string(),
            _ => panic!("expected enum variant name"),
        };
        members.push(Member { ident, rename });

        match body.next() {
            Some(TokenTree::Punct(p)) if p.as_char() == ',' => (),
            None => break,
            _ => panic!("only fieldless variants are supported"),
        }
    }

    Enum {
        vis,
        name,
        rename_all,
        members,
    }
}

#[proc_macro_derive(EnumDisplay, attributes(calc))]
pub fn derive_display(input: TokenStream) -> TokenStream {
    let Enum {
        name,
        rename_all,
        members,
        ..
    } = parse_enum(input);

    let mut output = format!(
        "impl std::fmt::Display for {name} {{
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {{
                match self {{"
    );
    for m in members.iter() {
        let lit = m.literal(rename_all);
        let _ = write!(output, "Self::{} => f.write_str({lit}),", m.ident);
    }
    output.push_str("}}}");

    output.parse().unwrap()
}

#[proc_macro_derive(EnumFromStr, attributes(calc))]
pub fn derive_from_str(input: TokenStream) -> TokenStream {
    let Enum {
        name,
        rename_all,
        members,
        ..
    } = parse_enum(input);

    let mut output = format!(
        "impl std::str::FromStr for {name} {{
            type Err = ();

            fn from_str(input: &str) -> Result<Self, Self::Err> {{
                match input {{"
    );
    for m in members.iter() {
        let lit = m.literal(rename_all);
        let _ = write!(output, "{lit} => Ok(Self::{}),", m.ident);
    }
    output.push_str("_ => Err(()),");
    output.push_str("}}}");

    output.parse().unwrap()
}

#[proc_macro_derive(EnumMembersArray, attributes(calc))]
pub fn derive_members_array(input: TokenStream) -> TokenStream {
    let Enum {
        vis, name, members, ..
    } = parse_enum(input);

    let count = members.len();
    let mut output = format!(
        "impl {name} {{
            {vis} const fn members() -> &'static [{name}; {count}] {{
                &["
    );
    for m in members.iter() {
        let _ = write!(output, "{name}::{},", m.ident);
    }
    output.push_str("]}}");

    output.parse().unwrap()
}
