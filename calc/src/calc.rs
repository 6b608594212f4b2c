use log::{debug, warn};
use unicode_width::UnicodeWidthStr;

use crate::{group, lex, tree, Error, Item, Node, Token, Val};

pub const DEFAULT_PROMPT: &str = "Type an expression: ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Nothing has been computed for the current input.
    Stale,
    /// The result of the current input is cached.
    Evaluated,
}

/// Evaluates one input at a time and caches every stage of the pipeline until the input changes.
#[derive(Clone, Debug)]
pub struct Calc {
    prompt: String,
    input: String,
    state: State,
    tokens: Vec<Token>,
    items: Vec<Item>,
    tree: Option<Node>,
    value: Option<Val>,
    arith_error: Option<Error>,
}

impl Default for Calc {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT)
    }
}

impl Calc {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::with_input(prompt, "")
    }

    pub fn with_input(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            input: input.into(),
            state: State::Stale,
            tokens: Vec::new(),
            items: Vec::new(),
            tree: None,
            value: None,
            arith_error: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input, the cache is only dropped if it actually differs.
    pub fn set_input(&mut self, input: impl Into<String>) {
        let input = input.into();
        if input != self.input {
            self.input = input;
            self.clear();
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// The number of terminal columns the prompt occupies.
    pub fn prompt_width(&self) -> usize {
        self.prompt.width()
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn tree(&self) -> Option<&Node> {
        self.tree.as_ref()
    }

    /// The arithmetic error the last evaluation ran into, if any.
    pub fn arith_error(&self) -> Option<&Error> {
        self.arith_error.as_ref()
    }

    /// Returns the value of the current input, computing it if necessary.
    ///
    /// Lexical and structural errors are returned and nothing is cached. Arithmetic errors don't
    /// fail this call: they are kept in [`Self::arith_error`] and the input is considered
    /// evaluated without a value.
    pub fn result(&mut self) -> crate::Result<Option<Val>> {
        if self.state == State::Evaluated {
            debug!("cached result for '{}'", self.input);
            return Ok(self.value);
        }
        self.clear();

        debug!("evaluating '{}'", self.input);
        let tokens = lex::lex(&self.input)?;
        let items = group::group(tokens.clone())?;
        let tree = tree::build(items.clone())?;

        let (value, arith_error) = match tree.as_ref().map(Node::eval) {
            Some(Ok(v)) => (Some(v), None),
            Some(Err(e)) => {
                warn!("{e} at {}", e.pos() + 1);
                (None, Some(e))
            }
            None => (None, None),
        };

        self.tokens = tokens;
        self.items = items;
        self.tree = tree;
        self.value = value;
        self.arith_error = arith_error;
        self.state = State::Evaluated;

        Ok(self.value)
    }

    fn clear(&mut self) {
        self.state = State::Stale;
        self.tokens.clear();
        self.items.clear();
        self.tree = None;
        self.value = None;
        self.arith_error = None;
    }
}
