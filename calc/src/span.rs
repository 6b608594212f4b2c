/// Range of character indices into the source string
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// inclusive
    pub start: usize,
    /// exclusive
    pub end: usize,
}

impl Span {
    pub const fn of(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn pos(pos: usize) -> Self {
        Self::of(pos, pos + 1)
    }

    pub const fn across(a: Self, b: Self) -> Self {
        Self::of(a.start, b.end)
    }

    pub const fn between(a: Self, b: Self) -> Self {
        Self::of(a.end, b.start)
    }

    /// The last character of this span.
    pub const fn last(&self) -> Self {
        Self::pos(self.end.saturating_sub(1))
    }

    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1-based column of the first character, as shown to users.
    pub const fn col(&self) -> usize {
        self.start + 1
    }

    /// Slices `input` by this span's character indices.
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        let mut indices = input.char_indices().map(|(i, _)| i).chain([input.len()]);
        let start = indices.nth(self.start).unwrap_or(input.len());
        let end = match self.len() {
            0 => start,
            n => indices.nth(n - 1).unwrap_or(input.len()),
        };
        &input[start..end]
    }
}
