use std::fmt::{self, Write};

use calc::{Span, UserFacing, Val};

pub fn write_result(
    f: &mut impl fmt::Write,
    value: Option<Val>,
    errors: &[&calc::Error],
) -> fmt::Result {
    write!(f, "{{\"value\":")?;
    match value {
        Some(Val::Int(i)) => write!(f, "{i}")?,
        Some(Val::Float(v)) if v.is_finite() => write!(f, "{v:?}")?,
        _ => f.write_str("null")?,
    }
    write!(f, ",\"errors\":[")?;
    if let Some((first, others)) = errors.split_first() {
        write_userfacing(f, *first)?;
        for e in others {
            f.write_char(',')?;
            write_userfacing(f, *e)?;
        }
    }
    write!(f, "]}}")
}

fn write_userfacing(f: &mut impl fmt::Write, w: &impl UserFacing) -> fmt::Result {
    write!(f, "{{\"spans\":[")?;
    let spans = w.spans();
    if let Some((first, others)) = spans.split_first() {
        write_span(f, first)?;
        for s in others {
            f.write_char(',')?;
            write_span(f, s)?;
        }
    }
    write!(f, "],\"desc\":\"")?;
    write_escaped(f, &w.description())?;
    write!(f, "\"}}")
}

fn write_span(f: &mut impl fmt::Write, s: &Span) -> fmt::Result {
    write!(f, "{{\"start\":{},\"end\":{}}}", s.start, s.end)
}

fn write_escaped(f: &mut impl fmt::Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}
