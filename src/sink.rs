//! The abstract destination for rendered output.
//!
//! The writer never talks to files or streams directly; it emits
//! primitive tokens into a [`Sink`], and the sink decides where the bytes
//! go. This is the writer's only boundary. Buffering and flush policy,
//! and what happens when an underlying destination fails, belong to the
//! sink implementation, which is why the token methods are infallible
//! from the writer's point of view.

/// A destination that accepts rendered tokens in call order.
///
/// Implementations must append each token to the underlying destination
/// in the order the methods are called.
///
/// # Examples
///
/// `String` is the built-in in-memory sink:
///
/// ```rust
/// use kdl_tree::Sink;
///
/// let mut out = String::new();
/// out.write_text("answer ");
/// out.write_int(42);
/// out.write_char('\n');
/// assert_eq!(out, "answer 42\n");
/// ```
pub trait Sink {
    /// Appends a UTF-8 text fragment.
    fn write_text(&mut self, text: &str);

    /// Appends a single character.
    fn write_char(&mut self, ch: char);

    /// Appends a 64-bit signed integer rendered in base 10.
    fn write_int(&mut self, value: i64);

    /// Appends a 64-bit float rendered in a locale-independent decimal
    /// form.
    fn write_float(&mut self, value: f64);
}

impl Sink for String {
    fn write_text(&mut self, text: &str) {
        self.push_str(text);
    }

    fn write_char(&mut self, ch: char) {
        self.push(ch);
    }

    fn write_int(&mut self, value: i64) {
        use std::fmt::Write as _;
        // write! to a String cannot fail
        let _ = write!(self, "{}", value);
    }

    fn write_float(&mut self, value: f64) {
        use std::fmt::Write as _;
        let _ = write!(self, "{}", value);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write_text(&mut self, text: &str) {
        (**self).write_text(text);
    }

    fn write_char(&mut self, ch: char) {
        (**self).write_char(ch);
    }

    fn write_int(&mut self, value: i64) {
        (**self).write_int(value);
    }

    fn write_float(&mut self, value: f64) {
        (**self).write_float(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_appends_in_call_order() {
        let mut out = String::new();
        out.write_char('[');
        out.write_int(-7);
        out.write_text(", ");
        out.write_float(2.5);
        out.write_char(']');
        assert_eq!(out, "[-7, 2.5]");
    }

    #[test]
    fn test_forwarding_through_mut_reference() {
        fn fill<S: Sink>(mut sink: S) {
            sink.write_text("ok");
        }

        let mut out = String::new();
        fill(&mut out);
        assert_eq!(out, "ok");
    }
}
