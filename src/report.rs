//! Console output for the two snippets.
//!
//! Only record payload lines go to the writer. Section headings and the JSON
//! form of each record are diagnostics and go through `log` (stderr).

use std::io::Write;

use colored::{ColoredString, Colorize};
use itertools::Itertools;

use crate::broadcast::Greeter;
use crate::error::Result;
use crate::projection::{color_price_query, sample_products, ColorPrice};
use crate::record::{fruit_basket, greeting, to_json, AmountMessage, Fruit};

pub fn heading(title: &str) -> ColoredString {
    format!("== {title} ==").bold().cyan()
}

/// Field names joined for diagnostics, e.g. `Amount, Message`.
pub fn field_list(fields: &[&str]) -> String {
    fields.iter().join(", ")
}

pub fn amount_message_lines(v: &AmountMessage) -> [String; 2] {
    [v.amount().to_string(), v.message().clone()]
}

pub fn fruit_line(v: &Fruit) -> String {
    format!("{}  {}", v.name(), v.diam())
}

pub fn color_price_line(v: &ColorPrice) -> String {
    format!("Color={}, Price={}", v.color(), v.price())
}

/// Body of the `events` binary.
pub fn write_events(out: &mut impl Write) -> Result<()> {
    log::info!("{}", heading("Events"));

    let greeter = Greeter::new();
    log::debug!("greeter ready: {greeter:?}");

    let result = greeter.try_raise("the one")?;
    writeln!(out, "{result}")?;
    Ok(())
}

/// Body of the `anonymous_types` binary.
pub fn write_anonymous_types(out: &mut impl Write) -> Result<()> {
    log::info!("{}", heading("Single record"));
    let v = greeting();
    log::debug!(
        "{{{}}} = {}",
        field_list(AmountMessage::FIELDS),
        to_json(&v)?
    );
    for line in amount_message_lines(&v) {
        writeln!(out, "{line}")?;
    }

    log::info!("{}", heading("Array of records"));
    log::debug!("{{{}}}", field_list(Fruit::FIELDS));
    for v in fruit_basket() {
        log::debug!("{}", to_json(&v)?);
        writeln!(out, "{}", fruit_line(&v))?;
    }

    log::info!("{}", heading("Projection"));
    let products = sample_products();
    log::debug!("source: {}", to_json(&products)?);
    let query = color_price_query(&products);
    log::debug!(
        "selected {{{}}} from {} product(s)",
        field_list(ColorPrice::FIELDS),
        products.len()
    );
    for v in &query {
        writeln!(out, "{}", color_price_line(v))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(write: impl Fn(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_events_output_is_exact() {
        assert_eq!(captured(|out| write_events(out)), "hello, the one\n");
    }

    #[test]
    fn test_anonymous_types_output_is_exact() {
        let expected = "101\n\
                        Hello\n\
                        apple  4\n\
                        grape  1\n\
                        Color=red, Price=1\n\
                        Color=red, Price=1\n\
                        Color=red, Price=1\n";

        assert_eq!(captured(|out| write_anonymous_types(out)), expected);
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_surfaces_as_io_error() {
        let err = write_events(&mut Closed).unwrap_err();
        assert!(matches!(err, crate::error::SnippetError::Io(_)));
    }

    #[test]
    fn test_field_list() {
        assert_eq!(field_list(ColorPrice::FIELDS), "Color, Price");
        assert_eq!(field_list(&[]), "");
    }

    #[test]
    fn test_heading_keeps_title_text() {
        colored::control::set_override(false);
        let text = heading("Fruit").to_string();
        colored::control::unset_override();

        assert_eq!(text, "== Fruit ==");
    }
}
