use chumsky::{prelude::*, text::*};

use crate::tokens::*;

/// `Psr` is an abbreviation for "Parser". This is abbreviated because it is used in many places,
/// and we don't want it to conflict with Chumsky's `Parser` trait.
///
/// This is a utility type to reduce code duplication in types. It would be easier to write as
/// follows:
///
/// ```rs
/// pub type Psr<T> = Parser<char, T, Error = Simple<char>> + Clone + 'static;
/// ```
///
/// However, we can't do that without [trait aliases][1].
///
/// [1]: https://github.com/rust-lang/rust/issues/41517
pub trait Psr<T>: Parser<char, T, Error = Simple<char>> + Clone + 'static {}
impl<S, T> Psr<T> for S where S: Parser<char, T, Error = Simple<char>> + Clone + 'static {}

pub fn db_identifier() -> impl Psr<String> {
    ident().or(quoted(DB_IDENTIFIER_QUOTE))
}

pub fn quoted(quote: char) -> impl Psr<String> {
    just(quote)
        .ignore_then(
            filter(move |c| *c != STRING_ESCAPE_PREFIX && *c != quote)
                .or(escape(quote))
                .repeated(),
        )
        .then_ignore(just(quote))
        .collect::<String>()
}

pub fn escape(quote: char) -> impl Psr<char> {
    just(STRING_ESCAPE_PREFIX).ignore_then(just(STRING_ESCAPE_PREFIX).or(just(quote)))
}

/// An identifier-shaped word matched without regard to ASCII case
pub fn ci_keyword(word: &'static str) -> impl Psr<()> {
    ident().try_map(move |found: String, span| {
        if found.eq_ignore_ascii_case(word) {
            Ok(())
        } else {
            Err(Simple::custom(span, format!("expected `{word}`")))
        }
    })
}

pub fn required_whitespace() -> impl Psr<()> {
    filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignored()
}
