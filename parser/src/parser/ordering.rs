use chumsky::{
    prelude::*,
    text::{ident, TextParser},
};

use crate::ast::*;
use crate::tokens::*;

use super::utils::*;

pub fn ordering() -> impl Psr<Vec<Directive>> {
    directive()
        .padded()
        .separated_by(just(ORDERING_SEPARATOR))
        .allow_trailing()
        .padded()
        .then_ignore(end())
}

fn directive() -> impl Psr<Directive> {
    choice((
        random().to(Directive::Random),
        sort_target()
            .then(direction().or_not())
            .map(|(target, direction)| Directive::Sort {
                target,
                direction: direction.unwrap_or_default(),
            }),
    ))
}

fn random() -> impl Psr<()> {
    let name = choice((ci_keyword(RANDOM_FUNCTIONS[0]), ci_keyword(RANDOM_FUNCTIONS[1])));
    name.then_ignore(just(CALL_OPEN).padded())
        .then_ignore(just(CALL_CLOSE))
}

fn sort_target() -> impl Psr<SortTarget> {
    let raw = quoted(RAW_EXPRESSION_QUOTE).map(SortTarget::Raw);
    let column = db_identifier()
        .then(just(PATH_SEPARATOR).ignore_then(db_identifier()).or_not())
        .map(|(first, second)| match second {
            Some(name) => SortTarget::Column {
                table: Some(first),
                name,
            },
            None => SortTarget::Column {
                table: None,
                name: first,
            },
        });
    raw.or(column)
}

fn direction() -> impl Psr<SortDirection> {
    required_whitespace().ignore_then(ident().try_map(|word: String, span| {
        if word.eq_ignore_ascii_case(KEYWORD_ASC) {
            Ok(SortDirection::Asc)
        } else if word.eq_ignore_ascii_case(KEYWORD_DESC) {
            Ok(SortDirection::Desc)
        } else {
            Err(Simple::custom(
                span,
                format!("expected `{KEYWORD_ASC}` or `{KEYWORD_DESC}`, found `{word}`"),
            ))
        }
    }))
}
