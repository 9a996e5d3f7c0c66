//! Expression parser using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ParseError;
use crate::support::ast::{SupportedOn, VersionRange};
use crate::support::lexer::{self, Token};

/// Parse a single supported-on expression like `chrome.win:8-`.
pub fn parse(input: &str) -> Result<SupportedOn, Vec<ParseError>> {
    let len = input.len();

    let tokens = lexer::lex(input).map_err(|span| {
        vec![ParseError::Syntax {
            span,
            message: "unrecognized input in supported-on expression".to_string(),
            expected: vec![],
        }]
    })?;

    // Turn the token list into a stream that chumsky can use
    let token_iter = tokens.into_iter().map(|(tok, span)| (tok, span.into()));
    let token_stream =
        Stream::from_iter(token_iter).map((len..len).into(), |(t, s): (_, _)| (t, s));

    expression_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn expression_parser<'a, I>() -> impl Parser<'a, I, SupportedOn, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let ident = select! {
        Token::Ident(s) => s,
    };

    let number = select! {
        Token::Number(n) => n,
    };

    // versionRange := number? '-' number?
    let range = number
        .clone()
        .or_not()
        .then_ignore(just(Token::Dash))
        .then(number.or_not())
        .map(|(since, until)| VersionRange { since, until });

    // expression := product '.' platform ':' versionRange
    ident
        .clone()
        .then_ignore(just(Token::Dot))
        .then(ident)
        .then_ignore(just(Token::Colon))
        .then(range)
        .then_ignore(end())
        .map(|((product, platform), range)| SupportedOn {
            product,
            platform,
            range,
        })
}
