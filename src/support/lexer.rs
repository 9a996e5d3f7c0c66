//! Lexer for supported-on expressions using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("-")]
    Dash,

    // Product and platform names
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u32>().ok())]
    Number(u32),
}

/// Lex an expression, failing on the first unrecognized input. Whitespace
/// is not part of the expression syntax and is rejected like any other
/// stray character.
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, Span> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => return Err(span),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_expression() {
        let tokens: Vec<_> = lex("chrome.win:8-")
            .expect("should lex")
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("chrome".to_string()),
                Token::Dot,
                Token::Ident("win".to_string()),
                Token::Colon,
                Token::Number(8),
                Token::Dash,
            ]
        );
    }

    #[test]
    fn test_bounded_range() {
        let tokens: Vec<_> = lex("8-10")
            .expect("should lex")
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(
            tokens,
            vec![Token::Number(8), Token::Dash, Token::Number(10)]
        );
    }

    #[test]
    fn test_stray_character_rejected() {
        assert!(lex("chrome.win:8-!").is_err());
        assert!(lex("chrome win:8-").is_err());
    }
}
