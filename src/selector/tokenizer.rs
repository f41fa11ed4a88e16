//! logos-based selector tokenizer.
//!
//! Whitespace is skipped; the parser recovers descendant combinators from the
//! byte gaps between token spans.

use logos::Logos;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Identifier: tag names, ids, classes, attribute names and bare values.
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    /// `#`
    #[token("#")]
    Hash,

    /// `.`
    #[token(".")]
    Dot,

    /// `*`
    #[token("*")]
    Star,

    /// `>`
    #[token(">")]
    GreaterThan,

    /// `,`
    #[token(",")]
    Comma,

    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// `=`
    #[token("=")]
    Equals,
}

/// A token with its source text and byte span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Tokenize a selector string.
///
/// Returns the byte offset of the first character that fails to lex.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, usize> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok(SpannedToken {
                token,
                text: input[span.clone()].to_owned(),
                start: span.start,
                end: span.end,
            }),
            Err(()) => Err(span.start),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn punctuation() {
        assert_eq!(
            tokens("# . * > , [ ] ="),
            vec![
                Token::Hash,
                Token::Dot,
                Token::Star,
                Token::GreaterThan,
                Token::Comma,
                Token::BracketOpen,
                Token::BracketClose,
                Token::Equals,
            ]
        );
    }

    #[test]
    fn id_selector() {
        let toks = tokenize("#root").unwrap();
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[0].token, Token::Hash);
        assert_eq!(toks[1].token, Token::Ident);
        assert_eq!(toks[1].text, "root");
        assert_eq!(toks[0].end, toks[1].start);
    }

    #[test]
    fn hyphenated_idents() {
        let toks = tokenize("user-card.is-active").unwrap();
        let texts: Vec<_> = toks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["user-card", ".", "is-active"]);
    }

    #[test]
    fn attribute_with_strings() {
        assert_eq!(
            tokens(r#"[target="_blank"] [rel='noopener']"#),
            vec![
                Token::BracketOpen,
                Token::Ident,
                Token::Equals,
                Token::StringLiteral,
                Token::BracketClose,
                Token::BracketOpen,
                Token::Ident,
                Token::Equals,
                Token::StringLiteralSingle,
                Token::BracketClose,
            ]
        );
    }

    #[test]
    fn whitespace_leaves_span_gap() {
        let toks = tokenize("nav  a").unwrap();
        assert_eq!(toks[0].end, 3);
        assert_eq!(toks[1].start, 5);
    }

    #[test]
    fn lex_error_reports_offset() {
        assert_eq!(tokenize("div ~ p"), Err(4));
    }
}
