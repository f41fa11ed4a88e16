//! Recursive descent selector parser.

use super::tokenizer::{tokenize, SpannedToken, Token};
use super::{Combinator, CompoundSelector, Selector, SelectorComponent, SelectorList};

/// Errors from selector parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("unexpected token at byte {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of selector: {0}")]
    UnexpectedEof(String),
}

/// Parse a comma-separated selector list.
pub fn parse_selector_list(input: &str) -> Result<SelectorList, SelectorError> {
    let tokens = tokenize(input).map_err(|position| SelectorError::UnexpectedToken {
        position,
        message: format!("unrecognized character {:?}", input[position..].chars().next()),
    })?;
    let mut parser = Parser { tokens, cursor: 0 };

    let mut selectors = vec![parser.parse_selector()?];
    while parser.peek().is_some_and(|t| t.token == Token::Comma) {
        parser.advance();
        selectors.push(parser.parse_selector()?);
    }
    if let Some(tok) = parser.peek() {
        return Err(SelectorError::UnexpectedToken {
            position: tok.start,
            message: format!("unexpected '{}' after selector", tok.text),
        });
    }
    Ok(SelectorList { selectors })
}

/// Recursive descent parser state.
struct Parser {
    tokens: Vec<SpannedToken>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.cursor)
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let tok = self.tokens.get(self.cursor).cloned();
        if tok.is_some() {
            self.cursor += 1;
        }
        tok
    }

    /// Whether the current token starts exactly where the previous one ended.
    fn is_adjacent(&self) -> bool {
        let Some(prev) = self.cursor.checked_sub(1).and_then(|i| self.tokens.get(i)) else {
            return false;
        };
        self.peek().is_some_and(|curr| curr.start == prev.end)
    }

    fn expect(&mut self, expected: Token, what: &str) -> Result<SpannedToken, SelectorError> {
        match self.advance() {
            Some(tok) if tok.token == expected => Ok(tok),
            Some(tok) => Err(SelectorError::UnexpectedToken {
                position: tok.start,
                message: format!("expected {what}, got '{}'", tok.text),
            }),
            None => Err(SelectorError::UnexpectedEof(format!("expected {what}"))),
        }
    }

    /// `compound (combinator compound)*`
    fn parse_selector(&mut self) -> Result<Selector, SelectorError> {
        let head = self.parse_compound()?;
        let mut tail = Vec::new();
        loop {
            match self.peek().map(|t| &t.token) {
                Some(Token::GreaterThan) => {
                    self.advance();
                    tail.push((Combinator::Child, self.parse_compound()?));
                }
                // A selector-starting token after a gap is a descendant step;
                // adjacent ones were already consumed by parse_compound.
                Some(
                    Token::Ident | Token::Hash | Token::Dot | Token::Star | Token::BracketOpen,
                ) => {
                    tail.push((Combinator::Descendant, self.parse_compound()?));
                }
                _ => break,
            }
        }
        Ok(Selector { head, tail })
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut compound = CompoundSelector::default();

        match self.peek().map(|t| &t.token) {
            Some(Token::Ident) => {
                if let Some(tok) = self.advance() {
                    compound
                        .components
                        .push(SelectorComponent::Type(tok.text.to_ascii_lowercase()));
                }
            }
            Some(Token::Star) => {
                self.advance();
                compound.components.push(SelectorComponent::Universal);
            }
            Some(Token::Hash | Token::Dot | Token::BracketOpen) => {
                compound.components.push(self.parse_qualifier()?);
            }
            Some(_) => {
                let tok = self.advance();
                return Err(SelectorError::UnexpectedToken {
                    position: tok.as_ref().map_or(0, |t| t.start),
                    message: format!(
                        "expected selector, got '{}'",
                        tok.map(|t| t.text).unwrap_or_default()
                    ),
                });
            }
            None => return Err(SelectorError::UnexpectedEof("expected selector".into())),
        }

        while self.is_adjacent()
            && matches!(
                self.peek().map(|t| &t.token),
                Some(Token::Hash | Token::Dot | Token::BracketOpen)
            )
        {
            compound.components.push(self.parse_qualifier()?);
        }

        Ok(compound)
    }

    /// `#id`, `.class`, `[name]` or `[name=value]`.
    fn parse_qualifier(&mut self) -> Result<SelectorComponent, SelectorError> {
        let Some(tok) = self.advance() else {
            return Err(SelectorError::UnexpectedEof("expected selector".into()));
        };
        match tok.token {
            Token::Hash => {
                let name = self.expect(Token::Ident, "id name after '#'")?;
                Ok(SelectorComponent::Id(name.text))
            }
            Token::Dot => {
                let name = self.expect(Token::Ident, "class name after '.'")?;
                Ok(SelectorComponent::Class(name.text))
            }
            Token::BracketOpen => self.parse_attribute(),
            _ => Err(SelectorError::UnexpectedToken {
                position: tok.start,
                message: format!("expected '#', '.' or '[', got '{}'", tok.text),
            }),
        }
    }

    fn parse_attribute(&mut self) -> Result<SelectorComponent, SelectorError> {
        let name = self.expect(Token::Ident, "attribute name")?.text;
        let value = match self.peek().map(|t| &t.token) {
            Some(Token::Equals) => {
                self.advance();
                let tok = self.advance().ok_or_else(|| {
                    SelectorError::UnexpectedEof("expected attribute value".into())
                })?;
                let value = match tok.token {
                    Token::Ident => tok.text,
                    Token::StringLiteral | Token::StringLiteralSingle => {
                        tok.text[1..tok.text.len() - 1].to_owned()
                    }
                    _ => {
                        return Err(SelectorError::UnexpectedToken {
                            position: tok.start,
                            message: format!("expected attribute value, got '{}'", tok.text),
                        })
                    }
                };
                Some(value)
            }
            _ => None,
        };
        self.expect(Token::BracketClose, "']'")?;
        Ok(SelectorComponent::Attribute { name, value })
    }
}
