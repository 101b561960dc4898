use std::collections::VecDeque;

use log::trace;
use logos::Logos;

use crate::error::ParseError;

/// Result type used by the scanner.
pub type ParseResult<T> = Result<T, ParseError>;

/// The raw lexemes recognized in an expression.
///
/// Logos only splits the input; [`Scanner`] turns lexemes into [`Token`]s and
/// attaches the postfix operators that follow an identifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// A run of decimal digits. No sign, no decimal point.
    #[regex(r"[0-9]+")]
    Digits,
    /// A letter followed by letters, digits and underscores.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Word,
}

/// The kind of a lexical [`Token`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `=`. Only produced when an expression fragment still contains `=`;
    /// the statement layer normally splits it off first.
    Assign,
    /// `+=`. Assignment operators are found by the statement layer, so the
    /// scanner never produces this kind.
    PlusAssign,
    /// `-=`. Never produced by the scanner, see [`TokenKind::PlusAssign`].
    MinusAssign,
    /// `++` in front of an identifier.
    PreInc,
    /// `++` directly after an identifier.
    PostInc,
    /// `--` in front of an identifier.
    PreDec,
    /// `--` directly after an identifier.
    PostDec,
    /// Integer literal, such as `42`.
    Number,
    /// Variable name, such as `counter_1`.
    Identifier,
    /// End of input.
    End,
}

/// A minimal meaningful unit of an expression: its kind and the exact text
/// it was scanned from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a token of `kind` with literal `text`.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self { kind,
               text: text.into() }
    }

    /// The end of input token. Its text is empty.
    #[must_use]
    pub fn end() -> Self {
        Self::new(TokenKind::End, "")
    }

    /// Returns the kind of the token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the literal text of the token.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Checks a name against the identifier grammar.
///
/// A name starts with an ASCII letter, continues with letters, digits or
/// underscores, and does not end with an underscore.
///
/// # Example
/// ```
/// use varcalc::interpreter::lexer::is_valid_identifier;
///
/// assert!(is_valid_identifier("counter_1"));
/// assert!(!is_valid_identifier("123abc"));
/// assert!(!is_valid_identifier("total_"));
/// assert!(!is_valid_identifier(""));
/// ```
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    && !name.ends_with('_')
}

/// Single token lookahead cursor over an expression.
///
/// Exactly one token is current at any time. Postfix `++`/`--` are found
/// while scanning the identifier they follow and wait in a pending queue until
/// the identifier has been consumed; the queue is drained before the input is
/// scanned again.
pub struct Scanner<'src> {
    lexer:   logos::Lexer<'src, Lexeme>,
    pending: VecDeque<Token>,
    current: Token,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner over `source` and loads the first token, so that
    /// [`Scanner::peek`] is valid before any [`Scanner::advance`].
    ///
    /// # Errors
    /// Fails if the first token cannot be scanned.
    ///
    /// # Example
    /// ```
    /// use varcalc::interpreter::lexer::{Scanner, TokenKind};
    ///
    /// let mut scanner = Scanner::new("i++ + 5").unwrap();
    /// assert_eq!(scanner.peek().kind(), TokenKind::Identifier);
    ///
    /// let token = scanner.advance().unwrap();
    /// assert_eq!(token.text(), "i");
    /// assert_eq!(scanner.peek().kind(), TokenKind::PostInc);
    /// ```
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut scanner = Self { lexer:   Lexeme::lexer(source),
                                 pending: VecDeque::new(),
                                 current: Token::end(), };
        scanner.current = scanner.next_token()?;
        Ok(scanner)
    }

    /// Returns the current token without consuming it.
    #[must_use]
    pub const fn peek(&self) -> &Token {
        &self.current
    }

    /// Consumes the current token and loads the next one.
    ///
    /// Once the input is exhausted the scanner keeps producing
    /// [`TokenKind::End`].
    ///
    /// # Returns
    /// The token that was current before the call.
    ///
    /// # Errors
    /// Fails if the next token cannot be scanned. The current token is left
    /// in place in that case.
    pub fn advance(&mut self) -> ParseResult<Token> {
        let next = self.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        let Some(lexeme) = self.lexer.next() else {
            return Ok(Token::end());
        };
        let text = self.lexer.slice().to_owned();
        let lexeme = lexeme.map_err(|()| {
                               ParseError::UnexpectedCharacter { character:
                                                                     text.chars()
                                                                         .next()
                                                                         .unwrap_or_default() }
                           })?;

        let kind = match lexeme {
            Lexeme::PlusPlus => TokenKind::PreInc,
            Lexeme::MinusMinus => TokenKind::PreDec,
            Lexeme::Plus => TokenKind::Plus,
            Lexeme::Minus => TokenKind::Minus,
            Lexeme::Star => TokenKind::Mul,
            Lexeme::Slash => TokenKind::Div,
            Lexeme::Equals => TokenKind::Assign,
            Lexeme::Digits => TokenKind::Number,
            Lexeme::Word => {
                if text.ends_with('_') {
                    return Err(ParseError::InvalidVariableName { name: text });
                }
                self.scan_postfix();
                TokenKind::Identifier
            },
        };

        let token = Token::new(kind, text);
        trace!("scanned {token:?}");
        Ok(token)
    }

    /// Queues the `++`/`--` that immediately follow an identifier.
    ///
    /// The operators must touch the identifier; `i ++` scans as `i` followed
    /// by a prefix `++`.
    fn scan_postfix(&mut self) {
        for (suffix, kind) in [("++", TokenKind::PostInc), ("--", TokenKind::PostDec)] {
            if self.lexer.remainder().starts_with(suffix) {
                self.lexer.bump(suffix.len());
                self.pending.push_back(Token::new(kind, suffix));
            }
        }
    }
}
