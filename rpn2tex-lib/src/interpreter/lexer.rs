use crate::interpreter::error::LexError;
use crate::interpreter::token::{Token, TokenKind};
use itertools::Itertools;
use std::iter::Peekable;
use std::str::Chars;

/// Splits the given RPN source text into tokens, always ending with an end-of-input token.
///
/// # Arguments
///
/// * `source`: The RPN expression, with tokens separated by whitespace.
///
/// returns: The tokens of the expression, or the first character that could not be lexed.
///
/// # Examples
///
/// ```
/// use rpn2tex::interpreter::lexer::tokenize;
/// use rpn2tex::interpreter::token::TokenKind;
///
/// let tokens = tokenize("5 -3 -").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
///
/// assert_eq!(kinds, [TokenKind::Number, TokenKind::Number, TokenKind::Minus, TokenKind::Eof]);
/// assert_eq!(tokens[1].text, "-3");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            chars: source.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(&character) = self.chars.peek() {
            let (line, column) = (self.line, self.column);
            match character {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '+' | '*' | '/' => {
                    self.advance();
                    let kind = match character {
                        '+' => TokenKind::Plus,
                        '*' => TokenKind::Star,
                        _ => TokenKind::Slash,
                    };
                    tokens.push(Token::new(kind, character.to_string(), line, column));
                }
                '-' => {
                    self.advance();
                    // A minus directly followed by a digit is a sign, not subtraction.
                    if self.peek_is_digit() {
                        let mut text = String::from('-');
                        self.scan_number(&mut text);
                        tokens.push(Token::new_number(text, line, column));
                    } else {
                        tokens.push(Token::new(TokenKind::Minus, "-", line, column));
                    }
                }
                digit if digit.is_ascii_digit() => {
                    let mut text = String::new();
                    self.scan_number(&mut text);
                    tokens.push(Token::new_number(text, line, column));
                }
                unexpected => {
                    return Err(LexError::UnexpectedChar {
                        character: unexpected,
                        line,
                        column,
                    })
                }
            }
        }

        tokens.push(Token::new_eof(self.line, self.column));
        Ok(tokens)
    }

    fn advance(&mut self) -> Option<char> {
        let character = self.chars.next()?;
        if character == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(character)
    }

    fn peek_is_digit(&mut self) -> bool {
        matches!(self.chars.peek(), Some(character) if character.is_ascii_digit())
    }

    /// Appends an integer part and, if a `.` follows, the fractional part to `text`.
    fn scan_number(&mut self, text: &mut String) {
        self.scan_digits(text);
        if self.chars.peek() == Some(&'.') {
            self.advance();
            text.push('.');
            self.scan_digits(text);
        }
    }

    fn scan_digits(&mut self, text: &mut String) {
        let digits: String = self
            .chars
            .peeking_take_while(|character| character.is_ascii_digit())
            .collect();
        // Digits never contain a newline, so only the column moves.
        self.column += digits.len();
        text.push_str(&digits);
    }
}
