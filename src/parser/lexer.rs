//! Lexer (tokenizer) for TyC source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Tokens keep their exact source lexeme: string escapes are copied
//! through verbatim and numeric literals are not normalized, so `00123`
//! survives as written.
//!
//! Tokens are produced one at a time through [`Lexer::next_token`]; the
//! parser pulls them on demand so the first failure in source order wins,
//! whether it is lexical or syntactic.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::position::LineIndex;

/// All token kinds produced by the lexer.
///
/// The kind is a bare tag; the matched text lives in [`Token::lexeme`].
/// `Display` yields the serialization tag used by the debug token rendering
/// (`AUTO`, `ID`, `INTLIT`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Int,
    Float,
    String,
    Auto,
    Void,
    Struct,
    If,
    Else,
    For,
    While,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Return,

    // Literals and identifiers
    IntLit,
    FloatLit,
    StringLit,
    Ident,

    // Operators
    Plus,   // +
    Minus,  // -
    Mul,    // *
    Div,    // /
    Mod,    // %
    Assign, // =
    Eq,     // ==
    Neq,    // !=
    Lt,     // <
    Le,     // <=
    Gt,     // >
    Ge,     // >=
    And,    // &&
    Or,     // ||
    Not,    // !
    Inc,    // ++
    Dec,    // --
    Dot,    // .

    // Separators
    LParen, // (
    RParen, // )
    LBrace, // {
    RBrace, // }
    Semi,   // ;
    Comma,  // ,
    Colon,  // :

    // End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Auto => "AUTO",
            TokenKind::Void => "VOID",
            TokenKind::Struct => "STRUCT",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Switch => "SWITCH",
            TokenKind::Case => "CASE",
            TokenKind::Default => "DEFAULT",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Return => "RETURN",
            TokenKind::IntLit => "INTLIT",
            TokenKind::FloatLit => "FLOATLIT",
            TokenKind::StringLit => "STRINGLIT",
            TokenKind::Ident => "ID",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Lt => "LT",
            TokenKind::Le => "LE",
            TokenKind::Gt => "GT",
            TokenKind::Ge => "GE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Inc => "INC",
            TokenKind::Dec => "DEC",
            TokenKind::Dot => "DOT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semi => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Eof => "EOF",
        };
        f.write_str(tag)
    }
}

/// Keyword lookup table, matched case-sensitively against identifier runs.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    [
        ("int", TokenKind::Int),
        ("float", TokenKind::Float),
        ("string", TokenKind::String),
        ("auto", TokenKind::Auto),
        ("void", TokenKind::Void),
        ("struct", TokenKind::Struct),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("switch", TokenKind::Switch),
        ("case", TokenKind::Case),
        ("default", TokenKind::Default),
        ("break", TokenKind::Break),
        ("continue", TokenKind::Continue),
        ("return", TokenKind::Return),
    ]
    .into_iter()
    .collect()
});

/// A token: kind, exact lexeme, and source position of its first character.
///
/// Tokens are immutable values created once by the lexer; the end-of-file
/// token carries an empty lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based line number
    pub line: usize,
    /// 0-based column (character offset within the line)
    pub col: usize,
}

impl Token {
    /// Position of the token's first character.
    pub fn position(&self) -> super::ast::Position {
        super::ast::Position::new(self.line, self.col)
    }
}

/// Lexical error kinds. `UnterminatedString` is raised when end of input is
/// reached inside a string literal; `UnexpectedChar` covers characters that
/// can start no token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    UnterminatedString,
    UnexpectedChar,
}

impl LexErrorKind {
    fn name(&self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "UncloseString",
            LexErrorKind::UnexpectedChar => "ErrorToken",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LexErrorKind::UnterminatedString => "Unclosed String",
            LexErrorKind::UnexpectedChar => "Error Token",
        }
    }
}

/// Lexer error type. `text` is the source text at the failure: the partial
/// string body for an unclosed string, the offending character otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub text: String,
    pub line: usize,
    pub col: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lexererr.{}: {}: {}",
            self.kind.name(),
            self.kind.label(),
            self.text
        )
    }
}

impl std::error::Error for LexError {}

/// Streaming lexer for TyC source code.
pub struct Lexer {
    src: Vec<char>,
    pos: usize,
    index: LineIndex,
}

impl Lexer {
    /// Create a new lexer over the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            src: input.chars().collect(),
            pos: 0,
            index: LineIndex::new(input),
        }
    }

    /// Tokenize the entire input, ending with the `Eof` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Produce the next token. Once the input is exhausted this keeps
    /// returning `Eof` tokens.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();

        let start = self.pos;
        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Ok(self.token_at(TokenKind::Eof, String::new(), start)),
        };

        match ch {
            '"' => self.string_literal(),
            '0'..='9' => Ok(self.number_literal()),
            // A dot directly followed by a digit starts a float (`.5`)
            '.' if self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) => {
                Ok(self.number_literal())
            }
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword()),
            _ => self.operator_or_separator(ch),
        }
    }

    /// Operators and separators, two-character forms matched first.
    fn operator_or_separator(&mut self, ch: char) -> Result<Token, LexError> {
        let start = self.pos;
        self.advance();

        let two = |lexer: &mut Self, next: char, double: TokenKind, single: TokenKind| {
            if lexer.peek() == Some(next) {
                lexer.advance();
                (double, true)
            } else {
                (single, false)
            }
        };

        let (kind, lexeme) = match ch {
            '+' => {
                let (kind, wide) = two(self, '+', TokenKind::Inc, TokenKind::Plus);
                (kind, if wide { "++" } else { "+" })
            }
            '-' => {
                let (kind, wide) = two(self, '-', TokenKind::Dec, TokenKind::Minus);
                (kind, if wide { "--" } else { "-" })
            }
            '=' => {
                let (kind, wide) = two(self, '=', TokenKind::Eq, TokenKind::Assign);
                (kind, if wide { "==" } else { "=" })
            }
            '!' => {
                let (kind, wide) = two(self, '=', TokenKind::Neq, TokenKind::Not);
                (kind, if wide { "!=" } else { "!" })
            }
            '<' => {
                let (kind, wide) = two(self, '=', TokenKind::Le, TokenKind::Lt);
                (kind, if wide { "<=" } else { "<" })
            }
            '>' => {
                let (kind, wide) = two(self, '=', TokenKind::Ge, TokenKind::Gt);
                (kind, if wide { ">=" } else { ">" })
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    (TokenKind::And, "&&")
                } else {
                    return Err(self.unexpected_char('&', start));
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    (TokenKind::Or, "||")
                } else {
                    return Err(self.unexpected_char('|', start));
                }
            }
            '*' => (TokenKind::Mul, "*"),
            '/' => (TokenKind::Div, "/"),
            '%' => (TokenKind::Mod, "%"),
            '.' => (TokenKind::Dot, "."),
            '(' => (TokenKind::LParen, "("),
            ')' => (TokenKind::RParen, ")"),
            '{' => (TokenKind::LBrace, "{"),
            '}' => (TokenKind::RBrace, "}"),
            ';' => (TokenKind::Semi, ";"),
            ',' => (TokenKind::Comma, ","),
            ':' => (TokenKind::Colon, ":"),
            other => return Err(self.unexpected_char(other, start)),
        };

        Ok(self.token_at(kind, lexeme, start))
    }

    /// Scan a string literal. The delimiting quotes are not part of the
    /// lexeme, and escapes are copied through undecoded: backslash plus the
    /// following character, whatever it is. Newlines are legal inside.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        self.advance(); // opening quote

        let mut body = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(self.token_at(TokenKind::StringLit, body, start)),
                Some('\\') => {
                    body.push('\\');
                    match self.advance() {
                        Some(escaped) => body.push(escaped),
                        None => return Err(self.unterminated_string(body, start)),
                    }
                }
                Some(other) => body.push(other),
                None => return Err(self.unterminated_string(body, start)),
            }
        }
    }

    /// Scan a numeric literal: a maximal digit run, an optional fraction
    /// (`.` plus zero or more digits), and an optional exponent. The
    /// exponent is only consumed when the full `e[+-]?digits` shape is
    /// present, so `5e` lexes as `INTLIT 5` followed by `ID e`.
    fn number_literal(&mut self) -> Token {
        let start = self.pos;
        let mut text = String::new();
        let mut is_float = false;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if self.peek() == Some('.') {
            is_float = true;
            text.push('.');
            self.advance();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        if let Some(exp) = self.peek() {
            if (exp == 'e' || exp == 'E') && self.exponent_follows() {
                is_float = true;
                text.push(exp);
                self.advance();
                if let Some(sign @ ('+' | '-')) = self.peek() {
                    text.push(sign);
                    self.advance();
                }
                while let Some(ch) = self.peek() {
                    if ch.is_ascii_digit() {
                        text.push(ch);
                        self.advance();
                    } else {
                        break;
                    }
                }
            }
        }

        let kind = if is_float {
            TokenKind::FloatLit
        } else {
            TokenKind::IntLit
        };
        self.token_at(kind, text, start)
    }

    /// Whether the characters after the current `e`/`E` complete an
    /// exponent: an optional sign followed by at least one digit.
    fn exponent_follows(&self) -> bool {
        match self.peek_ahead(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some('+') | Some('-') => self.peek_ahead(2).is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Scan an identifier run and classify it against the keyword table.
    fn identifier_or_keyword(&mut self) -> Token {
        let start = self.pos;
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = KEYWORDS
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenKind::Ident);
        self.token_at(kind, text, start)
    }

    /// Skip whitespace, line comments, and block comments.
    ///
    /// Block comments do not nest: the first `*/` after a `/*` closes it.
    /// An unterminated block comment silently discards to end of input.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') | Some('\r') | Some('\n') => {
                    self.advance();
                }
                Some('/') if self.peek_ahead(1) == Some('/') => {
                    while let Some(ch) = self.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.peek_ahead(1) == Some('*') => {
                    self.advance();
                    self.advance();
                    while let Some(ch) = self.advance() {
                        if ch == '*' && self.peek() == Some('/') {
                            self.advance();
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    fn token_at(
        &self,
        kind: TokenKind,
        lexeme: impl Into<String>,
        start: usize,
    ) -> Token {
        let (line, col) = self.index.locate(start);
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            col,
        }
    }

    fn unterminated_string(&self, body: String, start: usize) -> LexError {
        let (line, col) = self.index.locate(start);
        LexError {
            kind: LexErrorKind::UnterminatedString,
            text: body,
            line,
            col,
        }
    }

    fn unexpected_char(&self, ch: char, start: usize) -> LexError {
        let (line, col) = self.index.locate(start);
        LexError {
            kind: LexErrorKind::UnexpectedChar,
            text: ch.to_string(),
            line,
            col,
        }
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.src.get(self.pos + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src.get(self.pos).copied();
        if ch.is_some() {
            self.pos += 1;
        }
        ch
    }
}

/// Render a token stream as `KIND,LEXEME` pairs joined by commas, with the
/// final element the bare `EOF` tag. String lexemes appear with their
/// escapes exactly as written in the source.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut parts = Vec::new();
    for token in tokens {
        if token.kind == TokenKind::Eof {
            parts.push("EOF".to_string());
        } else {
            parts.push(format!("{},{}", token.kind, token.lexeme));
        }
    }
    parts.join(",")
}

/// Tokenize a source string and render it for debugging: the serialized
/// token stream on success, the formatted lexical error otherwise.
pub fn tokenize_outcome(source: &str) -> String {
    match Lexer::new(source).tokenize() {
        Ok(tokens) => render_tokens(&tokens),
        Err(err) => err.to_string(),
    }
}
