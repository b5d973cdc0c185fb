use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, written with a leading sigil: `'5`, `'3.25`,
    /// `'.5`. A closing `'` is accepted, so `'10'` lexes as well.
    #[regex(r"'[0-9]+(\.[0-9]*)?'?", parse_number)]
    #[regex(r"'\.[0-9]+'?", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"hello"`. The quotes are not part of
    /// the value.
    #[regex(r#""[^"\n]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),
    /// `write`
    #[token("write")]
    Write,
    /// `num`
    #[token("num")]
    Num,
    /// `re`
    #[token("re")]
    Re,
    /// `sunum`
    #[token("sunum")]
    Sunum,
    /// `run`
    #[token("run")]
    Run,
    /// `call`
    #[token("call")]
    Call,
    /// `func`
    #[token("func")]
    Func,
    /// Closes a category body: `end` or `//`.
    #[token("end")]
    #[token("//")]
    BlockEnd,
    /// Identifier tokens; variable, category or language names such as `x`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `+*`, the legacy spelling of multiplication.
    #[token("+*")]
    PlusStar,
    /// `-*`, the legacy spelling of division.
    #[token("-*")]
    MinusStar,
    /// `@`
    #[token("@")]
    At,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `¥`
    #[token("¥")]
    Yen,
    /// `%`
    #[token("%")]
    Percent,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `~`
    #[token("~")]
    Tilde,
    /// `?`, opens the "then" branch of an if-statement.
    #[token("?")]
    Question,
    /// `!`, opens the "else" branch of an if-statement.
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`, chains two statements.
    #[token(";")]
    Semicolon,
    /// `/`, ends a statement.
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `.`
    #[token(".")]
    Dot,
    /// `^`
    #[token("^")]
    Caret,
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// An unrecognized character. Never produced by logos itself; `tokenize`
    /// emits it as the final token when lexing fails.
    Error(String),
    /// End of input. Emitted once by `tokenize` after the last real token.
    EndOfInput,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// columns can be derived from token spans. Columns are counted on from the
/// previous token of the same line, which keeps a long line linear to lex.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
    scanned_offset: usize,
    scanned_chars:  usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:           1,
               line_start:     0,
               scanned_offset: 0,
               scanned_chars:  0, }
    }
}

impl LexerExtras {
    /// 1-based column of the character at byte `offset` on the current line.
    fn column_at(&mut self, source: &str, offset: usize) -> usize {
        if self.scanned_offset < self.line_start || self.scanned_offset > offset {
            self.scanned_offset = self.line_start.min(offset);
            self.scanned_chars = 0;
        }

        let start = self.scanned_offset;
        self.scanned_chars += source.get(start..offset)
                                    .map_or(offset - start, |gap| gap.chars().count());
        self.scanned_offset = offset;
        self.scanned_chars + 1
    }
}

/// A position in the source text. Both fields are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Source line.
    pub line:   usize,
    /// Column of the first character, counted in characters.
    pub column: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A token together with the place it was found.
pub type Spanned = (Token, Location);

/// Converts source text into the complete token sequence.
///
/// Tokenization is eager: the whole input is lexed before the parser sees a
/// single token. The returned vector always ends with exactly one
/// [`Token::EndOfInput`], unless an unrecognized character was met, in which
/// case it ends with a [`Token::Error`] carrying the offending text and
/// nothing follows it.
///
/// # Example
/// ```
/// use sunum::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = '5 /");
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Number(5.0),
///                 Token::Slash,
///                 Token::EndOfInput]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Spanned> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        let location = location_of(source, &mut lexer.extras, offset);
        match token {
            Ok(tok) => tokens.push((tok, location)),
            Err(()) => {
                tokens.push((Token::Error(lexer.slice().to_string()), location));
                return tokens;
            },
        }
    }

    let location = location_of(source, &mut lexer.extras, source.len());
    tokens.push((Token::EndOfInput, location));
    tokens
}

fn location_of(source: &str, extras: &mut LexerExtras, offset: usize) -> Location {
    let column = extras.column_at(source, offset);
    Location::new(extras.line, column)
}

/// Parses a sigil-prefixed numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value with the sigil and optional closing quote
///   removed.
/// - `None`: If the digits do not form a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice()
       .trim_start_matches('\'')
       .trim_end_matches('\'')
       .parse()
       .ok()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "'{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Error(text) => write!(f, "{text}"),
            Self::EndOfInput => write!(f, "end of input"),
            Self::Write => write!(f, "write"),
            Self::Num => write!(f, "num"),
            Self::Re => write!(f, "re"),
            Self::Sunum => write!(f, "sunum"),
            Self::Run => write!(f, "run"),
            Self::Call => write!(f, "call"),
            Self::Func => write!(f, "func"),
            Self::BlockEnd => write!(f, "end"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::PlusStar => write!(f, "+*"),
            Self::MinusStar => write!(f, "-*"),
            Self::At => write!(f, "@"),
            Self::Backslash => write!(f, "\\"),
            Self::Yen => write!(f, "¥"),
            Self::Percent => write!(f, "%"),
            Self::Greater => write!(f, ">"),
            Self::Less => write!(f, "<"),
            Self::GreaterEqual => write!(f, ">="),
            Self::LessEqual => write!(f, "<="),
            Self::EqualEqual => write!(f, "=="),
            Self::BangEqual => write!(f, "!="),
            Self::Ampersand => write!(f, "&"),
            Self::Pipe => write!(f, "|"),
            Self::Tilde => write!(f, "~"),
            Self::Question => write!(f, "?"),
            Self::Bang => write!(f, "!"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Semicolon => write!(f, ";"),
            Self::Slash => write!(f, "/"),
            Self::Equals => write!(f, "="),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::Dot => write!(f, "."),
            Self::Caret => write!(f, "^"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}
