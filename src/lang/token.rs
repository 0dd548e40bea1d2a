use super::Column;
use phf::{phf_map, phf_set};

static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "LABEL" => TokenKind::Label,
    "GOTO" => TokenKind::Goto,
    "PRINT" => TokenKind::Print,
    "INPUT" => TokenKind::Input,
    "LET" => TokenKind::Let,
    "IF" => TokenKind::If,
    "THEN" => TokenKind::Then,
    "ENDIF" => TokenKind::Endif,
    "WHILE" => TokenKind::While,
    "REPEAT" => TokenKind::Repeat,
    "ENDWHILE" => TokenKind::Endwhile,
};

// Names that cannot appear as a variable or label in the generated C.
static C_RESERVED: phf::Set<&'static str> = phf_set! {
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if",
    "inline", "int", "long", "register", "restrict", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while",
    "main", "printf", "scanf",
    "EOF", "NULL", "BUFSIZ", "FILENAME_MAX", "FOPEN_MAX", "L_tmpnam",
    "SEEK_SET", "SEEK_CUR", "SEEK_END", "TMP_MAX", "stdin", "stdout", "stderr",
};

/// True when `name` would clash with C or with what `<stdio.h>` defines.
pub fn is_c_reserved(name: &str) -> bool {
    C_RESERVED.contains(name)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Newline,
    Number,
    Ident,
    String,
    // Keywords
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    Endif,
    While,
    Repeat,
    Endwhile,
    // Operators
    Eq,
    Plus,
    Minus,
    Asterisk,
    Slash,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl TokenKind {
    /// Keywords are matched exactly; `print` is an identifier.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS.get(s).copied()
    }

    pub fn is_keyword(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Label | Goto | Print | Input | Let | If | Then | Endif | While | Repeat | Endwhile
        )
    }

    pub fn is_comparison_operator(&self) -> bool {
        use TokenKind::*;
        matches!(self, EqEq | NotEq | Lt | LtEq | Gt | GtEq)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TokenKind::*;
        match self {
            Eof => write!(f, "EOF"),
            Newline => write!(f, "NEWLINE"),
            Number => write!(f, "NUMBER"),
            Ident => write!(f, "IDENT"),
            String => write!(f, "STRING"),
            Label => write!(f, "LABEL"),
            Goto => write!(f, "GOTO"),
            Print => write!(f, "PRINT"),
            Input => write!(f, "INPUT"),
            Let => write!(f, "LET"),
            If => write!(f, "IF"),
            Then => write!(f, "THEN"),
            Endif => write!(f, "ENDIF"),
            While => write!(f, "WHILE"),
            Repeat => write!(f, "REPEAT"),
            Endwhile => write!(f, "ENDWHILE"),
            Eq => write!(f, "EQ"),
            Plus => write!(f, "PLUS"),
            Minus => write!(f, "MINUS"),
            Asterisk => write!(f, "ASTERISK"),
            Slash => write!(f, "SLASH"),
            EqEq => write!(f, "EQEQ"),
            NotEq => write!(f, "NOTEQ"),
            Lt => write!(f, "LT"),
            LtEq => write!(f, "LTEQ"),
            Gt => write!(f, "GT"),
            GtEq => write!(f, "GTEQ"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: Column,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, line: usize, column: Column) -> Token {
        Token {
            kind,
            text: text.to_string(),
            line,
            column,
        }
    }

    pub fn eof(line: usize, col: usize) -> Token {
        Token::new(TokenKind::Eof, "", line, col..col)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{}", self.kind),
            TokenKind::Newline => write!(f, "{}", self.kind),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "{}", self.text),
        }
    }
}
