use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(format!($($msg)+))
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr, ..$col:expr; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message(format!($($msg)+))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn in_line_number(self, line: usize) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message(self, message: String) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        error!(DiskIoError; "{}", error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    IllegalCharacter = 1,
    SyntaxError = 2,
    UndefinedVariable = 3,
    DuplicateLabel = 4,
    UndefinedLabel = 5,
    DiskIoError = 57,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            IllegalCharacter => "ILLEGAL CHARACTER",
            SyntaxError => "SYNTAX ERROR",
            UndefinedVariable => "UNDEFINED VARIABLE",
            DuplicateLabel => "DUPLICATE LABEL",
            UndefinedLabel => "UNDEFINED LABEL",
            DiskIoError => "DISK I/O ERROR",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if suffix.is_empty() {
            write!(f, "{}", code_str)?;
        } else {
            write!(f, "{} IN{}", code_str, suffix)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
