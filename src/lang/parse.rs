use super::{lex::TokenSource, token::*, Column, Error};
use crate::emit::Emitter;
use crate::error;
use log::debug;
use std::collections::{BTreeMap, HashSet};

type Result<T> = std::result::Result<T, Error>;

/// Parses a whole program from `source` while emitting C into `emit`.
///
/// On success the emitter holds a complete translation unit and is ready
/// for [`Emitter::finish`]. The first syntax or semantic error aborts.
pub fn compile_program<S: TokenSource>(source: S, emit: &mut Emitter) -> Result<()> {
    Parser::new(source, emit)?.program()
}

pub struct Parser<'a, S> {
    source: S,
    emit: &'a mut Emitter,
    current: Token,
    peek: Token,
    symbols: HashSet<String>,
    labels_declared: HashSet<String>,
    labels_gotoed: BTreeMap<String, (usize, Column)>,
}

impl<'a, S: TokenSource> Parser<'a, S> {
    pub fn new(source: S, emit: &'a mut Emitter) -> Result<Parser<'a, S>> {
        let mut parser = Parser {
            source,
            emit,
            current: Token::eof(0, 0),
            peek: Token::eof(0, 0),
            symbols: HashSet::new(),
            labels_declared: HashSet::new(),
            labels_gotoed: BTreeMap::new(),
        };
        parser.next()?;
        parser.next()?;
        Ok(parser)
    }

    fn next(&mut self) -> Result<()> {
        let peek = self.source.next_token()?;
        self.current = std::mem::replace(&mut self.peek, peek);
        Ok(())
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        if !self.check(kind) {
            return Err(self.unexpected(&format!("EXPECTED {}, GOT {}", kind, self.current.kind)));
        }
        self.next()
    }

    fn unexpected(&self, message: &str) -> Error {
        error!(SyntaxError, self.current.line, ..&self.current.column; "{}", message)
    }

    fn ident(&mut self) -> Result<(String, usize, Column)> {
        if !self.check(TokenKind::Ident) {
            return Err(self.unexpected(&format!("EXPECTED IDENT, GOT {}", self.current.kind)));
        }
        if is_c_reserved(&self.current.text) {
            return Err(self.unexpected(&format!("RESERVED NAME: {}", self.current.text)));
        }
        let found = (
            self.current.text.clone(),
            self.current.line,
            self.current.column.clone(),
        );
        self.next()?;
        Ok(found)
    }

    pub fn program(&mut self) -> Result<()> {
        self.emit.header_line("#include <stdio.h>");
        self.emit.header_line("int main(void){");

        while self.check(TokenKind::Newline) {
            self.next()?;
        }
        while !self.check(TokenKind::Eof) {
            self.statement()?;
        }

        self.emit.emit_line("return 0;");
        self.emit.emit_line("}");

        self.resolve_labels()
    }

    fn resolve_labels(&self) -> Result<()> {
        for (label, (line, column)) in &self.labels_gotoed {
            if !self.labels_declared.contains(label) {
                return Err(error!(UndefinedLabel, *line, ..column;
                    "ATTEMPTING TO GOTO UNDECLARED LABEL: {}", label));
            }
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        use TokenKind::*;
        match self.current.kind {
            Print => self.r#print()?,
            If => self.r#if()?,
            While => self.r#while()?,
            Label => self.r#label()?,
            Goto => self.r#goto()?,
            Let => self.r#let()?,
            Input => self.r#input()?,
            _ => {
                return Err(self.unexpected(&format!(
                    "INVALID STATEMENT AT {} ({})",
                    self.current, self.current.kind
                )))
            }
        }
        self.nl()
    }

    fn r#print(&mut self) -> Result<()> {
        self.next()?;
        if self.check(TokenKind::String) {
            self.emit.emit_line(&format!("printf(\"{}\\n\");", self.current.text));
            self.next()
        } else {
            self.emit.emit("printf(\"%.2f\\n\", (float)(");
            self.expression()?;
            self.emit.emit_line("));");
            Ok(())
        }
    }

    fn r#if(&mut self) -> Result<()> {
        self.next()?;
        self.emit.emit("if(");
        self.comparison()?;
        self.expect(TokenKind::Then)?;
        self.nl()?;
        self.emit.emit_line("){");
        self.block(TokenKind::Endif)
    }

    fn r#while(&mut self) -> Result<()> {
        self.next()?;
        self.emit.emit("while(");
        self.comparison()?;
        self.expect(TokenKind::Repeat)?;
        self.nl()?;
        self.emit.emit_line("){");
        self.block(TokenKind::Endwhile)
    }

    fn block(&mut self, end: TokenKind) -> Result<()> {
        while !self.check(end) {
            if self.check(TokenKind::Eof) {
                return self.expect(end);
            }
            self.statement()?;
        }
        self.expect(end)?;
        self.emit.emit_line("}");
        Ok(())
    }

    fn r#label(&mut self) -> Result<()> {
        self.next()?;
        let (name, line, column) = self.ident()?;
        if self.labels_declared.contains(&name) {
            return Err(error!(DuplicateLabel, line, ..&column; "LABEL ALREADY EXISTS: {}", name));
        }
        debug!("Label {} declared on line {}", name, line);
        self.emit.emit_line(&format!("{}:;", name));
        self.labels_declared.insert(name);
        Ok(())
    }

    fn r#goto(&mut self) -> Result<()> {
        self.next()?;
        let (name, line, column) = self.ident()?;
        self.emit.emit_line(&format!("goto {};", name));
        self.labels_gotoed.entry(name).or_insert((line, column));
        Ok(())
    }

    fn r#let(&mut self) -> Result<()> {
        self.next()?;
        let (name, _, _) = self.ident()?;
        self.declare(&name);
        self.emit.emit(&format!("{} = ", name));
        self.expect(TokenKind::Eq)?;
        self.expression()?;
        self.emit.emit_line(";");
        Ok(())
    }

    fn r#input(&mut self) -> Result<()> {
        self.next()?;
        let (name, _, _) = self.ident()?;
        self.declare(&name);
        self.emit.emit_line(&format!("if(1 != scanf(\"%f\", &{})) {{", name));
        self.emit.emit_line(&format!("{} = 0;", name));
        self.emit.emit_line("scanf(\"%*[^\\n]\");");
        self.emit.emit_line("}");
        Ok(())
    }

    fn declare(&mut self, name: &str) {
        if self.symbols.insert(name.to_string()) {
            debug!("Variable {} declared", name);
            self.emit.header_line(&format!("float {} = 0;", name));
        }
    }

    fn comparison(&mut self) -> Result<()> {
        self.expression()?;
        if !self.current.kind.is_comparison_operator() {
            return Err(self.unexpected(&format!(
                "EXPECTED COMPARISON OPERATOR AT {}",
                self.current
            )));
        }
        while self.current.kind.is_comparison_operator() {
            self.operator()?;
            self.expression()?;
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<()> {
        self.term()?;
        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.operator()?;
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<()> {
        self.unary()?;
        while self.check(TokenKind::Asterisk) || self.check(TokenKind::Slash) {
            self.operator()?;
            self.unary()?;
        }
        Ok(())
    }

    fn unary(&mut self) -> Result<()> {
        if self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            self.emit.emit(&self.current.text);
            self.next()?;
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Number => {
                self.emit.emit(&c_float_literal(&self.current.text));
                self.next()
            }
            TokenKind::Ident => {
                if !self.symbols.contains(&self.current.text) {
                    return Err(error!(UndefinedVariable,
                        self.current.line, ..&self.current.column;
                        "REFERENCING VARIABLE BEFORE ASSIGNMENT: {}", self.current.text));
                }
                self.emit.emit(&self.current.text);
                self.next()
            }
            _ => Err(self.unexpected(&format!("UNEXPECTED TOKEN AT {}", self.current))),
        }
    }

    // Binary operators are spaced so `1 - -2` never becomes `1--2`.
    fn operator(&mut self) -> Result<()> {
        self.emit.emit(&format!(" {} ", self.current.text));
        self.next()
    }

    fn nl(&mut self) -> Result<()> {
        self.expect(TokenKind::Newline)?;
        while self.check(TokenKind::Newline) {
            self.next()?;
        }
        Ok(())
    }
}

/// `007` would be octal in C and `1/2` integer division, so every numeral
/// becomes a floating literal.
fn c_float_literal(numeral: &str) -> String {
    let trimmed = numeral.trim_start_matches('0');
    let mut s = match trimmed.chars().next() {
        None | Some('.') => format!("0{}", trimmed),
        Some(_) => trimmed.to_string(),
    };
    if !s.contains('.') {
        s.push_str(".0");
    }
    s
}
