/*!
## Rust Emitter Module

Accumulates generated C in two buffers. The header holds the prologue
and variable declarations, the code holds translated statements.
Nothing is written until [`Emitter::finish`].

*/

mod sink;

pub use sink::FileSink;
pub use sink::Sink;

use crate::lang::Error;

#[derive(Debug, Default)]
pub struct Emitter {
    header: String,
    code: String,
}

impl Emitter {
    pub fn new() -> Emitter {
        Emitter::default()
    }

    pub fn header_line(&mut self, code: &str) {
        self.header.push_str(code);
        self.header.push('\n');
    }

    pub fn emit_line(&mut self, code: &str) {
        self.code.push_str(code);
        self.code.push('\n');
    }

    pub fn emit(&mut self, code: &str) {
        self.code.push_str(code);
    }

    /// Hands `header ++ code` to the sink in a single write.
    pub fn finish<S: Sink + ?Sized>(self, sink: &mut S) -> Result<(), Error> {
        let mut output = self.header;
        output.push_str(&self.code);
        sink.persist(&output)?;
        Ok(())
    }
}
