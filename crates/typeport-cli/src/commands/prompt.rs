//! Interactive seed selection.

use std::io::{self, BufRead, Write};

use typeport_compiler::seed;
use typeport_core::{DeclId, SourceModel};

/// Line-oriented prompt over any reader/writer pair (stdin/stderr in the
/// binary, in-memory buffers in tests).
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a name until exactly one declaration is picked.
    ///
    /// Returns `None` once input is exhausted.
    pub fn next_seed(&mut self, model: &dyn SourceModel) -> io::Result<Option<DeclId>> {
        loop {
            writeln!(self.output, "Enter java class qualified name:")?;
            let Some(query) = self.read_line()? else {
                return Ok(None);
            };

            let candidates = seed::candidates(model, &query);
            match candidates.as_slice() {
                [] => {
                    if !query.is_empty() {
                        writeln!(self.output, "Nothing found for: {}", query)?;
                    }
                }
                [only] => return Ok(Some(*only)),
                _ => return self.choose(model, &candidates),
            }
        }
    }

    /// Numbered selection, repeated until a valid index is entered.
    fn choose(
        &mut self,
        model: &dyn SourceModel,
        candidates: &[DeclId],
    ) -> io::Result<Option<DeclId>> {
        loop {
            writeln!(self.output, "Select element to translate:")?;
            for (i, id) in candidates.iter().enumerate() {
                writeln!(self.output, "  [{}]: {}", i, model.decl(*id).qualified_name)?;
            }

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            match answer.parse::<usize>().ok().and_then(|i| candidates.get(i)) {
                Some(id) => return Ok(Some(*id)),
                None => writeln!(self.output, "Invalid choice: {}", answer)?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
