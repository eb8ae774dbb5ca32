//! Streaming writer for generated C headers.
//!
//! Nothing is buffered beyond what the underlying sink buffers: each byte is
//! formatted and written as soon as it is pushed.

use std::io::{self, Write};

use crate::domain::model::HeaderLayout;

/// Writes the guard, array declarations, and index array of a header.
#[derive(Debug)]
pub struct HeaderWriter<W: Write> {
    out: W,
    layout: HeaderLayout,
}

impl<W: Write> HeaderWriter<W> {
    /// Create a writer using the default header layout.
    pub fn new(out: W) -> Self {
        Self::with_layout(out, HeaderLayout::default())
    }

    pub fn with_layout(out: W, layout: HeaderLayout) -> Self {
        Self { out, layout }
    }

    /// Write the opening include guard followed by a blank line.
    pub fn begin(&mut self) -> io::Result<()> {
        write!(
            self.out,
            "#ifndef {guard}\n#define {guard}\n\n",
            guard = self.layout.guard
        )
    }

    /// Open the declaration of the array at `index`. Entries are written
    /// through the returned [`ArrayWriter`], which must be finished to close
    /// the declaration.
    pub fn begin_array(&mut self, index: usize) -> io::Result<ArrayWriter<'_, W>> {
        write!(self.out, "const char {}[] = {{", self.layout.array_name(index))?;
        Ok(ArrayWriter {
            out: &mut self.out,
            layout: &self.layout,
            position: 0,
        })
    }

    /// Write the array of pointers referencing arrays `0..count` in order.
    pub fn write_index(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "const char* {}[] = {{", self.layout.symbol)?;
        for index in 0..count {
            writeln!(
                self.out,
                "{}{},",
                self.layout.indent,
                self.layout.array_name(index)
            )?;
        }
        self.out.write_all(b"};\n\n")
    }

    /// Push buffered output to the sink without closing the header.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Close the include guard, flush, and hand back the sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.write_all(b"#endif\n")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Entries of a single array declaration.
#[derive(Debug)]
pub struct ArrayWriter<'a, W: Write> {
    out: &'a mut W,
    layout: &'a HeaderLayout,
    position: u64,
}

impl<W: Write> ArrayWriter<'_, W> {
    /// Append one byte as `0xHH, `, starting a new indented line every
    /// `bytes_per_line` entries (including before the first).
    pub fn push(&mut self, byte: u8) -> io::Result<()> {
        let per_line = self.layout.bytes_per_line.max(1) as u64;
        if self.position % per_line == 0 {
            write!(self.out, "\n{}", self.layout.indent)?;
        }
        write!(self.out, "0x{byte:02X}, ")?;
        self.position += 1;
        Ok(())
    }

    /// Append the `0x00` terminator, close the declaration, and return the
    /// number of real bytes the array holds.
    pub fn finish(mut self) -> io::Result<u64> {
        let len = self.position;
        self.push(0)?;
        self.out.write_all(b"\n};\n\n")?;
        Ok(len)
    }
}
