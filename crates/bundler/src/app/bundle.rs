//! Bundling files into a generated header.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::app::emit::HeaderWriter;
use crate::domain::errors::BundleError;
use crate::domain::model::{BundleEntry, BundleRequest, BundleSummary, HeaderLayout};

/// Streams input files into a header of `const char` arrays.
#[derive(Debug, Clone)]
pub struct Bundler {
    layout: HeaderLayout,
    program: String,
}

impl Default for Bundler {
    fn default() -> Self {
        Self {
            layout: HeaderLayout::default(),
            program: env!("CARGO_PKG_NAME").to_owned(),
        }
    }
}

impl Bundler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom header layout instead of the default `BUNDLE_H` one.
    pub fn with_layout(mut self, layout: HeaderLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Program name reported in the usage diagnostic.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Execute a parsed invocation.
    pub fn execute(&self, request: &BundleRequest) -> Result<BundleSummary, BundleError> {
        self.run(&request.output, &request.inputs)
    }

    /// Write a header to `output` embedding every file of `inputs` in order.
    ///
    /// The output is created or truncated. On the first failure the run
    /// aborts: anything already written is flushed and left on disk, and
    /// neither the remaining inputs nor the index array are written.
    pub fn run(&self, output: &Path, inputs: &[PathBuf]) -> Result<BundleSummary, BundleError> {
        if inputs.is_empty() {
            return Err(self.usage());
        }

        let file = File::create(output).map_err(|source| BundleError::OutputOpen {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %output.display(), "opened output");

        let mut header = HeaderWriter::with_layout(BufWriter::new(file), self.layout.clone());
        let entries = self
            .write_body(&mut header, output, inputs)
            .map_err(|err| abort(&mut header, err))?;
        header.finish().map_err(|source| write_error(output, source))?;

        let summary = BundleSummary {
            output: output.to_path_buf(),
            entries,
        };
        tracing::info!(
            output = %output.display(),
            entries = summary.entries.len(),
            bytes = summary.total_bytes(),
            "bundle written"
        );
        Ok(summary)
    }

    /// Stream `inputs` into an arbitrary sink, e.g. an in-memory buffer.
    ///
    /// `label` names the sink in write-failure diagnostics.
    pub fn render<W: Write>(
        &self,
        sink: W,
        label: &Path,
        inputs: &[PathBuf],
    ) -> Result<(W, Vec<BundleEntry>), BundleError> {
        if inputs.is_empty() {
            return Err(self.usage());
        }

        let mut header = HeaderWriter::with_layout(sink, self.layout.clone());
        let entries = self
            .write_body(&mut header, label, inputs)
            .map_err(|err| abort(&mut header, err))?;
        let sink = header.finish().map_err(|source| write_error(label, source))?;
        Ok((sink, entries))
    }

    fn write_body<W: Write>(
        &self,
        header: &mut HeaderWriter<W>,
        output: &Path,
        inputs: &[PathBuf],
    ) -> Result<Vec<BundleEntry>, BundleError> {
        header.begin().map_err(|source| write_error(output, source))?;

        let mut entries = Vec::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            entries.push(embed_file(header, output, index, input)?);
        }

        header
            .write_index(inputs.len())
            .map_err(|source| write_error(output, source))?;
        Ok(entries)
    }

    fn usage(&self) -> BundleError {
        BundleError::Usage {
            program: self.program.clone(),
        }
    }
}

/// Bundle `inputs` into `output` with the default layout.
pub fn run(output: &Path, inputs: &[PathBuf]) -> Result<(), BundleError> {
    Bundler::default().run(output, inputs).map(|_| ())
}

fn embed_file<W: Write>(
    header: &mut HeaderWriter<W>,
    output: &Path,
    index: usize,
    input: &Path,
) -> Result<BundleEntry, BundleError> {
    let file = File::open(input).map_err(|source| BundleError::InputOpen {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::debug!(index, path = %input.display(), "opened input");

    let mut array = header
        .begin_array(index)
        .map_err(|source| write_error(output, source))?;
    for byte in BufReader::new(file).bytes() {
        let byte = byte.map_err(|source| BundleError::InputRead {
            path: input.to_path_buf(),
            source,
        })?;
        array.push(byte).map_err(|source| write_error(output, source))?;
    }
    let len = array.finish().map_err(|source| write_error(output, source))?;
    tracing::debug!(index, path = %input.display(), len, "closed input");

    Ok(BundleEntry {
        index,
        path: input.to_path_buf(),
        len,
    })
}

/// Flush what was written before `err` so the partial header stays on disk.
/// A failed flush is logged; `err` is still the error reported.
fn abort<W: Write>(header: &mut HeaderWriter<W>, err: BundleError) -> BundleError {
    tracing::debug!(error = %err, "bundling aborted");
    if let Err(flush_err) = header.flush() {
        tracing::warn!(error = %flush_err, "failed to flush partial output");
    }
    err
}

fn write_error(output: &Path, source: std::io::Error) -> BundleError {
    BundleError::OutputWrite {
        path: output.to_path_buf(),
        source,
    }
}
