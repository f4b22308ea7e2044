//! Column-aligning writer
//!
//! Text written to a [`TabWriter`] is buffered until `flush`. Every
//! tab-terminated cell is then padded so that cells in the same column line
//! up. A column block is a run of consecutive lines that all have a
//! tab-terminated cell in that column; its width is the widest cell in the
//! block plus the padding. Text after the last tab of a line is not part of
//! any column and is written as-is.

use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Alignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSettings {
    /// Minimal cell width including padding
    pub min_width: usize,
    /// Padding added to a cell's text before computing column width
    pub padding: usize,
    /// Character used to fill cells
    pub pad_char: char,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            min_width: 1,
            padding: 1,
            pad_char: ' ',
        }
    }
}

pub struct TabWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
    settings: TabSettings,
}

impl<W: Write> TabWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_settings(inner, TabSettings::default())
    }

    pub fn with_settings(inner: W, settings: TabSettings) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            settings,
        }
    }

    /// Flush pending text and return the wrapped writer
    pub fn into_inner(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for TabWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let text = String::from_utf8_lossy(&self.buf);
            let aligned = align(&text, &self.settings);
            self.buf.clear();
            self.inner.write_all(aligned.as_bytes())?;
        }
        self.inner.flush()
    }
}

/// Align `text` in memory
pub fn align(text: &str, settings: &TabSettings) -> String {
    let lines: Vec<Vec<&str>> = text.split('\n').map(|line| line.split('\t').collect()).collect();
    // the last piece of every line is trailing text, not a cell
    let cell_counts: Vec<usize> = lines.iter().map(|cells| cells.len() - 1).collect();
    let max_cells = cell_counts.iter().copied().max().unwrap_or(0);

    let mut widths: Vec<Vec<usize>> = cell_counts.iter().map(|&n| vec![0; n]).collect();
    for column in 0..max_cells {
        let mut row = 0;
        while row < lines.len() {
            if cell_counts[row] <= column {
                row += 1;
                continue;
            }
            let start = row;
            let mut width = settings.min_width;
            while row < lines.len() && cell_counts[row] > column {
                width = width.max(lines[row][column].width() + settings.padding);
                row += 1;
            }
            for block_row in &mut widths[start..row] {
                block_row[column] = width;
            }
        }
    }

    let mut out = String::with_capacity(text.len() + max_cells * lines.len());
    for (row, cells) in lines.iter().enumerate() {
        if row > 0 {
            out.push('\n');
        }
        for (column, cell) in cells.iter().enumerate() {
            out.push_str(cell);
            if column < cell_counts[row] {
                let fill = widths[row][column].saturating_sub(cell.width());
                out.extend(std::iter::repeat(settings.pad_char).take(fill));
            }
        }
    }
    out
}
