use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::dimension::Advance;
use crate::error::{IndexError, LayoutError};
use crate::pgf::PgfFont;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub width: Advance,
    // Whole pixels
    pub height: u32,
}

/// A run of text along with its measured size. Word wrapping works on these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub text: String,
    pub width: Advance,
    pub height: u32,
}

/// One line of wrapped output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    chunks: Vec<TextChunk>,
}

impl Line {
    fn new(chunks: Vec<TextChunk>) -> Line {
        Line { chunks }
    }

    pub fn chunks(&self) -> &[TextChunk] {
        &self.chunks
    }

    pub fn text(&self) -> String {
        self.chunks.iter().map(|chunk| chunk.text.as_str()).collect()
    }

    pub fn width(&self) -> Advance {
        self.chunks.iter().map(|chunk| chunk.width).sum()
    }

    pub fn height(&self) -> u32 {
        self.chunks.iter().map(|chunk| chunk.height).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    pub width: Advance,
    // Lines are not currently limited by height. Wrapping keeps going until
    // all of the text has been placed, however many lines that takes.
    pub height: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            width: Advance::from_pixels(475),
            height: 100,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CharMetrics {
    // Advance plus left bearing
    advance: Advance,
    // Distance from the top of the glyph box to the bottom of the glyph
    extent: u32,
}

/// Measures and wraps text using a font's glyph metrics. Metrics are
/// remembered per character, so reusing one layout for many strings avoids
/// decoding the same glyph over and over.
pub struct TextLayout<'f> {
    font: &'f PgfFont,
    metrics: HashMap<char, CharMetrics>,
}

impl<'f> TextLayout<'f> {
    pub fn new(font: &'f PgfFont) -> Self {
        TextLayout {
            font,
            metrics: HashMap::new(),
        }
    }

    fn char_metrics(&mut self, chr: char) -> Result<CharMetrics, IndexError> {
        if let Some(metrics) = self.metrics.get(&chr) {
            return Ok(*metrics);
        }

        let glyph = self.font.glyph_for_char(chr)?;
        let metrics = CharMetrics {
            advance: Advance::from_64ths(glyph.horiz_advance())
                + Advance::from_pixels(glyph.left() as u32),
            extent: glyph.top() as u32 + glyph.height() as u32,
        };
        self.metrics.insert(chr, metrics);
        Ok(metrics)
    }

    pub fn measure(&mut self, text: &str) -> Result<TextMetrics, IndexError> {
        let mut width = Advance::zero();
        let mut height: u32 = 0;

        for chr in text.chars() {
            let metrics = self.char_metrics(chr)?;
            width += metrics.advance;
            height = height.max(metrics.extent);
        }

        debug!("str metrics {:?}: {:?} {}", text, width, height);
        Ok(TextMetrics { width, height })
    }

    pub fn chunk(&mut self, text: &str) -> Result<TextChunk, IndexError> {
        let metrics = self.measure(text)?;
        Ok(TextChunk {
            text: text.to_string(),
            width: metrics.width,
            height: metrics.height,
        })
    }

    // Each word keeps a single trailing space.
    fn word_chunks(
        &mut self,
        text: &str,
    ) -> Result<VecDeque<TextChunk>, IndexError> {
        text.split(' ')
            .map(|word| self.chunk(&format!("{} ", word)))
            .collect()
    }

    /// Word wraps `text` into lines no wider than `params.width`. Words are
    /// placed greedily; a word which doesn't fit on a line by itself is split
    /// at a space if it has one, and is an error otherwise.
    pub fn wrap(
        &mut self,
        text: &str,
        params: &LayoutParams,
    ) -> Result<Vec<Line>, LayoutError> {
        let max_width = params.width;
        let mut lines = Vec::new();

        if text.is_empty() {
            return Ok(lines);
        }

        let mut remaining = self.word_chunks(text)?;
        while !remaining.is_empty() {
            let mut line_width = Advance::zero();
            let mut fit = 0;
            for chunk in remaining.iter() {
                if line_width + chunk.width > max_width {
                    break;
                }
                line_width += chunk.width;
                fit += 1;
            }

            if fit > 0 {
                let line = Line::new(remaining.drain(..fit).collect());
                if !line.text().is_empty() {
                    debug!(
                        "Wrapped line {:?} ({:?})",
                        line.text(),
                        line_width
                    );
                    lines.push(line);
                }
            } else if let Some(chunk) = remaining.pop_front() {
                self.break_chunk(
                    chunk,
                    max_width,
                    &mut lines,
                    &mut remaining,
                )?;
            }
        }

        Ok(lines)
    }

    // Handles a chunk too wide to fit on a line by itself. Whatever part of
    // it can be placed becomes a line of its own and the rest is put back at
    // the front of the remaining chunks.
    fn break_chunk(
        &mut self,
        chunk: TextChunk,
        max_width: Advance,
        lines: &mut Vec<Line>,
        remaining: &mut VecDeque<TextChunk>,
    ) -> Result<(), LayoutError> {
        let (head, tail) = self.split_chunk(&chunk, max_width)?;

        if let Some(tail) = tail {
            remaining.push_front(tail);
        }

        if head.width > max_width {
            self.break_chunk(head, max_width, lines, remaining)
        } else {
            debug!("Split line {:?} ({:?})", head.text, head.width);
            lines.push(Line::new(vec![head]));
            Ok(())
        }
    }

    // Splits a chunk at the last space at or before the first character
    // which overflows the line. The space itself is dropped.
    fn split_chunk(
        &mut self,
        chunk: &TextChunk,
        max_width: Advance,
    ) -> Result<(TextChunk, Option<TextChunk>), LayoutError> {
        let text = &chunk.text;

        let mut width = Advance::zero();
        let mut search_end = text.len();
        for (index, chr) in text.char_indices() {
            width += self.char_metrics(chr)?.advance;
            if width > max_width {
                search_end = index + chr.len_utf8();
                break;
            }
        }

        let split_at = match text[..search_end].rfind(' ') {
            Some(index) if index > 0 => index,
            _ => {
                return Err(LayoutError::UnsplittableWord {
                    word: text.trim_end().to_string(),
                    width: chunk.width.as_64ths(),
                    max_width: max_width.as_64ths(),
                })
            }
        };

        let head = self.chunk(&text[..split_at])?;
        let tail = &text[split_at + 1..];
        let tail = if tail.is_empty() {
            None
        } else {
            Some(self.chunk(tail)?)
        };

        Ok((head, tail))
    }
}

impl PgfFont {
    /// The width and height of `text` set on a single line.
    pub fn measure(&self, text: &str) -> Result<TextMetrics, IndexError> {
        TextLayout::new(self).measure(text)
    }

    pub fn wrap(
        &self,
        text: &str,
        max_width: Advance,
        max_height: u32,
    ) -> Result<Vec<Line>, LayoutError> {
        let params = LayoutParams {
            width: max_width,
            height: max_height,
        };
        TextLayout::new(self).wrap(text, &params)
    }
}
