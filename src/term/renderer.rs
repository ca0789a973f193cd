//! TerminalRenderer: flushes styled lines to a real terminal.
//!
//! Keeps the drawing API small: full redraw per frame into a byte buffer,
//! flushed in one write. Raw mode and the alternate screen are restored on
//! exit even when the run loop errors.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::view::Line;
use crate::types::NeonColor;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame of styled lines from the top-left corner.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<NeonColor> = None;
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.buf.queue(Print("\r\n"))?;
            }
            for span in line {
                if span.color != current {
                    match span.color {
                        Some(color) => {
                            let (r, g, b) = color.rgb();
                            self.buf.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                        }
                        None => {
                            self.buf.queue(ResetColor)?;
                        }
                    }
                    current = span.color;
                }
                self.buf.queue(Print(span.text.as_str()))?;
            }
        }
        self.buf.queue(ResetColor)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
