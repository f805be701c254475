//! Encoders that turn a framebuffer into terminal bytes.
//!
//! Nothing here writes to stdout. Callers hand in a byte buffer, then write
//! it wherever the output should go.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Encode a frame at the current cursor position, one line per row.
///
/// Suitable for printing into scrollback rather than redrawing in place.
pub fn encode_inline_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            // Reset before the line break so colors don't bleed past the frame.
            out.queue(ResetColor)?;
            current_style = None;
            out.write_all(b"\n")?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.write_all(b"\n")?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrameBuffer {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", CellStyle::default());
        fb.put_str(0, 1, "CD", CellStyle::default().bold());
        fb
    }

    #[test]
    fn style_conversion_keeps_channels() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }

    #[test]
    fn inline_encoding_keeps_cells_in_order() {
        let mut out = Vec::new();
        encode_inline_into(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let a = text.find('A').unwrap();
        let b = text.find('B').unwrap();
        let c = text.find('C').unwrap();
        let d = text.find('D').unwrap();
        assert!(a < b && b < c && c < d);
        assert_eq!(text.matches('\n').count(), 2);
        assert!(text.ends_with('\n'));
        assert!(!text.contains("\r\n"));
        assert!(!text.contains("\x1b[2J"));
    }
}
