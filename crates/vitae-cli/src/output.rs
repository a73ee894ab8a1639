use std::io::Write;

use owo_colors::OwoColorize;
use vitae_core::{SectionKind, SectionMap};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Longest section body printed before truncation.
const MAX_DISPLAY_CHARS: usize = 2000;

/// Print every section under its own heading, bodies truncated for display.
pub fn print_sections(
    w: &mut dyn Write,
    file_name: &str,
    sections: &SectionMap,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(
            w,
            "{} {}",
            "Extracted resume sections from".bold(),
            file_name.bold().cyan()
        )?;
    } else {
        writeln!(w, "Extracted resume sections from {}", file_name)?;
    }

    for kind in SectionKind::ALL {
        let content = sections.get(kind);
        let body = truncate_for_display(content.as_text());

        if color.enabled() {
            writeln!(w, "\n--- {} ---", kind.name().bold().yellow())?;
            if content.is_found() {
                writeln!(w, "{}", body)?;
            } else {
                writeln!(w, "{}", body.dimmed())?;
            }
        } else {
            writeln!(w, "\n--- {} ---", kind.name())?;
            writeln!(w, "{}", body)?;
        }
    }

    let found = sections.iter().filter(|(_, c)| c.is_found()).count();
    writeln!(
        w,
        "\nFound {} of {} sections",
        found,
        SectionKind::ALL.len()
    )?;
    Ok(())
}

/// Cut the body at [`MAX_DISPLAY_CHARS`], never splitting a UTF-8 codepoint.
fn truncate_for_display(text: &str) -> String {
    match text.char_indices().nth(MAX_DISPLAY_CHARS) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}
