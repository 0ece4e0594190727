//! Semantic styling for terminal output.
//!
//! Maps each [`Tone`] to an owo-colors style. The escapes are cosmetic
//! only; with color disabled every tone renders as plain text.

use owo_colors::{OwoColorize, Style};

use drillbook_core::console::Tone;

/// The style used for each tone.
pub fn style_for(tone: Tone) -> Style {
    match tone {
        Tone::Plain => Style::new(),
        Tone::Heading => Style::new().cyan(),
        Tone::Good => Style::new().green().bold(),
        Tone::Bad => Style::new().red().bold(),
        Tone::Hint => Style::new().yellow(),
        Tone::Code => Style::new().yellow(),
    }
}

/// Render `text` in the tone's style, or verbatim when color is off.
pub fn paint(tone: Tone, text: &str, color: bool) -> String {
    if !color || tone == Tone::Plain {
        return text.to_string();
    }
    text.style(style_for(tone)).to_string()
}
