//! CLI styles for clap.

use clap::builder::styling::{AnsiColor, Color, Style, Styles};

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Help styles for the `info-server` command.
pub fn styles() -> Styles {
    let bold = |color| Style::new().bold().fg_color(Some(Color::Ansi(color)));

    Styles::styled()
        .header(bold(AnsiColor::Yellow))
        .usage(bold(AnsiColor::Green))
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(bold(AnsiColor::Red))
        .invalid(bold(AnsiColor::Red))
        .valid(bold(AnsiColor::Green))
}
