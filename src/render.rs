//! Terminal rendering for gigsheet types.
//!
//! Extension traits that add colored output to gigsheet-core types using
//! owo_colors.

use gigsheet_core::FeaturedEvent;
use gigsheet_core::config::PromoConfig;
use gigsheet_core::diagnostics::Diagnostic;
use gigsheet_core::{Event, Schedule, ScheduleMonth};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "  {:<10} {:>14}  {}",
            self.day_label,
            self.time_label.dimmed(),
            title_of(self).bold()
        );

        if let Some(genre) = &self.genre {
            line.push_str(&format!(" {}", format!("({genre})").dimmed()));
        }
        if self.is_special {
            line.push_str(&format!(" {}", "SPECIAL".yellow()));
        } else if self.is_highlighted {
            line.push_str(&format!(" {}", "★".yellow()));
        }
        if let Some(note) = &self.note {
            line.push_str(&format!(" {}", note.magenta()));
        }

        line
    }
}

impl Render for ScheduleMonth {
    fn render(&self) -> String {
        let mut lines = vec![self.month.to_uppercase().bold().to_string()];
        lines.extend(self.events.iter().map(Render::render));
        lines.join("\n")
    }
}

impl Render for Schedule {
    fn render(&self) -> String {
        if self.is_empty() {
            return "No upcoming events".dimmed().to_string();
        }

        self.months()
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Render for FeaturedEvent<'_> {
    fn render(&self) -> String {
        let event = self.event;
        let mut lines = vec![
            format!("{} {}", "Featured:".dimmed(), title_of(event).bold()),
            format!(
                "  {} {}, {}",
                event.day_label,
                self.month,
                event.time_label
            ),
        ];

        if let Some(genre) = &event.genre {
            lines.push(format!("  {}", genre.dimmed()));
        }
        if let Some(note) = &event.note {
            lines.push(format!("  {}", note.magenta()));
        }
        if let Some(description) = &event.description {
            lines.push(String::new());
            lines.push(format!("  {description}"));
        }

        lines.join("\n")
    }
}

impl Render for Diagnostic {
    fn render(&self) -> String {
        format!("{} {}", "!".yellow(), self)
    }
}

/// Featured event wrapped in the venue's promotional copy.
pub fn render_promo(promo: &PromoConfig, featured: &FeaturedEvent<'_>) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &promo.title {
        lines.push(title.to_uppercase().bold().yellow().to_string());
    }
    if let Some(subtitle) = &promo.subtitle {
        lines.push(subtitle.italic().to_string());
    }
    if !lines.is_empty() {
        lines.push(String::new());
    }

    lines.push(featured.render());

    match (&promo.cta_text, &promo.cta_link) {
        (Some(text), Some(link)) => {
            lines.push(String::new());
            lines.push(format!("  {} {}", text.green().bold(), link.underline()));
        }
        (Some(text), None) => {
            lines.push(String::new());
            lines.push(format!("  {}", text.green().bold()));
        }
        (None, Some(link)) => {
            lines.push(String::new());
            lines.push(format!("  {}", link.underline()));
        }
        (None, None) => {}
    }

    lines.join("\n")
}

fn title_of(event: &Event) -> &str {
    if event.title.is_empty() {
        "(untitled)"
    } else {
        &event.title
    }
}

/// Drop SGR escape sequences so tests can compare plain text.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            out.push(c);
        }
    }
    out
}
