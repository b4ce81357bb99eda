//! Styled output lines.

/// How a span of text should be emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Ordinary text.
    Plain,
    /// Banners and room names.
    Frame,
    /// Good news: focus restored, robots pacified.
    Good,
    /// Bad news: focus lost, game over.
    Bad,
    /// Items and quest progress.
    Notice,
    /// Encounter headings and the villain.
    Alert,
}

/// A run of text in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Emphasis.
    pub style: Style,
    /// Text.
    pub text: String,
}

/// One line of output, or a dramatic pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Text made of styled spans.
    Text(Vec<Span>),
    /// A pause before the next line.
    Beat,
}

impl Line {
    /// A line in a single style.
    pub fn styled(style: Style, text: impl Into<String>) -> Self {
        Self::Text(vec![Span {
            style,
            text: text.into(),
        }])
    }

    /// An unstyled line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(Style::Plain, text)
    }

    /// An empty line.
    pub fn blank() -> Self {
        Self::Text(Vec::new())
    }

    /// Append a span.
    pub fn then(mut self, style: Style, text: impl Into<String>) -> Self {
        let span = Span {
            style,
            text: text.into(),
        };
        match &mut self {
            Self::Text(spans) => spans.push(span),
            Self::Beat => self = Self::Text(vec![span]),
        }
        self
    }

    /// The line's text without styling. Empty for a beat.
    pub fn text(&self) -> String {
        match self {
            Self::Text(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
            Self::Beat => String::new(),
        }
    }
}

/// Join lines into plain text, dropping beats.
pub fn plain_text(lines: &[Line]) -> String {
    lines
        .iter()
        .filter(|l| !matches!(l, Line::Beat))
        .map(Line::text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_concatenate() {
        let line = Line::plain("> You are in the: ").then(Style::Frame, "Den");
        assert_eq!(line.text(), "> You are in the: Den");
    }

    #[test]
    fn plain_text_skips_beats() {
        let lines = vec![Line::plain("a"), Line::Beat, Line::blank(), Line::plain("b")];
        assert_eq!(plain_text(&lines), "a\n\nb");
    }
}
