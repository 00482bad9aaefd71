//! Styled output primitives shared by the overlay renderers.

use std::fmt::Write;

/// A segment of styled text within a rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledSegment {
    /// The text content.
    pub text: String,
    /// Foreground color as [r, g, b].
    pub fg: Option<[u8; 3]>,
    /// Whether this segment is bold.
    pub bold: bool,
    /// Whether this segment is italic.
    pub italic: bool,
    /// Whether this segment is underlined.
    pub underline: bool,
    /// Location this segment points at (`file:line:col`), for hosts that
    /// can open files.
    pub link_url: Option<String>,
}

impl StyledSegment {
    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Text in the given foreground color.
    pub fn colored(text: impl Into<String>, fg: [u8; 3]) -> Self {
        Self {
            text: text.into(),
            fg: Some(fg),
            ..Default::default()
        }
    }
}

/// A single line of styled output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    /// The styled segments making up this line.
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    /// Creates a new styled line from segments.
    pub fn new(segments: Vec<StyledSegment>) -> Self {
        Self { segments }
    }

    /// Creates a plain unstyled line from text.
    pub fn plain(text: &str) -> Self {
        Self::new(vec![StyledSegment::plain(text)])
    }

    /// Concatenated segment text.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Text with SGR escape sequences for truecolor terminals.
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for seg in &self.segments {
            let mut codes: Vec<String> = Vec::new();
            if seg.bold {
                codes.push("1".to_string());
            }
            if seg.italic {
                codes.push("3".to_string());
            }
            if seg.underline {
                codes.push("4".to_string());
            }
            if let Some([r, g, b]) = seg.fg {
                codes.push(format!("38;2;{r};{g};{b}"));
            }

            if codes.is_empty() {
                out.push_str(&seg.text);
            } else {
                let _ = write!(out, "\x1b[{}m{}\x1b[0m", codes.join(";"), seg.text);
            }
        }
        out
    }
}

/// Colors used by the text renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayTheme {
    /// Error name and message.
    pub error: [u8; 3],
    /// Frames not marked first-party, group headers, the toggle control.
    pub dimmed: [u8; 3],
    /// File locations.
    pub path: [u8; 3],
    /// Source snippet text.
    pub code: [u8; 3],
    /// Component names and section headings.
    pub accent: [u8; 3],
}

impl Default for OverlayTheme {
    /// Catppuccin Mocha-inspired palette.
    fn default() -> Self {
        Self {
            error: [235, 160, 172],  // maroon
            dimmed: [108, 112, 134], // overlay0
            path: [148, 226, 213],   // teal
            code: [205, 214, 244],   // text
            accent: [203, 166, 247], // mauve
        }
    }
}

/// Output of rendering one runtime error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOverlay {
    pub lines: Vec<StyledLine>,
}

impl RenderedOverlay {
    /// Lines joined with newlines, without styling.
    pub fn to_plain_text(&self) -> String {
        self.lines
            .iter()
            .map(StyledLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Lines joined with newlines, with ANSI styling.
    pub fn to_ansi(&self) -> String {
        self.lines
            .iter()
            .map(StyledLine::to_ansi)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
