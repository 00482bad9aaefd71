//! `TextOverlayRenderer`: styled-line rendering of a runtime error overlay.

use crate::triage::{ComponentStackFrame, Culprit, Disclosure, ErrorInfo, FrameLocation, StackFrame};

use super::push_line;
use super::traits::{FrameGroup, OverlayRenderer};
use super::types::{OverlayTheme, StyledLine, StyledSegment};

/// `file (line:col)`, or just the file when the position is unknown.
fn location_label(file: &str, line: Option<u32>, column: Option<u32>) -> String {
    match (line, column) {
        (Some(line), Some(col)) => format!("{file} ({line}:{col})"),
        (Some(line), None) => format!("{file} ({line})"),
        _ => file.to_string(),
    }
}

/// Renders overlays as styled terminal lines.
#[derive(Debug, Clone, Default)]
pub struct TextOverlayRenderer {
    theme: OverlayTheme,
}

impl TextOverlayRenderer {
    /// Create a renderer with the given colors.
    pub fn new(theme: OverlayTheme) -> Self {
        Self { theme }
    }

    /// Clickable location segment for a frame location.
    fn location_segment(&self, location: &FrameLocation, dimmed: bool) -> Option<StyledSegment> {
        let file = location.file.as_deref()?;
        Some(StyledSegment {
            text: location_label(file, location.line_number, location.column),
            fg: Some(if dimmed { self.theme.dimmed } else { self.theme.path }),
            underline: !dimmed,
            link_url: location.display_location(),
            ..Default::default()
        })
    }

    /// Two lines per frame: method name, then location.
    fn render_frame(&self, frame: &StackFrame, indent: &str, out: &mut Vec<StyledLine>) {
        let location = frame.display_frame();
        let dimmed = !frame.expanded;

        let name = StyledSegment {
            text: location.method_name.clone(),
            fg: dimmed.then_some(self.theme.dimmed),
            bold: !dimmed,
            ..Default::default()
        };
        push_line(out, vec![StyledSegment::plain(indent), name]);

        if let Some(seg) = self.location_segment(location, dimmed) {
            push_line(out, vec![StyledSegment::plain(format!("{indent}  ")), seg]);
        }
    }
}

impl OverlayRenderer for TextOverlayRenderer {
    fn header(&self, error: &ErrorInfo, out: &mut Vec<StyledLine>) {
        let mut segments = Vec::new();
        if !error.name.is_empty() {
            segments.push(StyledSegment {
                text: error.name.clone(),
                fg: Some(self.theme.error),
                bold: true,
                ..Default::default()
            });
            if !error.message.is_empty() {
                segments.push(StyledSegment::plain(": "));
            }
        }
        if !error.message.is_empty() {
            segments.push(StyledSegment::colored(error.message.clone(), self.theme.error));
        }
        if !segments.is_empty() {
            push_line(out, segments);
        }
    }

    fn code_frame(&self, culprit: &Culprit<'_>, out: &mut Vec<StyledLine>) {
        let location = culprit.original_stack_frame;
        let mut heading = Vec::new();
        if let Some(seg) = self.location_segment(location, false) {
            heading.push(seg);
            heading.push(StyledSegment::plain(" @ "));
        }
        heading.push(StyledSegment {
            text: location.method_name.clone(),
            bold: true,
            ..Default::default()
        });
        push_line(out, heading);

        for line in culprit.original_code_frame.lines() {
            push_line(out, vec![StyledSegment::colored(line, self.theme.code)]);
        }
    }

    fn component_stack_row(&self, frame: &ComponentStackFrame, out: &mut Vec<StyledLine>) {
        push_line(
            out,
            vec![StyledSegment {
                text: frame.component.clone(),
                fg: Some(self.theme.accent),
                bold: true,
                ..Default::default()
            }],
        );
        if let Some(file) = frame.file.as_deref() {
            push_line(
                out,
                vec![
                    StyledSegment::plain("  "),
                    StyledSegment::colored(
                        location_label(file, frame.line_number, frame.column),
                        self.theme.path,
                    ),
                ],
            );
        }
    }

    fn frame_groups(
        &self,
        groups: &[FrameGroup<'_>],
        disclosure: Disclosure,
        out: &mut Vec<StyledLine>,
    ) {
        for group in groups {
            let Some(package) = group.source_package else {
                for frame in &group.frames {
                    self.render_frame(frame, "", out);
                }
                continue;
            };

            // While collapsed, a framework group folds everything except
            // frames marked first-party
            let shown: Vec<&StackFrame> = group
                .frames
                .iter()
                .copied()
                .filter(|f| disclosure.is_expanded() || f.expanded)
                .collect();
            let folded = group.frames.len() - shown.len();
            let (marker, suffix) = if folded == 0 {
                ("▾", String::new())
            } else {
                let plural = if folded == 1 { "" } else { "s" };
                ("▸", format!(" ({folded} frame{plural})"))
            };
            push_line(
                out,
                vec![StyledSegment {
                    text: format!("{marker} {package}{suffix}"),
                    fg: Some(self.theme.dimmed),
                    italic: true,
                    ..Default::default()
                }],
            );
            for frame in shown {
                self.render_frame(frame, "  ", out);
            }
        }
    }

    fn toggle_control(&self, label: &str, out: &mut Vec<StyledLine>) {
        push_line(
            out,
            vec![StyledSegment {
                text: format!("[{label}]"),
                fg: Some(self.theme.dimmed),
                underline: true,
                ..Default::default()
            }],
        );
    }
}
