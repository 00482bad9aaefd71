//! Runtime error data model, as delivered by the capturing side.
//!
//! Field names serialize in camelCase so documents produced by the browser
//! overlay client deserialize without translation.

use serde::{Deserialize, Serialize};

use super::error::TriageError;

/// A location in a call stack: either as captured at runtime or as
/// translated back to original source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameLocation {
    /// File or URL of the frame (`<anonymous>` for engine-synthesized frames).
    #[serde(default)]
    pub file: Option<String>,
    /// Function or method name as reported by the engine.
    pub method_name: String,
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

impl FrameLocation {
    /// `file:line:column`, dropping whichever parts are unknown.
    pub fn display_location(&self) -> Option<String> {
        let file = self.file.as_deref()?;
        Some(match (self.line_number, self.column) {
            (Some(line), Some(col)) => format!("{file}:{line}:{col}"),
            (Some(line), None) => format!("{file}:{line}"),
            _ => file.to_string(),
        })
    }
}

/// One captured stack frame together with its source-resolution results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    /// The frame as captured at runtime, before translation.
    pub source_stack_frame: FrameLocation,
    /// Translated frame; present only if source mapping succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_stack_frame: Option<FrameLocation>,
    /// Rendered source-context snippet for `original_stack_frame`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_code_frame: Option<String>,
    /// First-party hint set upstream.
    #[serde(default)]
    pub expanded: bool,
    /// Owning framework tag set upstream (e.g. "react", "next").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_package: Option<String>,
}

impl StackFrame {
    /// A frame that has only its captured location.
    pub fn captured(file: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            source_stack_frame: FrameLocation {
                file: Some(file.into()),
                method_name: method_name.into(),
                ..Default::default()
            },
            original_stack_frame: None,
            original_code_frame: None,
            expanded: false,
            source_package: None,
        }
    }

    /// Attach a resolved original location and its code snippet.
    pub fn with_original(mut self, original: FrameLocation, code_frame: impl Into<String>) -> Self {
        self.original_stack_frame = Some(original);
        self.original_code_frame = Some(code_frame.into());
        self
    }

    /// Set the first-party hint.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Set the owning framework tag.
    pub fn with_source_package(mut self, package: impl Into<String>) -> Self {
        self.source_package = Some(package.into());
        self
    }

    /// The location to show for this frame: original when resolved,
    /// otherwise the captured one.
    pub fn display_frame(&self) -> &FrameLocation {
        self.original_stack_frame
            .as_ref()
            .unwrap_or(&self.source_stack_frame)
    }

    /// Whether this frame has both halves of a resolved source snippet.
    /// An empty snippet counts as missing.
    pub fn has_resolved_source(&self) -> bool {
        self.original_stack_frame.is_some()
            && self
                .original_code_frame
                .as_deref()
                .is_some_and(|code| !code.is_empty())
    }
}

/// One entry of the component tree at the time of the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStackFrame {
    pub component: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub line_number: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

/// Name and message of the thrown error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

/// A runtime error ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeError {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub error: ErrorInfo,
    pub frames: Vec<StackFrame>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_stack_frames: Option<Vec<ComponentStackFrame>>,
}

impl RuntimeError {
    /// An error with the given frames and no component stack.
    pub fn new(frames: Vec<StackFrame>) -> Self {
        Self {
            id: 0,
            error: ErrorInfo::default(),
            frames,
            component_stack_frames: None,
        }
    }

    /// Parse a JSON document and check its data contract.
    pub fn from_json(json: &str) -> Result<Self, TriageError> {
        let error: RuntimeError = serde_json::from_str(json)?;
        error.validate()?;
        Ok(error)
    }

    /// A code snippet is only meaningful alongside the location it was
    /// rendered for, so a non-empty `originalCodeFrame` without
    /// `originalStackFrame` is rejected.
    pub fn validate(&self) -> Result<(), TriageError> {
        match self
            .frames
            .iter()
            .position(|f| {
                f.original_code_frame
                    .as_deref()
                    .is_some_and(|code| !code.is_empty())
                    && f.original_stack_frame.is_none()
            })
        {
            Some(index) => Err(TriageError::CodeFrameWithoutOriginal { index }),
            None => Ok(()),
        }
    }

    /// The component stack, empty when none was captured.
    pub fn component_stack(&self) -> &[ComponentStackFrame] {
        self.component_stack_frames.as_deref().unwrap_or(&[])
    }
}
