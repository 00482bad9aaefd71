//! Noise-frame denylist: engine-synthesized frames removed before triage.

use frame_triage_config::NoiseRuleConfig;

use super::types::StackFrame;

/// The file name engines report for synthesized frames.
pub const ANONYMOUS_FILE: &str = "<anonymous>";

/// Methods that appear as `<anonymous>` frames without diagnostic value.
const ANONYMOUS_NOISE_METHODS: &[&str] = &["stringify", "<unknown>"];

/// One denylist entry: a captured file name plus the method names that are
/// noise when seen in that file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseRule {
    pub file: String,
    pub method_names: Vec<String>,
}

impl NoiseRule {
    /// Whether `frame` matches this rule on its captured location.
    pub fn matches(&self, frame: &StackFrame) -> bool {
        let captured = &frame.source_stack_frame;
        captured.file.as_deref() == Some(self.file.as_str())
            && self
                .method_names
                .iter()
                .any(|m| *m == captured.method_name)
    }
}

impl From<&NoiseRuleConfig> for NoiseRule {
    fn from(config: &NoiseRuleConfig) -> Self {
        Self {
            file: config.file.clone(),
            method_names: config.method_names.clone(),
        }
    }
}

/// Ordered set of noise rules.
///
/// `Default` holds exactly the built-in `<anonymous>` rule. Hosts that know of
/// other synthetic frames add them with [`NoiseDenylist::with_rule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseDenylist {
    rules: Vec<NoiseRule>,
}

impl Default for NoiseDenylist {
    fn default() -> Self {
        Self {
            rules: vec![NoiseRule {
                file: ANONYMOUS_FILE.to_string(),
                method_names: ANONYMOUS_NOISE_METHODS
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
            }],
        }
    }
}

impl NoiseDenylist {
    /// A denylist that removes nothing.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Built-in rules followed by the configured extras.
    pub fn from_config(extra: &[NoiseRuleConfig]) -> Self {
        extra
            .iter()
            .fold(Self::default(), |list, rule| list.with_rule(rule.into()))
    }

    /// Append a rule.
    pub fn with_rule(mut self, rule: NoiseRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[NoiseRule] {
        &self.rules
    }

    /// Whether any rule marks `frame` as noise.
    pub fn is_noise(&self, frame: &StackFrame) -> bool {
        self.rules.iter().any(|rule| rule.matches(frame))
    }
}

/// Drop noise frames, preserving the order of everything else.
///
/// Accepts any iterator of borrowed frames so the output can be fed back in
/// (`filter_noise_frames(filtered.iter().copied(), ..)`).
pub fn filter_noise_frames<'a, I>(frames: I, denylist: &NoiseDenylist) -> Vec<&'a StackFrame>
where
    I: IntoIterator<Item = &'a StackFrame>,
{
    frames
        .into_iter()
        .filter(|frame| !denylist.is_noise(frame))
        .collect()
}
