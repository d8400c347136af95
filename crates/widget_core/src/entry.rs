//! Selectable option entries.

/// One selectable item within a drop-down widget.
///
/// `value` is the machine-readable logical value, distinct from the display
/// text. An entry without a logical value only closes the widget when
/// selected; it never changes the bound value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    /// Human-readable text shown for this entry.
    pub text: String,

    /// Logical value carried by this entry, if any.
    pub value: Option<String>,
}

impl OptionEntry {
    pub fn new(text: impl Into<String>, value: Option<String>) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }
}
