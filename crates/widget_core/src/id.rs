//! Generic, UI-agnostic identifier for widget instances.
//!
//! This type intentionally uses a plain `u64` to avoid coupling to any DOM
//! or framework-specific identifier type. Binding layers provide the
//! conversion from their native id types.

/// Opaque identifier for a widget within a
/// [`DropdownStore`](crate::DropdownStore).
///
/// This is a lightweight, copyable handle that uniquely identifies one
/// widget instance. The actual value has no semantic meaning within this
/// crate—it's just a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Create a `WidgetId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for WidgetId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<u32> for WidgetId {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw as u64)
    }
}

impl From<WidgetId> for u64 {
    #[inline]
    fn from(id: WidgetId) -> Self {
        id.as_raw()
    }
}
