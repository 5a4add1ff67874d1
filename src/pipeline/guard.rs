use std::cell::Cell;

/// Scoped marker for a nested entry-processing pass. While one is alive, the
/// processor's own ToC logic is suppressed; the flag is cleared on drop, so an
/// error propagating out of the nested call cannot leave it set.
pub struct NestedPassGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> NestedPassGuard<'a> {
    pub fn acquire(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        NestedPassGuard { flag }
    }
}

impl Drop for NestedPassGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
