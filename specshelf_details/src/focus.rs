// Copyright 2025 the Specshelf Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeps keyboard focus inside the open panel.
//!
//! The host lists the panel's focusable elements (links, enabled buttons,
//! inputs) in document order and forwards key presses. Tab and Shift+Tab
//! move normally between elements; only at the two ends does the trap step
//! in and wrap focus around, so it never leaves the panel.

/// Direction of a Tab press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Tab.
    Next,
    /// Shift+Tab.
    Prev,
}

impl Navigation {
    /// Interprets a key press; anything but Tab is not navigation.
    #[must_use]
    pub fn from_key(key: &str, shift: bool) -> Option<Self> {
        match (key, shift) {
            ("Tab", false) => Some(Self::Next),
            ("Tab", true) => Some(Self::Prev),
            _ => None,
        }
    }
}

/// A focusable element inside the trap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Focusable<K> {
    /// Host identifier for the element.
    pub id: K,
    /// Disabled elements are skipped.
    pub enabled: bool,
}

impl<K> Focusable<K> {
    /// An enabled element.
    pub const fn enabled(id: K) -> Self {
        Self { id, enabled: true }
    }

    /// A disabled element.
    pub const fn disabled(id: K) -> Self {
        Self { id, enabled: false }
    }
}

/// What the host should do with a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrapOutcome<K> {
    /// Let the default behaviour happen.
    PassThrough,
    /// Suppress the default behaviour and focus this element instead.
    Redirect(K),
}

/// Wraps Tab navigation around the ends of a list of focusable elements.
#[derive(Clone, Debug, Default)]
pub struct FocusTrap<K> {
    candidates: Vec<K>,
}

impl<K> FocusTrap<K>
where
    K: Copy + Eq,
{
    /// Builds a trap over `elements`, given in document order.
    pub fn new(elements: impl IntoIterator<Item = Focusable<K>>) -> Self {
        Self {
            candidates: elements
                .into_iter()
                .filter_map(|e| e.enabled.then_some(e.id))
                .collect(),
        }
    }

    /// First enabled element.
    #[must_use]
    pub fn first(&self) -> Option<K> {
        self.candidates.first().copied()
    }

    /// Last enabled element.
    #[must_use]
    pub fn last(&self) -> Option<K> {
        self.candidates.last().copied()
    }

    /// Handles a key press while `active` holds focus.
    ///
    /// Tab on the last element goes to the first; Shift+Tab on the first goes
    /// to the last. Everything else passes through, including presses while
    /// focus is outside the trap.
    #[must_use]
    pub fn on_key(&self, key: &str, shift: bool, active: Option<K>) -> TrapOutcome<K> {
        let Some(direction) = Navigation::from_key(key, shift) else {
            return TrapOutcome::PassThrough;
        };
        self.navigate(direction, active)
    }

    /// Same as [`FocusTrap::on_key`] for an already-decoded direction.
    #[must_use]
    pub fn navigate(&self, direction: Navigation, active: Option<K>) -> TrapOutcome<K> {
        let (Some(first), Some(last), Some(active)) = (self.first(), self.last(), active) else {
            return TrapOutcome::PassThrough;
        };
        match direction {
            Navigation::Next if active == last => TrapOutcome::Redirect(first),
            Navigation::Prev if active == first => TrapOutcome::Redirect(last),
            _ => TrapOutcome::PassThrough,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusTrap, Focusable, Navigation, TrapOutcome};

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Id {
        Close,
        Toggle,
        Submit,
        OpenDoc,
    }

    fn trap() -> FocusTrap<Id> {
        FocusTrap::new([
            Focusable::enabled(Id::Close),
            Focusable::enabled(Id::Toggle),
            Focusable::enabled(Id::OpenDoc),
            Focusable::disabled(Id::Submit),
        ])
    }

    #[test]
    fn tab_on_last_wraps_to_first() {
        let trap = trap();
        assert_eq!(trap.last(), Some(Id::OpenDoc));
        assert_eq!(
            trap.on_key("Tab", false, Some(Id::OpenDoc)),
            TrapOutcome::Redirect(Id::Close)
        );
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        assert_eq!(
            trap().on_key("Tab", true, Some(Id::Close)),
            TrapOutcome::Redirect(Id::OpenDoc)
        );
    }

    #[test]
    fn interior_moves_and_other_keys_pass_through() {
        let trap = trap();
        assert_eq!(trap.on_key("Tab", false, Some(Id::Toggle)), TrapOutcome::PassThrough);
        assert_eq!(trap.on_key("Tab", true, Some(Id::OpenDoc)), TrapOutcome::PassThrough);
        assert_eq!(trap.on_key("Enter", false, Some(Id::OpenDoc)), TrapOutcome::PassThrough);
        assert_eq!(trap.on_key("Tab", false, None), TrapOutcome::PassThrough);
    }

    #[test]
    fn empty_trap_never_redirects() {
        let trap: FocusTrap<Id> = FocusTrap::new([Focusable::disabled(Id::Submit)]);
        assert_eq!(trap.first(), None);
        assert_eq!(
            trap.navigate(Navigation::Next, Some(Id::Submit)),
            TrapOutcome::PassThrough
        );
    }

    #[test]
    fn single_element_wraps_onto_itself() {
        let trap = FocusTrap::new([Focusable::enabled(Id::Close)]);
        assert_eq!(
            trap.navigate(Navigation::Next, Some(Id::Close)),
            TrapOutcome::Redirect(Id::Close)
        );
        assert_eq!(
            trap.navigate(Navigation::Prev, Some(Id::Close)),
            TrapOutcome::Redirect(Id::Close)
        );
    }
}
