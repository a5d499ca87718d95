//! Typed handle tables for values owned across the C boundary.
//!
//! A handle packs three fields into a `u64`:
//!
//! ```text
//!  63      56 55             32 31                0
//! +----------+-----------------+-------------------+
//! |   kind   |      slot       |    generation     |
//! +----------+-----------------+-------------------+
//! ```
//!
//! `kind` identifies the table that issued the handle, so a string handle
//! passed to an array function is rejected instead of resolving to
//! whatever array sits in the same slot. `kind` 0 is never issued, which
//! keeps the all-zero handle invalid everywhere.
//!
//! Releasing a value advances its slot's generation. A slot whose
//! generation cannot advance any further is never reused.

/// Table kind for owned strings.
pub(crate) const STRING_KIND: u8 = 1;
/// Table kind for integer arrays.
pub(crate) const ARRAY_KIND: u8 = 2;

const SLOT_BITS: u32 = 24;
const SLOT_LIMIT: usize = 1 << SLOT_BITS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Handle {
    kind: u8,
    slot: u32,
    generation: u32,
}

impl Handle {
    fn to_raw(self) -> u64 {
        (u64::from(self.kind) << 56) | (u64::from(self.slot) << 32) | u64::from(self.generation)
    }

    fn from_raw(raw: u64) -> Self {
        Self {
            kind: (raw >> 56) as u8,
            slot: (raw >> 32) as u32 & (SLOT_LIMIT as u32 - 1),
            generation: raw as u32,
        }
    }
}

/// Owned values addressed by handles of one `KIND`.
///
/// Generations and values are kept in parallel vectors indexed by slot.
pub(crate) struct HandleTable<T, const KIND: u8> {
    generations: Vec<u32>,
    values: Vec<Option<T>>,
    reusable: Vec<u32>,
}

impl<T, const KIND: u8> HandleTable<T, KIND> {
    pub(crate) const fn new() -> Self {
        Self {
            generations: Vec::new(),
            values: Vec::new(),
            reusable: Vec::new(),
        }
    }

    /// Take ownership of `value` and return its handle.
    ///
    /// Returns `None` once every slot has been issued and none is free.
    pub(crate) fn insert(&mut self, value: T) -> Option<u64> {
        let slot = match self.reusable.pop() {
            Some(slot) => slot,
            None if self.values.len() < SLOT_LIMIT => {
                self.generations.push(0);
                self.values.push(None);
                (self.values.len() - 1) as u32
            }
            None => return None,
        };
        self.values[slot as usize] = Some(value);
        let handle = Handle {
            kind: KIND,
            slot,
            generation: self.generations[slot as usize],
        };
        Some(handle.to_raw())
    }

    /// Slot index of a live value, if `raw` was issued by this table and
    /// its value has not been released.
    fn live_slot(&self, raw: u64) -> Option<usize> {
        let handle = Handle::from_raw(raw);
        if handle.kind != KIND {
            return None;
        }
        let slot = handle.slot as usize;
        let current = *self.generations.get(slot)?;
        (current == handle.generation && self.values[slot].is_some()).then_some(slot)
    }

    pub(crate) fn get(&self, raw: u64) -> Option<&T> {
        let slot = self.live_slot(raw)?;
        self.values[slot].as_ref()
    }

    pub(crate) fn get_mut(&mut self, raw: u64) -> Option<&mut T> {
        let slot = self.live_slot(raw)?;
        self.values[slot].as_mut()
    }

    /// Give back ownership of the value behind `raw`.
    pub(crate) fn remove(&mut self, raw: u64) -> Option<T> {
        let slot = self.live_slot(raw)?;
        let value = self.values[slot].take();
        if let Some(next) = self.generations[slot].checked_add(1) {
            self.generations[slot] = next;
            self.reusable.push(slot as u32);
        }
        value
    }

    #[cfg(test)]
    fn live(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Strings = HandleTable<&'static str, STRING_KIND>;
    type Arrays = HandleTable<Vec<i32>, ARRAY_KIND>;

    #[test]
    fn inserted_value_is_reachable() {
        let mut table = Strings::new();
        let h = table.insert("hello").unwrap();
        assert_eq!(table.get(h), Some(&"hello"));
        assert_eq!(table.live(), 1);
    }

    #[test]
    fn handle_carries_issuing_kind() {
        let mut strings = Strings::new();
        let mut arrays = Arrays::new();
        let s = strings.insert("x").unwrap();
        let a = arrays.insert(vec![1]).unwrap();
        assert_eq!(Handle::from_raw(s).kind, STRING_KIND);
        assert_eq!(Handle::from_raw(a).kind, ARRAY_KIND);
        assert_ne!(s, a);
        assert_ne!(s, 0);
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut strings = Strings::new();
        let mut arrays = Arrays::new();
        let s = strings.insert("x").unwrap();
        let a = arrays.insert(vec![1, 2]).unwrap();

        assert_eq!(arrays.get(s), None);
        assert_eq!(arrays.get_mut(s), None);
        assert_eq!(arrays.remove(s), None);
        assert_eq!(strings.remove(a), None);

        assert_eq!(arrays.get(a).unwrap(), &[1, 2]);
        assert_eq!(strings.get(s), Some(&"x"));
    }

    #[test]
    fn zero_handle_never_resolves() {
        let mut table = Strings::new();
        table.insert("x").unwrap();
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn mutation_through_handle() {
        let mut table = Arrays::new();
        let h = table.insert(vec![1, 2]).unwrap();
        table.get_mut(h).unwrap().push(3);
        assert_eq!(table.get(h).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn released_handle_is_dead_and_release_is_once() {
        let mut table = Strings::new();
        let h = table.insert("x").unwrap();
        assert_eq!(table.remove(h), Some("x"));
        assert_eq!(table.get(h), None);
        assert_eq!(table.get_mut(h), None);
        assert_eq!(table.remove(h), None);
        assert_eq!(table.live(), 0);
    }

    #[test]
    fn reused_slot_does_not_revive_old_handle() {
        let mut table = Strings::new();
        let old = table.insert("old").unwrap();
        table.remove(old);
        let new = table.insert("new").unwrap();

        let (old_h, new_h) = (Handle::from_raw(old), Handle::from_raw(new));
        assert_eq!(old_h.slot, new_h.slot);
        assert_eq!(new_h.generation, old_h.generation + 1);
        assert_eq!(table.get(old), None);
        assert_eq!(table.get(new), Some(&"new"));
    }

    #[test]
    fn unissued_slot_is_rejected() {
        let mut table = Strings::new();
        table.insert("x").unwrap();
        let far = Handle {
            kind: STRING_KIND,
            slot: 12,
            generation: 0,
        };
        assert_eq!(table.get(far.to_raw()), None);
    }

    #[test]
    fn exhausted_generation_retires_slot() {
        let mut table = Strings::new();
        let first = table.insert("a").unwrap();
        table.remove(first);
        table.generations[0] = u32::MAX;

        let last = table.insert("b").unwrap();
        assert_eq!(Handle::from_raw(last).generation, u32::MAX);
        assert_eq!(table.remove(last), Some("b"));
        assert_eq!(table.generations[0], u32::MAX);
        assert!(table.reusable.is_empty());
        assert_eq!(table.get(last), None);

        let fresh = table.insert("c").unwrap();
        assert_eq!(Handle::from_raw(fresh).slot, 1);
    }
}
