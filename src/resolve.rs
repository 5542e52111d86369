//! Field resolution: mapping tag -> writable field target.
//!
//! A [`FieldSet`] snapshots a destination record's declared fields once per
//! scan, then answers one [`locate`](FieldSet::locate) query per column.
//! Absence of a matching field is an expected outcome, never an error.

use crate::record::{ScanTarget, TagMapped, TaggedField};

/// The declared fields of one record instance, consumed as columns resolve.
#[derive(Debug)]
pub struct FieldSet<'a> {
    slots: Vec<Option<TaggedField<'a>>>,
}

impl<'a> FieldSet<'a> {
    /// Snapshot `record`'s declared fields, in declaration order.
    pub fn new<R: TagMapped + ?Sized>(record: &'a mut R) -> Self {
        Self {
            slots: record.tagged_fields().into_iter().map(Some).collect(),
        }
    }

    /// Resolve a mapping tag to its field target.
    ///
    /// Fields are examined in declaration order and the first one whose tag
    /// exactly equals `tag` wins; there is no case folding or prefix
    /// matching. Returns `None` when no field matches.
    ///
    /// Each field is handed out at most once: a tag located twice resolves
    /// on the first call and returns `None` on the second, since two live
    /// mutable references to one field cannot coexist.
    pub fn locate(&mut self, tag: &str) -> Option<ScanTarget<'a>> {
        let idx = self
            .slots
            .iter()
            .position(|slot| matches!(slot, Some(field) if field.tag == tag))?;
        self.slots[idx].take().map(|field| field.target)
    }

    /// Number of fields not yet handed out.
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Entity {
        id: i64,
        name: String,
    }

    crate::tag_mapped! {
        Entity {
            id => "id",
            name => "name",
        }
    }

    #[derive(Default)]
    struct Duplicated {
        first: i64,
        second: String,
    }

    crate::tag_mapped! {
        Duplicated {
            first => "value",
            second => "value",
        }
    }

    #[test]
    fn test_locate_finds_matching_field() {
        let mut e = Entity::default();
        let mut fields = FieldSet::new(&mut e);
        let target = fields.locate("name").unwrap();
        assert!(target.is::<String>());
    }

    #[test]
    fn test_locate_unknown_tag_is_none() {
        let mut e = Entity::default();
        let mut fields = FieldSet::new(&mut e);
        assert!(fields.locate("amount").is_none());
        assert_eq!(fields.remaining(), 2);
    }

    #[test]
    fn test_locate_is_exact_match_only() {
        let mut e = Entity::default();
        let mut fields = FieldSet::new(&mut e);
        assert!(fields.locate("ID").is_none());
        assert!(fields.locate("nam").is_none());
        assert!(fields.locate("name ").is_none());
    }

    #[test]
    fn test_first_declared_field_wins_on_duplicate_tags() {
        let mut d = Duplicated::default();
        let mut fields = FieldSet::new(&mut d);
        let target = fields.locate("value").unwrap();
        assert!(target.is::<i64>());
    }

    #[test]
    fn test_field_handed_out_at_most_once() {
        let mut e = Entity::default();
        let mut fields = FieldSet::new(&mut e);
        assert!(fields.locate("id").is_some());
        assert!(fields.locate("id").is_none());
        assert_eq!(fields.remaining(), 1);
    }

    #[test]
    fn test_duplicate_tags_resolve_in_declaration_order() {
        let mut d = Duplicated::default();
        let mut fields = FieldSet::new(&mut d);
        let first = fields.locate("value").unwrap();
        assert!(first.is::<i64>());
        let second = fields.locate("value").unwrap();
        assert!(second.is::<String>());
    }
}
