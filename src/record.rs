//! Destination record types and writable field targets.
//!
//! A destination record declares, at the type level, which mapping tag each
//! of its fields answers to. [`TagMapped`] exposes that declaration as an
//! ordered list of [`TaggedField`]s; [`ScanTarget`] is the writable,
//! type-erased reference a row source populates.

use std::any::{type_name, Any};

use crate::error::{AssignError, AssignResult};

/// A writable, type-erased reference to one field of one record instance.
///
/// This is the unit a [`RowSource`](crate::source::RowSource) receives: the
/// source knows the row's value types, downcasts through [`ScanTarget::put`],
/// and writes in place. Targets live only for the duration of a single scan
/// call.
pub struct ScanTarget<'a> {
    slot: &'a mut dyn Any,
}

impl std::fmt::Debug for ScanTarget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScanTarget").finish_non_exhaustive()
    }
}

impl<'a> ScanTarget<'a> {
    /// Wrap a mutable field reference.
    pub fn new<T: Any>(slot: &'a mut T) -> Self {
        Self { slot }
    }

    /// Whether the underlying field has type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.slot.is::<T>()
    }

    /// Write `value` into the field, failing if the field is not a `T`.
    pub fn put<T: Any>(&mut self, value: T) -> AssignResult<()> {
        match self.slot.downcast_mut::<T>() {
            Some(field) => {
                *field = value;
                Ok(())
            }
            None => Err(AssignError::TypeMismatch {
                offered: type_name::<T>(),
            }),
        }
    }
}

/// One declared field of a destination record: its mapping tag plus a
/// writable target.
#[derive(Debug)]
pub struct TaggedField<'a> {
    /// The mapping tag declared on the field.
    pub tag: &'static str,
    /// Writable reference to the field.
    pub target: ScanTarget<'a>,
}

impl<'a> TaggedField<'a> {
    /// Pair a mapping tag with a mutable field reference.
    pub fn new<T: Any>(tag: &'static str, slot: &'a mut T) -> Self {
        Self {
            tag,
            target: ScanTarget::new(slot),
        }
    }
}

/// A destination record whose fields carry mapping tags.
///
/// Implementations list the record's top-level declared fields, in
/// declaration order. Nested or embedded aggregates are not descended into:
/// resolution scope is exactly the list returned here. The
/// [`tag_mapped!`](crate::tag_mapped) macro generates conforming impls.
pub trait TagMapped {
    /// The record's declared fields, in declaration order.
    ///
    /// Splits the `&mut self` borrow once, so every field target coexists
    /// for the duration of one scan call.
    fn tagged_fields(&mut self) -> Vec<TaggedField<'_>>;
}

/// Implement [`TagMapped`] for a struct from a `field => "tag"` list.
///
/// List the fields in declaration order; only direct (top-level) fields are
/// accepted.
///
/// # Example
/// ```
/// use rowscan::tag_mapped;
///
/// #[derive(Default)]
/// struct Entity {
///     id: i64,
///     name: String,
/// }
///
/// tag_mapped! {
///     Entity {
///         id => "id",
///         name => "name",
///     }
/// }
/// ```
#[macro_export]
macro_rules! tag_mapped {
    ($ty:ty { $($field:ident => $tag:literal),+ $(,)? }) => {
        impl $crate::record::TagMapped for $ty {
            fn tagged_fields(
                &mut self,
            ) -> ::std::vec::Vec<$crate::record::TaggedField<'_>> {
                ::std::vec![
                    $($crate::record::TaggedField::new($tag, &mut self.$field)),+
                ]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Entity {
        id: i64,
        name: String,
        description: String,
    }

    crate::tag_mapped! {
        Entity {
            id => "id",
            name => "name",
            description => "description",
        }
    }

    #[test]
    fn test_macro_preserves_declaration_order() {
        let mut e = Entity::default();
        let fields = e.tagged_fields();
        let tags: Vec<&str> = fields.iter().map(|f| f.tag).collect();
        assert_eq!(tags, vec!["id", "name", "description"]);
    }

    #[test]
    fn test_put_writes_through() {
        let mut e = Entity::default();
        {
            let mut fields = e.tagged_fields();
            fields[1].target.put("Alice".to_string()).unwrap();
            fields[0].target.put(7i64).unwrap();
        }
        assert_eq!(e.id, 7);
        assert_eq!(e.name, "Alice");
    }

    #[test]
    fn test_put_rejects_wrong_type() {
        let mut e = Entity::default();
        let mut fields = e.tagged_fields();
        let err = fields[0].target.put("not a number".to_string());
        assert!(matches!(err, Err(AssignError::TypeMismatch { .. })));
    }

    #[test]
    fn test_is_reports_field_type() {
        let mut e = Entity::default();
        let fields = e.tagged_fields();
        assert!(fields[0].target.is::<i64>());
        assert!(!fields[0].target.is::<String>());
        assert!(fields[1].target.is::<String>());
    }
}
