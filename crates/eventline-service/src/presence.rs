//! Field-presence rules for request payloads.
//!
//! Inherited quirk, kept on purpose: a supplied-but-empty value counts as
//! "not supplied". In partial updates this means an explicit empty-string
//! title (or the nil UUID for `createdBy`) cannot be stored — the existing
//! value is left intact. These two helpers are the only place the rule
//! lives; callers must not re-implement it.

use uuid::Uuid;

/// A string field is provided when it is present and non-empty.
pub fn provided_str(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// An id field is provided when it is present and not the nil UUID.
pub fn provided_id(value: Option<Uuid>) -> Option<Uuid> {
    value.filter(|id| !id.is_nil())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_counts_as_absent() {
        assert_eq!(provided_str(None), None);
        assert_eq!(provided_str(Some("")), None);
        assert_eq!(provided_str(Some("x")), Some("x"));
    }

    #[test]
    fn test_nil_uuid_counts_as_absent() {
        assert_eq!(provided_id(None), None);
        assert_eq!(provided_id(Some(Uuid::nil())), None);

        let id = Uuid::new_v4();
        assert_eq!(provided_id(Some(id)), Some(id));
    }
}
