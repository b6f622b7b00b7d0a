//! Rows that carry an identity of their own.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{AnalysisError, AnalysisResult};

/// A table row identified by a key that must be unique within its table.
pub trait Entity {
    type Id: Eq + Hash + Display;

    fn id(&self) -> &Self::Id;
}

/// Reject a table in which two rows share an id.
///
/// Reports the first repeated id in row order.
pub fn ensure_unique_ids<E: Entity>(rows: &[E]) -> AnalysisResult<()> {
    let mut seen = HashSet::with_capacity(rows.len());
    for row in rows {
        if !seen.insert(row.id()) {
            return Err(AnalysisError::schema(format!("duplicate id {}", row.id())));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl Entity for Row {
        type Id = &'static str;

        fn id(&self) -> &Self::Id {
            &self.0
        }
    }

    #[test]
    fn first_repeated_id_is_reported() {
        assert!(ensure_unique_ids(&[Row("a"), Row("b")]).is_ok());

        let err = ensure_unique_ids(&[Row("a"), Row("b"), Row("b"), Row("a")]).unwrap_err();
        assert_eq!(err, AnalysisError::SchemaViolation("duplicate id b".into()));
    }
}
