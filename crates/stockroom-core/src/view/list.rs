// ── List view state ──

use std::sync::Arc;

use crate::model::EntityKind;

/// What a list screen shows for one entity kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<R> {
    /// No fetch has completed yet.
    Loading,
    /// The API returned an empty collection.
    Empty { placeholder: String },
    /// One row per entity, in the order the API returned them.
    Rows(Arc<Vec<R>>),
    /// The last fetch failed; the table shows a single error row.
    Failed { message: String },
}

impl<R> Default for ListView<R> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<R> ListView<R> {
    /// Build from a fetched collection.
    pub fn from_rows(kind: EntityKind, rows: Vec<R>) -> Self {
        if rows.is_empty() {
            Self::Empty {
                placeholder: empty_placeholder(kind),
            }
        } else {
            Self::Rows(Arc::new(rows))
        }
    }

    pub fn failed(kind: EntityKind) -> Self {
        Self::Failed {
            message: failure_placeholder(kind),
        }
    }

    /// Rendered rows; empty for every non-`Rows` state.
    pub fn rows(&self) -> &[R] {
        match self {
            Self::Rows(rows) => rows.as_slice(),
            _ => &[],
        }
    }

    /// Text for the single placeholder row, when there are no data rows.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Loading => Some("Loading..."),
            Self::Empty { placeholder } => Some(placeholder),
            Self::Failed { message } => Some(message),
            Self::Rows(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// "No products found", etc.
pub fn empty_placeholder(kind: EntityKind) -> String {
    format!("No {} found", kind.collection())
}

/// "Error loading products", etc.
pub fn failure_placeholder(kind: EntityKind) -> String {
    format!("Error loading {}", kind.collection())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_gets_placeholder_row() {
        let view: ListView<u8> = ListView::from_rows(EntityKind::Supplier, Vec::new());
        assert_eq!(view.placeholder(), Some("No suppliers found"));
        assert!(view.rows().is_empty());
    }

    #[test]
    fn rows_have_no_placeholder() {
        let view = ListView::from_rows(EntityKind::Product, vec![1, 2, 3]);
        assert_eq!(view.rows(), &[1, 2, 3]);
        assert_eq!(view.placeholder(), None);
    }

    #[test]
    fn failure_placeholder_names_collection() {
        let view: ListView<u8> = ListView::failed(EntityKind::Order);
        assert!(view.is_failed());
        assert_eq!(view.placeholder(), Some("Error loading orders"));
    }
}
