//! Catalog rotation with wraparound. Used by manual navigation and by the
//! post-correct auto-advance.

use serde::Serialize;

use crate::domain::catalog::SymbolCatalog;
use crate::domain::symbol::Symbol;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Forward,
    Backward,
}

/// Symbol adjacent to `current` in catalog order.
///
/// - Empty catalog → Unknown.
/// - `current` not in the catalog → first entry (Forward) or last (Backward).
/// - Otherwise step once, wrapping at either end.
pub fn rotate(catalog: &SymbolCatalog, current: &str, direction: Direction) -> Symbol {
    let (Some(first), Some(last)) = (catalog.first(), catalog.last()) else {
        return Symbol::unknown();
    };

    let Some(index) = catalog.position(current) else {
        return match direction {
            Direction::Forward => first.clone(),
            Direction::Backward => last.clone(),
        };
    };

    let next = match direction {
        Direction::Forward => catalog.get(index + 1).unwrap_or(first),
        Direction::Backward => index
            .checked_sub(1)
            .and_then(|i| catalog.get(i))
            .unwrap_or(last),
    };
    next.clone()
}
