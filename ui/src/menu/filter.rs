//! Role-based navigation filtering.
//!
//! The filter is a pure function returning a new tree, so the canonical
//! menu definition is never aliased by a per-render filtered view.

use crate::menu::types::MenuItem;

/// Prune `items` down to what `role` may see. Recursive, depth-first and
/// order-preserving:
///
/// 1. an item whose role list excludes `role` is dropped with its entire
///    subtree, without recursing;
/// 2. an item with children keeps only the recursively filtered children
///    and is dropped when none survive, even if its own check passed;
/// 3. a passing leaf is kept unchanged.
pub fn filter_by_role(items: &[MenuItem], role: &str) -> Vec<MenuItem> {
    items
        .iter()
        .filter_map(|item| {
            if !item.allows_role(role) {
                return None;
            }
            if item.children.is_empty() {
                return Some(item.clone());
            }
            let children = filter_by_role(&item.children, role);
            if children.is_empty() {
                None
            } else {
                Some(MenuItem {
                    children,
                    ..item.clone()
                })
            }
        })
        .collect()
}

/// Depth-first pre-order search by item index; returns the first match.
pub fn find_by_index<'a>(items: &'a [MenuItem], index: &str) -> Option<&'a MenuItem> {
    for item in items {
        if item.index == index {
            return Some(item);
        }
        if let Some(found) = find_by_index(&item.children, index) {
            return Some(found);
        }
    }
    None
}
