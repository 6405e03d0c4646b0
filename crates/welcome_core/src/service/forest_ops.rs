//! Pure mutations over an in-memory category forest.
//!
//! # Responsibility
//! - Implement category/subcategory/project mutations without I/O.
//! - Report whether the forest changed so callers can skip redundant writes.
//!
//! # Invariants
//! - Searches are depth-first in list order; the first match wins.
//! - Subcategories are only ever created under root categories, so nesting
//!   depth stays at two.
//! - A project path appears at most once per category.

use crate::model::category::{Category, Forest};
use crate::model::project::Project;

/// Finds the first category matching `predicate` and applies `action` to it.
///
/// Visits each category before its subcategories, and a category's
/// subcategories before its next sibling. Returns `None` when nothing matches.
pub fn visit_first_mut<R>(
    categories: &mut [Category],
    predicate: impl Fn(&Category) -> bool,
    action: impl FnOnce(&mut Category) -> R,
) -> Option<R> {
    find_first_mut(categories, &predicate).map(action)
}

fn find_first_mut<'a>(
    categories: &'a mut [Category],
    predicate: &impl Fn(&Category) -> bool,
) -> Option<&'a mut Category> {
    for category in categories.iter_mut() {
        if predicate(category) {
            return Some(category);
        }
        if let Some(children) = category.subcategories.as_mut() {
            if let Some(found) = find_first_mut(children, predicate) {
                return Some(found);
            }
        }
    }
    None
}

/// Read-only lookup by id at any depth.
pub fn find_category<'a>(categories: &'a [Category], category_id: &str) -> Option<&'a Category> {
    for category in categories {
        if category.id == category_id {
            return Some(category);
        }
        if let Some(found) = find_category(category.children(), category_id) {
            return Some(found);
        }
    }
    None
}

/// Appends a new empty root category and returns a copy of it.
pub fn create_category(forest: &mut Forest, name: impl Into<String>) -> Category {
    let category = Category::new_root(name);
    forest.push(category.clone());
    category
}

/// Appends a new subcategory under the root category `parent_id`.
///
/// Returns `None` without touching the forest when no root has that id or the
/// matched category is itself a subcategory.
pub fn create_subcategory(
    forest: &mut Forest,
    parent_id: &str,
    name: impl Into<String>,
) -> Option<Category> {
    let parent = forest.iter_mut().find(|category| category.id == parent_id)?;
    if parent.is_subcategory() {
        return None;
    }

    let child = Category::new_child(parent_id, name);
    parent
        .subcategories
        .get_or_insert_with(Vec::new)
        .push(child.clone());
    Some(child)
}

/// Adds `project` to the category `category_id` at any depth.
///
/// Returns `false` when the category is unknown or already holds the path.
pub fn add_project(forest: &mut Forest, category_id: &str, project: Project) -> bool {
    visit_first_mut(
        forest,
        |category| category.id == category_id,
        |category| {
            if category.has_project(&project.path) {
                return false;
            }
            category.projects.push(project);
            true
        },
    )
    .unwrap_or(false)
}

/// Removes every project with `path` from the category `category_id` only.
///
/// Returns `true` when at least one project was removed.
pub fn remove_project(forest: &mut Forest, category_id: &str, path: &str) -> bool {
    visit_first_mut(
        forest,
        |category| category.id == category_id,
        |category| {
            let before = category.projects.len();
            category.projects.retain(|project| project.path != path);
            category.projects.len() != before
        },
    )
    .unwrap_or(false)
}

/// Removes the category `category_id` together with its subtree.
///
/// Root categories are checked first; otherwise the first parent (in
/// depth-first order) listing the id among its subcategories loses it.
pub fn remove_category(forest: &mut Forest, category_id: &str) -> Option<Category> {
    if let Some(index) = forest
        .iter()
        .position(|category| category.id == category_id)
    {
        return Some(forest.remove(index));
    }

    visit_first_mut(
        forest,
        |category| {
            category
                .children()
                .iter()
                .any(|child| child.id == category_id)
        },
        |parent| {
            let children = parent.subcategories.as_mut()?;
            let index = children.iter().position(|child| child.id == category_id)?;
            Some(children.remove(index))
        },
    )
    .flatten()
}
