//! Element capabilities shared by several page behaviors.

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

/// Something whose CSS class list can be edited.
pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// A navigation link: a class target with an `href`.
pub trait NavLink: ClassTarget {
    fn href(&self) -> Option<String>;
}

/// One batch item from a visibility watcher.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry<T> {
    pub target: T,
    pub is_intersecting: bool,
}

impl<T> VisibilityEntry<T> {
    #[must_use]
    pub fn new(target: T, is_intersecting: bool) -> Self {
        Self { target, is_intersecting }
    }
}

/// Members of a host collection that `cast` accepts, in order.
///
/// Rejected members are skipped. A member that cannot be read fails the whole
/// collection with that error.
///
/// # Errors
///
/// Returns the first read error from `members`.
pub fn filter_members<M, T, E>(
    members: impl IntoIterator<Item = Result<M, E>>,
    cast: impl Fn(M) -> Result<T, M>,
) -> Result<Vec<T>, E> {
    let mut kept = Vec::new();
    for member in members {
        if let Ok(item) = cast(member?) {
            kept.push(item);
        }
    }
    Ok(kept)
}
