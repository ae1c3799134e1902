//! Lazy image loading.
//!
//! Images ship with their real URL in `data-src` and no `src`. The first time
//! an image is seen the URL moves into `src` and the image is released from
//! the watcher.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use crate::util::target::VisibilityEntry;

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const DATA_SRC_ATTR: &str = "data-src";

/// An image whose source can be deferred.
pub trait LazyImage {
    fn deferred_src(&self) -> Option<String>;
    fn set_src(&self, src: &str);
    fn clear_deferred_src(&self);
}

/// Move the deferred URL into `src`. Returns false when there was none.
pub fn load<I: LazyImage>(image: &I) -> bool {
    let Some(src) = image.deferred_src() else {
        return false;
    };
    image.set_src(&src);
    image.clear_deferred_src();
    true
}

/// Handle one watcher batch; returns the images to stop observing.
pub fn on_entries<I: LazyImage>(entries: impl IntoIterator<Item = VisibilityEntry<I>>) -> Vec<I> {
    entries
        .into_iter()
        .filter(|entry| entry.is_intersecting)
        .map(|entry| {
            load(&entry.target);
            entry.target
        })
        .collect()
}

/// Fallback for hosts without a visibility watcher: load everything now.
///
/// Returns how many images had a deferred source.
pub fn load_all<I: LazyImage>(images: impl IntoIterator<Item = I>) -> usize {
    images.into_iter().filter(|image| load(image)).count()
}
