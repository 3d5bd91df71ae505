//! Image carousel that routes around images which fail to load.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Carousel {
    images: Vec<String>,
    /// Only grows; failed URLs are never retried.
    failed: HashSet<String>,
    /// Index into `images`, always a non-failed entry while one exists.
    current: usize,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            failed: HashSet::new(),
            current: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.visible_indices().is_empty()
    }

    /// Images still eligible for display, in original order.
    pub fn visible(&self) -> Vec<&str> {
        self.visible_indices()
            .into_iter()
            .map(|idx| self.images[idx].as_str())
            .collect()
    }

    pub fn current(&self) -> Option<&str> {
        let url = self.images.get(self.current)?;
        (!self.failed.contains(url)).then_some(url.as_str())
    }

    /// Position of the displayed image within [`Carousel::visible`].
    pub fn position(&self) -> Option<usize> {
        self.current()?;
        self.visible_indices()
            .iter()
            .position(|&idx| idx == self.current)
    }

    /// Records a load failure. When the displayed image failed, moves on to
    /// the next loadable image in original order, wrapping around.
    pub fn mark_failed(&mut self, url: &str) {
        if !self.failed.insert(url.to_string()) {
            return;
        }
        if self.current().is_some() {
            return;
        }
        if let Some(next) = self.next_loadable_after(self.current) {
            self.current = next;
        }
    }

    pub fn next(&mut self) {
        self.step(|pos, len| (pos + 1) % len);
    }

    pub fn previous(&mut self) {
        self.step(|pos, len| (pos + len - 1) % len);
    }

    /// Dot navigation: `visible_index` indexes [`Carousel::visible`].
    pub fn select(&mut self, visible_index: usize) {
        if let Some(&idx) = self.visible_indices().get(visible_index) {
            self.current = idx;
        }
    }

    fn step(&mut self, advance: impl Fn(usize, usize) -> usize) {
        let visible = self.visible_indices();
        let Some(pos) = self.position() else {
            return;
        };
        self.current = visible[advance(pos, visible.len())];
    }

    fn visible_indices(&self) -> Vec<usize> {
        self.images
            .iter()
            .enumerate()
            .filter(|(_, url)| !self.failed.contains(*url))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn next_loadable_after(&self, from: usize) -> Option<usize> {
        let len = self.images.len();
        (1..=len)
            .map(|offset| (from + offset) % len)
            .find(|&idx| !self.failed.contains(&self.images[idx]))
    }
}
