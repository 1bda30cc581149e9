use std::cmp::min;

/// Selection and scroll bookkeeping for the catalog list.
#[derive(Debug, Default)]
pub(crate) struct ListScreen {
    pub(crate) selected: usize,
    len: usize,
}

impl ListScreen {
    pub(crate) fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.len == 0 {
            return;
        }
        let len = self.len as isize;
        let new = (self.selected as isize + offset).clamp(0, len - 1);
        self.selected = new as usize;
    }

    pub(crate) fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    pub(crate) fn select_first(&mut self) {
        if self.len > 0 {
            self.selected = 0;
        }
    }

    pub(crate) fn select_last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Rows to draw when only `capacity` fit, keeping the selection visible
    /// at the bottom edge once it scrolls past the first page.
    pub(crate) fn visible_range(&self, capacity: usize) -> (usize, usize) {
        let capacity = capacity.max(1);
        let mut start = if self.selected >= capacity {
            self.selected + 1 - capacity
        } else {
            0
        };
        if start + capacity > self.len {
            start = self.len.saturating_sub(capacity);
        }
        (start, min(start + capacity, self.len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_clamped() {
        let mut list = ListScreen::new(3);
        list.move_selection(-1);
        assert_eq!(list.selected, 0);
        list.move_selection(10);
        assert_eq!(list.selected, 2);
        list.select(7);
        assert_eq!(list.selected, 2);
        list.select_first();
        assert_eq!(list.selected, 0);
        list.select_last();
        assert_eq!(list.selected, 2);
    }

    #[test]
    fn empty_list_ignores_movement() {
        let mut list = ListScreen::new(0);
        list.move_selection(1);
        list.select_last();
        assert_eq!(list.selected, 0);
        assert_eq!(list.visible_range(4), (0, 0));
    }

    #[test]
    fn visible_range_follows_the_selection() {
        let mut list = ListScreen::new(18);
        assert_eq!(list.visible_range(5), (0, 5));

        list.select(7);
        assert_eq!(list.visible_range(5), (3, 8));

        list.select_last();
        assert_eq!(list.visible_range(5), (13, 18));
        assert_eq!(list.visible_range(40), (0, 18));
    }
}
