/// Rows of one list pane plus its selection.
///
/// `selected` is `None` exactly when `items` is empty; otherwise it always
/// points at an existing row.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ScrollState {
    items: Vec<String>,
    selected: Option<usize>,
}

/// The slice of rows a pane shows for a given height.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Window<'a> {
    pub start: usize,
    pub rows: &'a [String],
    pub highlighted: Option<usize>,
}

impl ScrollState {
    pub fn new(items: Vec<String>) -> Self {
        let mut state = Self::default();
        state.set_items(items);
        state
    }

    #[cfg(test)]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[cfg(test)]
    fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    /// Replaces the rows, keeping the selection by position.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = match (self.items.len(), self.selected) {
            (0, _) => None,
            (len, Some(current)) => Some(current.min(len - 1)),
            (_, None) => Some(0),
        };
    }

    pub fn scroll_down(&mut self) {
        self.move_by(1);
    }

    pub fn scroll_up(&mut self) {
        self.move_by(-1);
    }

    pub fn scroll_half_page_down(&mut self, rows: usize) {
        self.move_by(half_page(rows));
    }

    pub fn scroll_half_page_up(&mut self, rows: usize) {
        self.move_by(-half_page(rows));
    }

    pub fn scroll_page_down(&mut self, rows: usize) {
        self.move_by(full_page(rows));
    }

    pub fn scroll_page_up(&mut self, rows: usize) {
        self.move_by(-full_page(rows));
    }

    pub fn scroll_top(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn scroll_bottom(&mut self) {
        if !self.items.is_empty() {
            self.selected = Some(self.items.len() - 1);
        }
    }

    /// Rows to draw in a pane `rows` lines tall. The window starts at the
    /// selection and is only pulled back to keep the pane full near the end.
    pub fn window(&self, rows: usize) -> Window<'_> {
        let Some(selected) = self.selected else {
            return Window {
                start: 0,
                rows: &[],
                highlighted: None,
            };
        };
        if rows == 0 {
            return Window {
                start: selected,
                rows: &[],
                highlighted: None,
            };
        }

        let start = selected.min(self.items.len().saturating_sub(rows));
        let end = (start + rows).min(self.items.len());
        Window {
            start,
            rows: &self.items[start..end],
            highlighted: Some(selected - start),
        }
    }

    fn move_by(&mut self, delta: isize) {
        let Some(current) = self.selected else {
            return;
        };
        let max_index = self.items.len().saturating_sub(1) as isize;
        let next = (current as isize).saturating_add(delta).clamp(0, max_index);
        self.selected = Some(next as usize);
    }
}

fn half_page(rows: usize) -> isize {
    (rows / 2).min(isize::MAX as usize) as isize
}

fn full_page(rows: usize) -> isize {
    rows.min(isize::MAX as usize) as isize
}
