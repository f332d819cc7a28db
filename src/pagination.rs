use serde::Serialize;

/// How many page links a list screen shows around the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Links pinned at each end of the range.
    pub edge: usize,
    pub before: usize,
    pub after: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            edge: 2,
            before: 2,
            after: 4,
        }
    }
}

impl PageWindow {
    /// Page links for `current` out of `last` pages, `None` marking a gap.
    ///
    /// `current` is clamped into `1..=last`, so a page past the end still
    /// links back to the real last page.
    pub fn links(&self, current: usize, last: usize) -> Vec<Option<usize>> {
        if last == 0 {
            return vec![];
        }

        let current = current.clamp(1, last);
        let spans = [
            (1, self.edge.min(last)),
            (
                current.saturating_sub(self.before).max(1),
                current.saturating_add(self.after).min(last),
            ),
            (last.saturating_sub(self.edge).saturating_add(1), last),
        ];

        let mut links = Vec::new();
        // Highest page already emitted; spans are visited in ascending order.
        let mut shown: usize = 0;
        for (start, end) in spans {
            let start = start.max(shown.saturating_add(1));
            if start > end {
                continue;
            }
            if start > shown.saturating_add(1) {
                links.push(None);
            }
            links.extend((start..=end).map(Some));
            shown = end;
        }
        if shown < last {
            links.push(None);
        }

        links
    }
}

/// One page of results plus the metadata a list screen needs.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<T> {
    pub data: Vec<T>,
    /// Number of matches across all pages.
    pub total: usize,
    /// Requested page, echoed even when it lies past the last one.
    pub page: usize,
    /// `ceil(total / page_size)`; zero when nothing matched.
    pub total_pages: usize,
    /// Page links around the current page, `None` marking a gap.
    pub pages: Vec<Option<usize>>,
}

impl<T> ResultPage<T> {
    pub fn new(data: Vec<T>, total: usize, page: usize, page_size: usize) -> Self {
        let total_pages = total.div_ceil(page_size.max(1));
        let pages = PageWindow::default().links(page, total_pages);

        Self {
            data,
            total,
            page,
            total_pages,
            pages,
        }
    }
}
