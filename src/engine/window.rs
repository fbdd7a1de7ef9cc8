//! Virtual window calculation for long row sequences.
//!
//! Given a scroll offset, a viewport height, and per-row sizes, computes the
//! minimal contiguous index range to materialise plus the absolute offset of
//! every materialised row. Consumers position rows at those offsets instead
//! of relying on flow layout, which lets the scroll container expose the
//! full `total_size` while only a bounded subrange exists per frame.

/// Per-row sizing strategy.
///
/// The default is a uniform estimate; exact measured sizes extend it with a
/// running offset table, with the estimate covering rows beyond the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSizes {
    estimate: u64,
    /// Running offsets over the measured prefix; `starts[i]` is the offset
    /// of row `i`, `starts[len]` the total measured extent.
    starts: Vec<u64>,
    measured: Vec<u64>,
}

impl RowSizes {
    /// Uniform sizing: every row takes `estimate` units.
    ///
    /// A zero estimate is clamped to one unit so offsets stay well-defined.
    #[must_use]
    pub fn uniform(estimate: u64) -> Self {
        Self {
            estimate: estimate.max(1),
            starts: vec![0],
            measured: Vec::new(),
        }
    }

    /// Measured sizing: the given rows take their exact sizes; rows beyond
    /// the table fall back to the estimate.
    #[must_use]
    pub fn measured(sizes: Vec<u64>, estimate: u64) -> Self {
        let mut starts = Vec::with_capacity(sizes.len().saturating_add(1));
        let mut running = 0_u64;
        starts.push(running);
        for &size in &sizes {
            running = running.saturating_add(size.max(1));
            starts.push(running);
        }
        Self {
            estimate: estimate.max(1),
            starts,
            measured: sizes,
        }
    }

    /// Size of the row at `index`.
    #[must_use]
    pub fn size_of(&self, index: usize) -> u64 {
        self.measured
            .get(index)
            .copied()
            .map_or(self.estimate, |size| size.max(1))
    }

    /// Absolute offset of the row at `index`.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> u64 {
        self.starts.get(index).copied().unwrap_or_else(|| {
            let beyond = index.saturating_sub(self.measured.len()) as u64;
            self.measured_extent()
                .saturating_add(beyond.saturating_mul(self.estimate))
        })
    }

    /// Total content size for a sequence of `length` rows.
    #[must_use]
    pub fn total(&self, length: usize) -> u64 {
        self.offset_of(length)
    }

    /// Index of the row whose extent contains `offset`.
    ///
    /// Offsets past the end land on the last estimated index; callers clamp
    /// to the sequence bounds.
    #[must_use]
    #[expect(
        clippy::integer_division,
        clippy::cast_possible_truncation,
        reason = "offset to index conversion over uniform row sizes is exact"
    )]
    pub fn index_at(&self, offset: u64) -> usize {
        let measured_extent = self.measured_extent();
        if offset < measured_extent {
            // First start strictly past the offset, then step back one row.
            self.starts
                .partition_point(|&start| start <= offset)
                .saturating_sub(1)
        } else {
            let beyond = (offset.saturating_sub(measured_extent) / self.estimate) as usize;
            self.measured.len().saturating_add(beyond)
        }
    }

    fn measured_extent(&self) -> u64 {
        self.starts.last().copied().unwrap_or(0)
    }
}

/// One materialised row: its index, absolute offset, and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    /// Index into the visible sequence.
    pub index: usize,
    /// Absolute offset from the top of the content.
    pub offset: u64,
    /// Row extent in size units.
    pub size: u64,
}

/// The materialised window over a visible sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Window {
    /// First materialised index (inclusive).
    pub start_index: usize,
    /// Last materialised index (inclusive).
    pub end_index: usize,
    /// Full scrollable content size.
    pub total_size: u64,
    /// A slot per materialised index in `[start_index, end_index]`.
    pub rows: Vec<RowSlot>,
}

impl Window {
    /// The empty window, produced iff the sequence is empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start_index: 0,
            end_index: 0,
            total_size: 0,
            rows: Vec::new(),
        }
    }

    /// Returns true when nothing is materialised.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes the window of rows to materialise.
///
/// The visible range covers every index whose offset extent intersects
/// `[scroll_offset, scroll_offset + viewport_height)`, expanded by
/// `overscan` rows at both ends and clamped to the sequence bounds. The
/// result upholds `start_index <= end_index < sequence_length` whenever the
/// sequence is non-empty, and is [`Window::empty`] otherwise.
#[must_use]
pub fn compute_window(
    sequence_length: usize,
    scroll_offset: u64,
    viewport_height: u64,
    sizes: &RowSizes,
    overscan: usize,
) -> Window {
    if sequence_length == 0 {
        return Window::empty();
    }

    let last = sequence_length.saturating_sub(1);
    let first_visible = sizes.index_at(scroll_offset).min(last);

    let bottom = scroll_offset.saturating_add(viewport_height);
    let last_visible = if bottom > scroll_offset {
        sizes.index_at(bottom.saturating_sub(1)).min(last)
    } else {
        first_visible
    };

    let start_index = first_visible.saturating_sub(overscan);
    let end_index = last_visible.saturating_add(overscan).min(last);

    let rows = (start_index..=end_index)
        .map(|index| RowSlot {
            index,
            offset: sizes.offset_of(index),
            size: sizes.size_of(index),
        })
        .collect();

    Window {
        start_index,
        end_index,
        total_size: sizes.total(sequence_length),
        rows,
    }
}

/// Memoises window computation on its three recomputation triggers.
///
/// The window must recompute when the sequence length, scroll offset, or
/// viewport change, and must not recompute on unrelated passes. Sizing or
/// overscan changes require an explicit [`WindowCache::invalidate`].
#[derive(Debug, Clone, Default)]
pub struct WindowCache {
    inputs: Option<(usize, u64, u64)>,
    window: Window,
}

impl WindowCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the window for the given inputs, recomputing only when the
    /// sequence length, scroll offset, or viewport height changed.
    pub fn window(
        &mut self,
        sequence_length: usize,
        scroll_offset: u64,
        viewport_height: u64,
        sizes: &RowSizes,
        overscan: usize,
    ) -> &Window {
        let inputs = (sequence_length, scroll_offset, viewport_height);
        if self.inputs != Some(inputs) {
            self.window =
                compute_window(sequence_length, scroll_offset, viewport_height, sizes, overscan);
            self.inputs = Some(inputs);
        }
        &self.window
    }

    /// Drops the memoised window so the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.inputs = None;
    }

    /// Returns the last computed window without recomputation.
    #[must_use]
    pub const fn current(&self) -> &Window {
        &self.window
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{RowSizes, Window, WindowCache, compute_window};

    #[test]
    fn viewport_of_ten_rows_with_overscan_ten_materialises_twenty() {
        let sizes = RowSizes::uniform(56);
        let window = compute_window(1000, 0, 560, &sizes, 10);

        assert_eq!(window.start_index, 0);
        assert_eq!(window.end_index, 19);
        assert_eq!(window.rows.len(), 20);
        assert_eq!(window.total_size, 56_000);
    }

    #[test]
    fn visible_range_without_overscan_covers_exactly_the_viewport() {
        let sizes = RowSizes::uniform(56);
        let window = compute_window(1000, 0, 560, &sizes, 0);
        assert_eq!(window.start_index, 0);
        assert_eq!(window.end_index, 9);
    }

    #[test]
    fn partial_rows_at_both_edges_are_materialised() {
        let sizes = RowSizes::uniform(56);
        // Offset 28 shows the lower half of row 0 and the upper half of row 10.
        let window = compute_window(1000, 28, 560, &sizes, 0);
        assert_eq!(window.start_index, 0);
        assert_eq!(window.end_index, 10);
    }

    #[test]
    fn empty_sequence_yields_the_empty_window() {
        let sizes = RowSizes::uniform(56);
        assert_eq!(compute_window(0, 500, 560, &sizes, 10), Window::empty());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(10_000_000, 560)]
    #[case(55, 1)]
    #[case(56, 0)]
    fn window_invariant_holds_for_arbitrary_offsets(
        #[case] scroll_offset: u64,
        #[case] viewport_height: u64,
    ) {
        let sizes = RowSizes::uniform(56);
        for length in [1_usize, 9, 1000] {
            let window = compute_window(length, scroll_offset, viewport_height, &sizes, 10);
            assert!(window.start_index <= window.end_index);
            assert!(window.end_index < length);
            assert_eq!(
                window.rows.len(),
                window.end_index - window.start_index + 1
            );
        }
    }

    #[test]
    fn offsets_are_absolute_multiples_of_the_estimate() {
        let sizes = RowSizes::uniform(56);
        let window = compute_window(1000, 5600, 560, &sizes, 2);
        for slot in &window.rows {
            assert_eq!(slot.offset, slot.index as u64 * 56);
            assert_eq!(slot.size, 56);
        }
    }

    #[test]
    fn measured_sizes_drive_offsets_and_lookup() {
        let sizes = RowSizes::measured(vec![10, 30, 20], 56);

        assert_eq!(sizes.offset_of(0), 0);
        assert_eq!(sizes.offset_of(1), 10);
        assert_eq!(sizes.offset_of(2), 40);
        assert_eq!(sizes.offset_of(3), 60);
        // Beyond the measured table the estimate takes over.
        assert_eq!(sizes.offset_of(4), 116);

        assert_eq!(sizes.index_at(0), 0);
        assert_eq!(sizes.index_at(9), 0);
        assert_eq!(sizes.index_at(10), 1);
        assert_eq!(sizes.index_at(39), 1);
        assert_eq!(sizes.index_at(40), 2);
        assert_eq!(sizes.index_at(60), 3);
    }

    #[test]
    fn measured_window_intersects_exact_extents() {
        let sizes = RowSizes::measured(vec![10, 30, 20, 40], 56);
        let window = compute_window(4, 12, 30, &sizes, 0);
        // [12, 42) intersects row 1 ([10, 40)) and row 2 ([40, 60)).
        assert_eq!(window.start_index, 1);
        assert_eq!(window.end_index, 2);
    }

    #[test]
    fn scroll_past_the_end_clamps_to_the_last_row() {
        let sizes = RowSizes::uniform(56);
        let window = compute_window(10, 100_000, 560, &sizes, 3);
        assert_eq!(window.end_index, 9);
        assert!(window.start_index <= window.end_index);
    }

    #[test]
    fn zero_viewport_still_materialises_the_row_under_the_offset() {
        let sizes = RowSizes::uniform(56);
        let window = compute_window(100, 112, 0, &sizes, 0);
        assert_eq!(window.start_index, 2);
        assert_eq!(window.end_index, 2);
    }

    #[test]
    fn cache_recomputes_only_when_inputs_change() {
        let sizes = RowSizes::uniform(56);
        let mut cache = WindowCache::new();

        let first = cache.window(1000, 0, 560, &sizes, 10).clone();
        let second = cache.window(1000, 0, 560, &sizes, 10).clone();
        assert_eq!(first, second);

        let scrolled = cache.window(1000, 5600, 560, &sizes, 10).clone();
        assert_ne!(first.start_index, scrolled.start_index);

        cache.invalidate();
        let recomputed = cache.window(1000, 5600, 560, &sizes, 10).clone();
        assert_eq!(scrolled, recomputed);
    }
}
