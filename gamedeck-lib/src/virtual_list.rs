//! Virtualized list contract and an in-memory cluster renderer.
//!
//! Rows are materialized in clusters: a cluster spans `blocks_in_cluster`
//! blocks of `rows_in_block` rows, and consecutive clusters overlap by one
//! block so scrolling never shows a gap.

use std::ops::Range;

pub const SCROLL_ID: &str = "scrollArea";
pub const CONTENT_ID: &str = "contentArea";
pub const ROWS_IN_BLOCK: usize = 4;
pub const BLOCKS_IN_CLUSTER: usize = 2;

/// Everything a list renderer needs to display the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub rows: Vec<String>,
    pub scroll_id: String,
    pub content_id: String,
    pub rows_in_block: usize,
    pub blocks_in_cluster: usize,
}

impl ListConfig {
    /// Gallery defaults: `scrollArea`/`contentArea`, 4 rows per block,
    /// 2 blocks per cluster.
    pub fn new(rows: Vec<String>) -> Self {
        Self {
            rows,
            scroll_id: SCROLL_ID.to_string(),
            content_id: CONTENT_ID.to_string(),
            rows_in_block: ROWS_IN_BLOCK,
            blocks_in_cluster: BLOCKS_IN_CLUSTER,
        }
    }

    pub fn rows_in_cluster(&self) -> usize {
        self.rows_in_block.max(1) * self.blocks_in_cluster.max(1)
    }
}

/// A renderer that owns the scroll container once created.
pub trait VirtualListRenderer {
    fn create(&mut self, config: ListConfig);

    /// Tear down the current instance, if any.
    fn destroy(&mut self);
}

/// In-memory renderer: keeps the rows and answers which of them would be
/// materialized at a given scroll offset.
#[derive(Debug, Default)]
pub struct ClusterList {
    config: Option<ListConfig>,
    created: usize,
    destroyed: usize,
}

impl ClusterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&ListConfig> {
        self.config.as_ref()
    }

    pub fn row_count(&self) -> usize {
        self.config.as_ref().map_or(0, |c| c.rows.len())
    }

    /// Number of `create` and `destroy` calls so far.
    pub fn lifecycle_counts(&self) -> (usize, usize) {
        (self.created, self.destroyed)
    }

    /// Row range materialized when the viewport's first visible row is
    /// `offset_row`.
    pub fn cluster_range(&self, offset_row: usize) -> Range<usize> {
        let Some(config) = &self.config else {
            return 0..0;
        };
        let per_cluster = config.rows_in_cluster();
        let step = per_cluster.saturating_sub(config.rows_in_block).max(1);
        let cluster = offset_row / step;
        let start = (cluster * step).min(config.rows.len());
        let end = (start + per_cluster).min(config.rows.len());
        start..end
    }

    /// The materialized rows for `offset_row`.
    pub fn visible_rows(&self, offset_row: usize) -> &[String] {
        match &self.config {
            Some(config) => &config.rows[self.cluster_range(offset_row)],
            None => &[],
        }
    }
}

impl VirtualListRenderer for ClusterList {
    fn create(&mut self, config: ListConfig) {
        self.created += 1;
        self.config = Some(config);
    }

    fn destroy(&mut self) {
        if self.config.take().is_some() {
            self.destroyed += 1;
        }
    }
}

/// Owns a renderer and replaces its instance on every refresh.
pub struct ListHost<R> {
    renderer: R,
    active: bool,
}

impl<R: VirtualListRenderer> ListHost<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            active: false,
        }
    }

    /// Destroy any previous instance, then create one for `rows`.
    pub fn refresh(&mut self, rows: Vec<String>) {
        if self.active {
            self.renderer.destroy();
        }
        log::debug!("Rendering {} rows", rows.len());
        self.renderer.create(ListConfig::new(rows));
        self.active = true;
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("row {i}")).collect()
    }

    #[test]
    fn clusters_overlap_by_one_block() {
        let mut list = ClusterList::new();
        list.create(ListConfig::new(rows(20)));
        assert_eq!(list.cluster_range(0), 0..8);
        assert_eq!(list.cluster_range(3), 0..8);
        assert_eq!(list.cluster_range(4), 4..12);
        assert_eq!(list.cluster_range(17), 16..20);
        assert_eq!(list.visible_rows(4)[0], "row 4");
    }

    #[test]
    fn short_lists_fit_one_cluster() {
        let mut list = ClusterList::new();
        list.create(ListConfig::new(rows(3)));
        assert_eq!(list.cluster_range(0), 0..3);
        assert_eq!(list.cluster_range(50), 3..3);
    }

    #[test]
    fn empty_renderer_has_no_rows() {
        let list = ClusterList::new();
        assert!(list.visible_rows(0).is_empty());
        assert_eq!(list.row_count(), 0);
    }

    #[test]
    fn host_destroys_before_recreating() {
        let mut host = ListHost::new(ClusterList::new());
        host.refresh(rows(2));
        assert_eq!(host.renderer().lifecycle_counts(), (1, 0));
        host.refresh(rows(5));
        assert_eq!(host.renderer().lifecycle_counts(), (2, 1));
        assert_eq!(host.renderer().row_count(), 5);
        assert_eq!(host.renderer().config().unwrap().scroll_id, "scrollArea");
    }
}
