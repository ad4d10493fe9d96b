pub mod analysis;
pub mod data;
pub mod project;
pub mod token;

use serde::{Deserialize, Serialize};

/// The envelope every paginated endpoint wraps its results in.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Page<ItemT> {
    #[serde(default = "Vec::new")]
    pub items: Vec<ItemT>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageQuery {
    pub page_offset: usize,
    pub page_size: usize,
}

impl PageQuery {
    pub fn first(page_size: usize) -> Self {
        Self {
            page_offset: 0,
            page_size,
        }
    }

    /// Advance past a page; returns whether that page was full, i.e. whether
    /// another one may follow.
    pub fn advance(&mut self, num_items: usize) -> bool {
        self.page_offset += self.page_size;
        num_items >= self.page_size
    }
}
