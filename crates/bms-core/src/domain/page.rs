use serde::{Deserialize, Serialize};

use super::Post;

/// One page of posts plus paging metadata.
///
/// `size` and `number` echo the request as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

/// Number of pages needed for `total_elements` items at `page_size` per page.
///
/// Floor division, plus one when there is a remainder. Zero elements give
/// zero pages.
pub fn total_pages(total_elements: u64, page_size: u64) -> u64 {
    if total_elements % page_size == 0 {
        total_elements / page_size
    } else {
        total_elements / page_size + 1
    }
}
