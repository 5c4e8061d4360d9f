//! Page arithmetic for the product list

/// Products per page when nothing else is configured
pub const DEFAULT_LIMIT: u32 = 9;

/// Offset of the first page
pub const DEFAULT_SKIP: u32 = 0;

/// Convert a 1-based page number into a `skip` offset
///
/// Page `0` is treated as page `1`.
///
/// # Examples
///
/// ```
/// use catalog_admin::catalog::pagination::page_to_skip;
///
/// assert_eq!(page_to_skip(1, 9), 0);
/// assert_eq!(page_to_skip(3, 9), 18);
/// ```
pub fn page_to_skip(page: u32, per_page: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(per_page)
}

/// Number of pages needed to show `total` items, rounding up
pub fn total_pages(total: u64, per_page: u32) -> u64 {
    if per_page == 0 {
        return 0;
    }
    let per_page = u64::from(per_page);
    total / per_page + u64::from(total % per_page != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_zero_is_first_page() {
        assert_eq!(page_to_skip(0, 9), 0);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(194, 9), 22);
    }

    #[test]
    fn test_total_pages_near_u64_max() {
        assert_eq!(total_pages(u64::MAX, 1), u64::MAX);
        assert_eq!(total_pages(u64::MAX, 2), u64::MAX / 2 + 1);
    }

    #[test]
    fn test_total_pages_zero_per_page() {
        assert_eq!(total_pages(100, 0), 0);
    }
}
