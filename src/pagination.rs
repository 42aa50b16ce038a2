// src/pagination.rs

use serde::{Deserialize, Deserializer};

/// Fixed number of items per page across every listing endpoint.
pub const PAGE_SIZE: usize = 10;

/// Query parameters shared by the paginated endpoints (`?page=N`, 1-based).
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page", deserialize_with = "lenient_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

// An unparseable or negative page value falls back to the first page
// instead of failing the request; the query extractor must never reject,
// every error body is one of the fixed JSON envelopes.
fn lenient_page<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.parse().unwrap_or_else(|_| default_page()))
}

/// Slices an ordered result set into the requested page.
///
/// Returns indices `[(page-1)*10, page*10)`, or an empty vector when the
/// page is out of range. Deciding whether an empty page is a not-found
/// condition is left to the caller.
pub fn paginate<T>(page: u32, items: Vec<T>) -> Vec<T> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);
    items
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_ten_items() {
        let items: Vec<i32> = (0..25).collect();
        let page = paginate(1, items);
        assert_eq!(page, (0..10).collect::<Vec<i32>>());
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<i32> = (0..25).collect();
        let page = paginate(3, items);
        assert_eq!(page, (20..25).collect::<Vec<i32>>());
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<i32> = (0..25).collect();
        assert!(paginate(4, items).is_empty());
    }

    #[test]
    fn page_zero_is_treated_as_first() {
        let items: Vec<i32> = (0..5).collect();
        assert_eq!(paginate(0, items), (0..5).collect::<Vec<i32>>());
    }

    #[test]
    fn empty_input_yields_empty_page() {
        assert!(paginate(1, Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn page_params_parse_leniently() {
        let params: PageParams = serde_json::from_str(r#"{"page": "4"}"#).unwrap();
        assert_eq!(params.page, 4);

        // Garbage and negative values fall back to the first page.
        let params: PageParams = serde_json::from_str(r#"{"page": "abc"}"#).unwrap();
        assert_eq!(params.page, 1);
        let params: PageParams = serde_json::from_str(r#"{"page": "-3"}"#).unwrap();
        assert_eq!(params.page, 1);

        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 1);
    }
}
