//! Paginated query executor
//!
//! Drives a compiled query to completion over the store's
//! continuation-token protocol. Pages cannot be prefetched: each
//! request needs the cursor from the previous response.

use crate::error::{Result, SableError};
use crate::query::CompiledQuery;
use crate::record::AttributeMap;

use super::{SelectPage, StoreClient};

/// Effective limit when a query specifies none; pagination must still
/// terminate deterministically
pub const DEFAULT_RESULT_CAP: usize = 999_999_999;

/// Execute a compiled query, accumulating pages until exhaustion or limit
///
/// Over-fetches (the protocol cannot align page sizes to an arbitrary
/// limit) and truncates the accumulated items to exactly the limit.
pub fn execute<C: StoreClient>(
    client: &C,
    compiled: &CompiledQuery,
) -> Result<Vec<(String, AttributeMap)>> {
    let expression = compiled.select_expression();
    let limit = compiled.limit.unwrap_or(DEFAULT_RESULT_CAP);

    let mut items: Vec<(String, AttributeMap)> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        tracing::debug!(expression = %expression, cursor = ?cursor, "select page");
        let page = client.select(&expression, cursor.as_deref())?;
        items.extend(page.items);

        if items.len() > limit {
            break;
        }
        match page.next_token {
            Some(token) => cursor = Some(token),
            None => break,
        }
    }

    items.truncate(limit);
    Ok(items)
}

/// Execute the count form of a compiled query
///
/// The store may split a large count across continuation pages, each
/// carrying a partial `Count` item; the partials are summed.
pub fn count<C: StoreClient>(client: &C, compiled: &CompiledQuery) -> Result<usize> {
    let expression = compiled.count_expression();

    let mut total = 0;
    let mut cursor: Option<String> = None;

    loop {
        tracing::debug!(expression = %expression, cursor = ?cursor, "count page");
        let page = client.select(&expression, cursor.as_deref())?;
        total += parse_count_page(&page)?;

        match page.next_token {
            Some(token) => cursor = Some(token),
            None => break,
        }
    }

    Ok(total)
}

/// Extract the partial count carried by one aggregate response page
fn parse_count_page(page: &SelectPage) -> Result<usize> {
    let mut partial = 0;

    for (_, attributes) in &page.items {
        let value = attributes
            .get("Count")
            .and_then(|values| values.first())
            .ok_or_else(|| SableError::Store("count response missing Count attribute".to_string()))?;

        partial += value
            .parse::<usize>()
            .map_err(|_| SableError::Store(format!("unparseable Count value: {}", value)))?;
    }

    Ok(partial)
}
