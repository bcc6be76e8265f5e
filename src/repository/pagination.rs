use std::future::Future;

use crate::api::ApiError;
use crate::models::Page;

/// Fetch pages 1, 2, 3… and concatenate their results in server order.
///
/// Stops when a page reports no `next`. A failure on the first page is
/// returned; a failure on any later page ends accumulation and keeps what
/// was gathered so far.
pub async fn accumulate_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let mut accumulated = Vec::new();
    let mut page_number: u32 = 1;

    loop {
        match fetch(page_number).await {
            Ok(page) => {
                accumulated.extend(page.results);
                if page.next.is_none() {
                    break;
                }
                page_number += 1;
            }
            Err(error) if page_number == 1 => return Err(error),
            Err(error) => {
                tracing::warn!(
                    page = page_number,
                    kept = accumulated.len(),
                    error = %error,
                    "stopping pagination after failed page"
                );
                break;
            }
        }
    }

    Ok(accumulated)
}
