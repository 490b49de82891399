//! Bounded-concurrency helpers.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// How many lookups run at once when hydrating a list of entities
pub const HYDRATE_WORKERS: usize = 4;

/// Map `items` through `f` with at most `limit` futures in flight.
///
/// Output order matches input order regardless of completion order, so
/// results can be zipped back onto the inputs. A `limit` of zero is
/// treated as one.
pub async fn map_concurrent<I, F, Fut>(items: I, limit: usize, f: F) -> Vec<Fut::Output>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .collect::<Vec<_>>()
        .await
}
