//! Bounded fan-out executor
//!
//! Runs one async worker per item with at most `concurrency` in flight.
//! Each item gets its own task, spawned only once a semaphore permit is
//! free, so a large league never has more than the configured number of
//! tasks alive and a panic is confined to the item that raised it.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::error;

/// Run `worker` over every item with bounded concurrency.
///
/// Every item is attempted exactly once. Results come back in completion
/// order, not submission order. A failing item does not affect the
/// others; an item whose worker panics is logged and left out of the
/// results.
///
/// A `concurrency` of zero is treated as one.
///
/// # Example
/// ```
/// use soccerwiki_core::fan_out;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let results = fan_out(vec![1, 2, 3], 2, |n: u32| async move {
///     if n == 2 { Err("two") } else { Ok(n * 10) }
/// })
/// .await;
/// assert_eq!(results.len(), 3);
/// # }
/// ```
pub async fn fan_out<I, O, E, F, Fut>(items: Vec<I>, concurrency: usize, worker: F) -> Vec<Result<O, E>>
where
    I: Send + 'static,
    O: Send + 'static,
    E: Send + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<O, E>> + Send + 'static,
{
    let total = items.len();
    if total == 0 {
        return Vec::new();
    }

    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();
    let mut results = Vec::with_capacity(total);

    for item in items {
        let permit = match Arc::clone(&semaphore).acquire_owned().await {
            Ok(permit) => permit,
            // Never closed while we hold it
            Err(_) => break,
        };
        let fut = worker(item);
        tasks.spawn(async move {
            let result = fut.await;
            drop(permit);
            result
        });

        // Collect whatever already finished so the set stays small
        while let Some(joined) = tasks.try_join_next() {
            collect(joined, &mut results);
        }
    }

    while let Some(joined) = tasks.join_next().await {
        collect(joined, &mut results);
    }

    results
}

fn collect<T>(joined: Result<T, tokio::task::JoinError>, results: &mut Vec<T>) {
    match joined {
        Ok(result) => results.push(result),
        Err(e) => error!(error = %e, "fan-out task failed"),
    }
}

/// Split fan-out results into successes and failures.
pub fn partition_results<O, E>(results: Vec<Result<O, E>>) -> (Vec<O>, Vec<E>) {
    let mut ok = Vec::new();
    let mut failed = Vec::new();
    for result in results {
        match result {
            Ok(value) => ok.push(value),
            Err(e) => failed.push(e),
        }
    }
    (ok, failed)
}
