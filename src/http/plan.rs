use crate::args::{PositiveU64, PositiveUsize};

/// Splits `total` requests across `concurrency` workers. Every worker gets
/// `total / concurrency` requests and the first `total % concurrency` workers
/// get one more, so the shares sum to `total` and differ by at most one.
#[must_use]
pub fn partition_requests(total: PositiveU64, concurrency: PositiveUsize) -> Vec<u64> {
    let total = total.get();
    let workers = concurrency.get();
    let workers_u64 = u64::try_from(workers).unwrap_or(u64::MAX);
    let base = total.checked_div(workers_u64).unwrap_or(0);
    let remainder = total.checked_rem(workers_u64).unwrap_or(0);

    (0..workers)
        .map(|index| {
            let gets_extra = u64::try_from(index).is_ok_and(|index| index < remainder);
            base.saturating_add(u64::from(gets_extra))
        })
        .collect()
}
