/// Contract violations on [`UniquePriorityQueue`](crate::UniquePriorityQueue)
/// and [`PathStack`](crate::PathStack).
///
/// These signal caller bugs; an ordinary "nothing left" result is expressed
/// as `None` by the non-failing accessors instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// Peek or removal on an empty collection.
    #[error("collection is empty")]
    EmptyCollection,

    /// Priority update for an item that is not in the queue.
    #[error("item not found in priority queue")]
    ItemNotFound,
}
