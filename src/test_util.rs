use crate::{Link, NodeArena, NodeId};
use tracing_subscriber::EnvFilter;

/// Route `tracing` events to the test writer; set `RUST_LOG=trace` to see them.
pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

pub(crate) fn chain<T>(values: impl IntoIterator<Item = T>) -> (NodeArena<T>, Link) {
    init_tracing();
    let mut arena = NodeArena::new();
    let head = arena.build(values);
    (arena, head)
}

/// Handle of the `index`-th node (0-based) along the chain.
pub(crate) fn nth_node<T>(arena: &NodeArena<T>, head: Link, index: usize) -> NodeId {
    arena.nodes(head).nth(index).expect("index within chain")
}

/// Build `values` and link the last node back to the node at `entry`.
pub(crate) fn cyclic_chain(values: &[i32], entry: usize) -> (NodeArena<i32>, Link, NodeId) {
    let (mut arena, head) = chain(values.iter().copied());
    let entry_id = nth_node(&arena, head, entry);
    let last = nth_node(&arena, head, values.len() - 1);
    arena.set_next(last, Some(entry_id)).expect("live nodes");
    (arena, head, entry_id)
}
