use std::sync::atomic::{AtomicUsize, Ordering};

const PREFIX: &str = "ent"; // Must NOT contain "/" or "-"

/// Unique DOM id for an element that needs one (e.g. label/input pairing).
pub fn use_random_id_for(element: &str) -> String {
    format!("{element}_{PREFIX}_{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

static COUNTER: AtomicUsize = AtomicUsize::new(1);
