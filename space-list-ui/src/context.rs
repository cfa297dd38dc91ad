/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Context values shared by list components.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dioxus::prelude::*;
use once_cell::sync::Lazy;

use crate::constants::DEFAULT_ID_PREFIX;

/// Used when no ancestor provides an [`IdCounter`].
static DEFAULT_ID_COUNTER: Lazy<IdCounter> = Lazy::new(IdCounter::default);

/// Source of element ids for rows rendered without a caller-supplied one.
///
/// Clones share the same sequence. Provide one with `use_context_provider`
/// to scope ids to a subtree; otherwise [`use_generated_id`] draws from a
/// single process-wide counter shared by every virtual DOM.
#[derive(Clone, Debug, Default)]
pub struct IdCounter(Arc<AtomicUsize>);

impl IdCounter {
    /// Returns `prefix` followed by the next value in the sequence, starting at 1.
    pub fn next_id(&self, prefix: &str) -> String {
        let n = self.0.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{prefix}{n}")
    }
}

impl PartialEq for IdCounter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// `"{id}-"` for a non-empty caller id, the default prefix otherwise.
pub fn id_prefix(id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => format!("{id}-"),
        _ => DEFAULT_ID_PREFIX.to_string(),
    }
}

/// Mint an id once for the calling component and keep it for its lifetime.
pub fn use_generated_id(id: Option<String>) -> String {
    use_hook(move || {
        let counter =
            try_consume_context::<IdCounter>().unwrap_or_else(|| DEFAULT_ID_COUNTER.clone());
        let generated = counter.next_id(&id_prefix(id.as_deref()));
        log::debug!("minted list item id {generated}");
        generated
    })
}
