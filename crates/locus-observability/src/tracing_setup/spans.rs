//! Span definitions per operation: suggestion, selection, cache maintenance.

/// Span around one suggestion request.
#[macro_export]
macro_rules! suggestion_span {
    ($query:expr, $generation:expr) => {
        tracing::info_span!("locus.suggestion", query = %$query, generation = $generation)
    };
}

/// Span around recording a user selection.
#[macro_export]
macro_rules! selection_span {
    ($place_id:expr, $source:expr) => {
        tracing::info_span!("locus.selection", place_id = %$place_id, source = %$source)
    };
}

/// Span around cache work in one namespace.
#[macro_export]
macro_rules! cache_span {
    ($namespace:expr, $operation:expr) => {
        tracing::debug_span!("locus.cache", namespace = %$namespace, operation = %$operation)
    };
}
