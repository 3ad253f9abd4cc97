/// Domain-tagged logging macros.
///
/// Each macro injects a `domain` field so every event can be filtered or
/// prefixed by subsystem. Domains in use: `sys` (process lifecycle), `conf`
/// (configuration), `pipe` (per-line transform), `res` (file resources).
///
/// ```ignore
/// lx_info!(sys, records = 10, "transform complete");
/// lx_debug!(pipe, line = 3, "skipping malformed line");
/// ```
///
/// The domain is a bare identifier, not a string.

#[doc(hidden)]
macro_rules! lx_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

macro_rules! lx_warn {
    ($domain:ident, $($rest:tt)*) => {
        lx_log!(warn, $domain, $($rest)*)
    };
}

macro_rules! lx_info {
    ($domain:ident, $($rest:tt)*) => {
        lx_log!(info, $domain, $($rest)*)
    };
}

macro_rules! lx_debug {
    ($domain:ident, $($rest:tt)*) => {
        lx_log!(debug, $domain, $($rest)*)
    };
}
