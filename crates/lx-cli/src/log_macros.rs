/// Domain-tagged logging for the command line, mirroring `lx_core`'s
/// crate-local macros.
///
/// ```ignore
/// lx_debug!(conf, limit = 1000, "resolved run configuration");
/// ```

#[doc(hidden)]
macro_rules! lx_log {
    ($level:ident, $domain:ident, $($field:tt)*) => {
        tracing::$level!(domain = stringify!($domain), $($field)*)
    };
}

macro_rules! lx_debug {
    ($domain:ident, $($rest:tt)*) => {
        lx_log!(debug, $domain, $($rest)*)
    };
}
