use core::fmt;

/// Aborts the current thread with a contract-violation diagnostic.
///
/// Every wrong-variant extraction funnels through here so the panic location
/// reported is the caller's, and so the `tracing` feature can record the
/// diagnostic before unwinding starts.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fatal(message: fmt::Arguments<'_>) -> ! {
    #[cfg(feature = "tracing")]
    {
        let location = core::panic::Location::caller();
        tracing::error!(
            file = location.file(),
            line = location.line(),
            "outcome contract violation: {}",
            message
        );
    }
    panic!("{}", message)
}
