#[cfg(feature = "tracing")]
macro_rules! ttrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "treeviz", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ttrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! tdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "treeviz", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tdebug {
    ($($tt:tt)*) => {};
}
