pub mod precondition {
    //! Contract checks for programmer errors.
    //!
    //! A failed check logs the diagnostic and panics with `file:line: message`.
    //! Checks run when `debug_assertions` are on or the `checked` feature is
    //! enabled, and are compiled out entirely under the `unchecked` feature.
    //! With checks off, the condition is never evaluated.

    use std::fmt::Arguments;

    pub const PRECONDITIONS_ENABLED: bool =
        !cfg!(feature = "unchecked") && (cfg!(debug_assertions) || cfg!(feature = "checked"));

    #[macro_export]
    macro_rules! precondition {
        ($cond:expr, $($arg:tt)+) => {
            if $crate::precondition::PRECONDITIONS_ENABLED && !($cond) {
                $crate::precondition::violated(file!(), line!(), format_args!($($arg)+))
            }
        };
    }

    #[cold]
    #[inline(never)]
    pub fn violated(file: &str, line: u32, message: Arguments<'_>) -> ! {
        log::error!("{file}:{line}: precondition failed: {message}");
        panic!("{file}:{line}: precondition failed: {message}");
    }

}
