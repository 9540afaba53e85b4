/// A macro for building [`error_stack::Report`]s with an [`AnyErr`](crate::errors::AnyErr) context, optionally from a format string.
#[macro_export]
macro_rules! anyerr {
    () => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr)
    }};

    ($str:expr) => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr).attach_printable($str)
    }};

    ($str:expr, $($arg:expr),*) => {{
        $crate::errors::error_stack::Report::new($crate::errors::AnyErr)
            .attach_printable(format!($str, $($arg),*))
    }};
}

/// When working in a function that cannot return a result, wrap a block in this macro to panic with the formatted error if it errors.
#[macro_export]
macro_rules! panic_on_err {
    ($closure:block) => {{
        match (|| -> ::core::result::Result<_, $crate::errors::error_stack::Report<$crate::errors::AnyErr>> {
            $closure
        })() {
            Ok(s) => s,
            Err(e) => {
                panic!("{:?}", e);
            }
        }
    }};
}
