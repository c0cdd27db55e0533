/// Creates an ad-hoc [`Error`](crate::Error) from a format string.
#[macro_export]
macro_rules! err {
    ( $( $arg:tt )* ) => {
        $crate::Error::from_args(format_args!( $( $arg )* ))
    };
}
