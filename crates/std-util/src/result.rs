#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                use std::fmt::Write;
                let mut msg = format!("expected `Err`; actual={:?}", actual);

                $(
                    write!(msg, ", ").unwrap();
                    write!(msg, $($t)*).unwrap();
                )?

                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Err` and asserts its rendered message contains every given
/// fragment. Evaluates to the error.
#[macro_export]
macro_rules! assert_err_contains {
    ($e:expr, $( $fragment:expr ),+ $(,)?) => {{
        let err = $crate::assert_err!($e);
        let msg = err.to_string();
        $(
            assert!(
                msg.contains($fragment),
                "expected error to contain {:?}; actual={}",
                $fragment,
                msg
            );
        )+
        err
    }};
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; actual=Err({})", e),
        }
    };
}
