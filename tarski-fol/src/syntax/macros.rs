#[macro_export]
macro_rules! v {
    ($v:ident) => {
        $crate::syntax::V::from(stringify!($v))
    };
}

#[macro_export]
macro_rules! f {
    ($f:ident) => {
        $crate::syntax::F::from(stringify!($f))
    };
}

// accepts literals so that constants like `0` and `1` can be written directly
#[macro_export]
macro_rules! c {
    ($c:tt) => {
        $crate::syntax::C::from(stringify!($c))
    };
}

#[macro_export]
macro_rules! pred {
    ($p:ident) => {
        $crate::syntax::Pred::from(stringify!($p))
    };
}

/// Returns a variable expression named after the identifier.
#[macro_export]
macro_rules! var {
    ($v:ident) => {
        $crate::syntax::Expr::var(stringify!($v))
    };
}
