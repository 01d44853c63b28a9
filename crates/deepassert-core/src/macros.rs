// SPDX-License-Identifier: MIT OR Apache-2.0

/// Build a [`Node`](crate::Node) from JSON-like syntax.
///
/// Any value position accepts a Rust expression convertible into a node,
/// which is how markers are embedded:
///
/// ```
/// use deepassert_core::{ANY, ANY_STRING, Node, pattern};
///
/// let user_id = 7;
/// let expected = pattern!({
///     "id": user_id,
///     "name": ANY_STRING,
///     "tags": [ANY, "admin"],
///     "manager": null,
/// });
/// assert!(matches!(expected, Node::Dict(_)));
/// ```
#[macro_export]
macro_rules! pattern {
    ($($tt:tt)+) => {
        $crate::__pattern_internal!($($tt)+)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __pattern_internal {
    // Lists: accumulate finished elements in brackets, munch the rest.

    (@list [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };

    (@list [$($elems:expr),*]) => {
        ::std::vec![$($elems),*]
    };

    (@list [$($elems:expr,)*] null $($rest:tt)*) => {
        $crate::__pattern_internal!(@list [$($elems,)* $crate::__pattern_internal!(null)] $($rest)*)
    };

    (@list [$($elems:expr,)*] [$($list:tt)*] $($rest:tt)*) => {
        $crate::__pattern_internal!(@list [$($elems,)* $crate::__pattern_internal!([$($list)*])] $($rest)*)
    };

    (@list [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::__pattern_internal!(@list [$($elems,)* $crate::__pattern_internal!({$($map)*})] $($rest)*)
    };

    (@list [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::__pattern_internal!(@list [$($elems,)* $crate::__pattern_internal!($next),] $($rest)*)
    };

    (@list [$($elems:expr,)*] $last:expr) => {
        $crate::__pattern_internal!(@list [$($elems,)* $crate::__pattern_internal!($last)])
    };

    (@list [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::__pattern_internal!(@list [$($elems,)*] $($rest)*)
    };

    // Dicts: (key tokens) (remaining tokens) (copy of remaining tokens).

    (@dict $dict:ident () () ()) => {};

    (@dict $dict:ident [$($key:tt)+] ($value:expr) , $($rest:tt)*) => {
        let _ = $dict.insert(::std::string::String::from($($key)+), $value);
        $crate::__pattern_internal!(@dict $dict () ($($rest)*) ($($rest)*));
    };

    (@dict $dict:ident [$($key:tt)+] ($value:expr)) => {
        let _ = $dict.insert(::std::string::String::from($($key)+), $value);
    };

    (@dict $dict:ident ($($key:tt)+) (: null $($rest:tt)*) $copy:tt) => {
        $crate::__pattern_internal!(@dict $dict [$($key)+] ($crate::__pattern_internal!(null)) $($rest)*);
    };

    (@dict $dict:ident ($($key:tt)+) (: [$($list:tt)*] $($rest:tt)*) $copy:tt) => {
        $crate::__pattern_internal!(@dict $dict [$($key)+] ($crate::__pattern_internal!([$($list)*])) $($rest)*);
    };

    (@dict $dict:ident ($($key:tt)+) (: {$($map:tt)*} $($rest:tt)*) $copy:tt) => {
        $crate::__pattern_internal!(@dict $dict [$($key)+] ($crate::__pattern_internal!({$($map)*})) $($rest)*);
    };

    (@dict $dict:ident ($($key:tt)+) (: $value:expr , $($rest:tt)*) $copy:tt) => {
        $crate::__pattern_internal!(@dict $dict [$($key)+] ($crate::__pattern_internal!($value)) , $($rest)*);
    };

    (@dict $dict:ident ($($key:tt)+) (: $value:expr) $copy:tt) => {
        $crate::__pattern_internal!(@dict $dict [$($key)+] ($crate::__pattern_internal!($value)));
    };

    (@dict $dict:ident () (($key:expr) : $($rest:tt)*) $copy:tt) => {
        $crate::__pattern_internal!(@dict $dict ($key) (: $($rest)*) (: $($rest)*));
    };

    (@dict $dict:ident ($($key:tt)*) ($tt:tt $($rest:tt)*) $copy:tt) => {
        $crate::__pattern_internal!(@dict $dict ($($key)* $tt) ($($rest)*) ($($rest)*));
    };

    // Entry points.

    (null) => {
        $crate::Node::Null
    };

    ([]) => {
        $crate::Node::List(::std::vec::Vec::new())
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Node::List($crate::__pattern_internal!(@list [] $($tt)+))
    };

    ({}) => {
        $crate::Node::Dict($crate::Mapping::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::Node::Dict({
            let mut dict = $crate::Mapping::new();
            $crate::__pattern_internal!(@dict dict () ($($tt)+) ($($tt)+));
            dict
        })
    };

    ($other:expr) => {
        $crate::Node::from($other)
    };
}
