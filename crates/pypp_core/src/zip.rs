//! Positional zip over any number of iterables (up to eight).

/// Collect a `Vec` of tuples where the i-th tuple holds the i-th item of every
/// argument. Stops at the shortest argument.
///
/// ```
/// let names = ["a", "b", "c"];
/// let counts = vec![3, 2];
/// let flags = [true, false, true, true];
/// assert_eq!(
///     pypp_core::zip!(names, counts, flags),
///     vec![("a", 3, true), ("b", 2, false)]
/// );
/// ```
#[macro_export]
macro_rules! zip {
    // Pair each argument with one of the spare identifiers below.
    (@bind [$($bound:ident = $iterable:expr;)*] [$next:ident $($spare:ident)*] $head:expr $(, $tail:expr)*) => {
        $crate::zip!(@bind [$($bound = $iterable;)* $next = $head;] [$($spare)*] $($tail),*)
    };
    (@bind [$($bound:ident = $iterable:expr;)*] [$($spare:ident)*]) => {{
        $(let mut $bound = ::core::iter::IntoIterator::into_iter($iterable);)*
        let mut zipped = ::std::vec::Vec::new();
        loop {
            zipped.push(($(
                match $bound.next() {
                    ::core::option::Option::Some(item) => item,
                    ::core::option::Option::None => break,
                },
            )*));
        }
        zipped
    }};
    ($($iterable:expr),+ $(,)?) => {
        $crate::zip!(@bind [] [__zip0 __zip1 __zip2 __zip3 __zip4 __zip5 __zip6 __zip7] $($iterable),+)
    };
}
