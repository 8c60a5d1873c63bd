//! Arity traits connecting a callable to a bound-argument prefix and an
//! execute-time argument suffix.
//!
//! Rust has no variadic generics, so compatibility between a callable's
//! parameter list and the two argument tuples is spelled out per arity.
//! The macro below covers bound and extra tuples of up to four elements
//! each, which is as far as the binding surface goes.

/// A callable whose parameter list is the concatenation of the `Bound`
/// tuple and the `Extra` tuple, in that order.
///
/// Implemented for functions and closures. The split between bound and
/// extra arguments is chosen at the bind site: a `fn(u32, bool)` can be
/// bound with `(u32,)` and executed with `(bool,)`, or bound with
/// `(u32, bool)` and executed with `()`.
pub trait Callable<Bound, Extra> {
    /// The callable's result type.
    type Output;

    /// Invoke with the concatenated argument tuples.
    fn invoke(&mut self, bound: Bound, extra: Extra) -> Self::Output;
}

/// Like [`Callable`], but the first effective parameter is a shared borrow
/// of a receiver, the shape of an inherent method taking `&self`.
pub trait MemberCallable<Receiver, Bound, Extra> {
    /// The callable's result type.
    type Output;

    /// Invoke on `receiver` with the concatenated argument tuples.
    fn invoke(&mut self, receiver: &Receiver, bound: Bound, extra: Extra) -> Self::Output;
}

macro_rules! impl_callable {
    ([$($b:ident),*] [$($e:ident),*]) => {
        impl<Func, Out, $($b,)* $($e,)*> Callable<($($b,)*), ($($e,)*)> for Func
        where
            Func: FnMut($($b,)* $($e,)*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn invoke(&mut self, bound: ($($b,)*), extra: ($($e,)*)) -> Out {
                let ($($b,)*) = bound;
                let ($($e,)*) = extra;
                (self)($($b,)* $($e),*)
            }
        }

        impl<Func, Rcv, Out, $($b,)* $($e,)*> MemberCallable<Rcv, ($($b,)*), ($($e,)*)> for Func
        where
            Func: FnMut(&Rcv, $($b,)* $($e,)*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn invoke(&mut self, receiver: &Rcv, bound: ($($b,)*), extra: ($($e,)*)) -> Out {
                let ($($b,)*) = bound;
                let ($($e,)*) = extra;
                (self)(receiver, $($b,)* $($e),*)
            }
        }
    };
}

impl_callable!([] []);
impl_callable!([] [E0]);
impl_callable!([] [E0, E1]);
impl_callable!([] [E0, E1, E2]);
impl_callable!([] [E0, E1, E2, E3]);
impl_callable!([B0] []);
impl_callable!([B0] [E0]);
impl_callable!([B0] [E0, E1]);
impl_callable!([B0] [E0, E1, E2]);
impl_callable!([B0] [E0, E1, E2, E3]);
impl_callable!([B0, B1] []);
impl_callable!([B0, B1] [E0]);
impl_callable!([B0, B1] [E0, E1]);
impl_callable!([B0, B1] [E0, E1, E2]);
impl_callable!([B0, B1] [E0, E1, E2, E3]);
impl_callable!([B0, B1, B2] []);
impl_callable!([B0, B1, B2] [E0]);
impl_callable!([B0, B1, B2] [E0, E1]);
impl_callable!([B0, B1, B2] [E0, E1, E2]);
impl_callable!([B0, B1, B2] [E0, E1, E2, E3]);
impl_callable!([B0, B1, B2, B3] []);
impl_callable!([B0, B1, B2, B3] [E0]);
impl_callable!([B0, B1, B2, B3] [E0, E1]);
impl_callable!([B0, B1, B2, B3] [E0, E1, E2]);
impl_callable!([B0, B1, B2, B3] [E0, E1, E2, E3]);
