//! Right-to-left function composition
//!
//! ```text
//! compose(f, g, h)(x) == f(g(h(x)))
//! ```
//!
//! [`compose`] works on a list of boxed functions over one type, which is what
//! the middleware chain needs. [`compose_with`] lets the rightmost function
//! take a different argument (use a tuple for several), and the
//! [`compose!`](crate::compose!) macro composes callables of unrelated types.

use crate::dispatch::Unary;

/// The result of [`compose`]
pub struct Composed<T> {
    funcs: Vec<Unary<T>>,
}

impl<T> Composed<T> {
    /// Apply the functions right to left. No functions means identity.
    pub fn call(&self, arg: T) -> T {
        self.funcs.iter().rev().fold(arg, |acc, f| f(acc))
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl<T: 'static> Composed<T> {
    /// Turn the composition back into a single boxed function
    ///
    /// A composition of exactly one function yields that function itself.
    pub fn into_unary(mut self) -> Unary<T> {
        if self.funcs.len() == 1 {
            if let Some(only) = self.funcs.pop() {
                return only;
            }
        }
        Box::new(move |arg| self.call(arg))
    }
}

/// Compose unary functions from right to left
pub fn compose<T>(funcs: Vec<Unary<T>>) -> Composed<T> {
    Composed { funcs }
}

/// Compose with a rightmost function that defines the call signature
///
/// `compose_with(vec![f, g], h)(args) == f(g(h(args)))`
pub fn compose_with<Args, T, L>(funcs: Vec<Unary<T>>, last: L) -> impl Fn(Args) -> T
where
    L: Fn(Args) -> T,
{
    let composed = compose(funcs);
    move |args| composed.call(last(args))
}

/// Compose any callables from right to left
///
/// ```
/// use redux_helpers::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let render = |x: i32| format!("={x}");
///
/// let f = compose!(render, double, add_one);
/// assert_eq!(f(3), "=8");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        |x| x
    };
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $f;
        let inner = $crate::compose!($($rest),+);
        move |x| outer(inner(x))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn boxed(f: impl Fn(i32) -> i32 + Send + Sync + 'static) -> Unary<i32> {
        Box::new(f)
    }

    #[test]
    fn test_compose_applies_right_to_left() {
        let composed = compose(vec![boxed(|x| x + 3), boxed(|x| x * 2), boxed(|x| x - 1)]);
        // (5 - 1) * 2 + 3
        assert_eq!(composed.call(5), 11);
    }

    #[test]
    fn test_compose_matches_nested_calls() {
        let f = |x: i32| x * 10;
        let g = |x: i32| x + 7;
        let h = |x: i32| x / 2;
        let composed = compose(vec![boxed(f), boxed(g), boxed(h)]);
        for x in [-9, 0, 1, 42] {
            assert_eq!(composed.call(x), f(g(h(x))));
        }
    }

    #[test]
    fn test_compose_empty_is_identity() {
        let composed: Composed<&str> = compose(Vec::new());
        assert!(composed.is_empty());
        assert_eq!(composed.call("unchanged"), "unchanged");
    }

    #[test]
    fn test_compose_single_function_is_that_function() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let composed = compose(vec![boxed(move |x| {
            *counter.lock().unwrap() += 1;
            x + 1
        })]);
        assert_eq!(composed.len(), 1);

        let unary = composed.into_unary();
        assert_eq!(unary(1), 2);
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_compose_with_multi_argument_rightmost() {
        let sum_then_double =
            compose_with(vec![boxed(|x| x * 2)], |(a, b, c): (i32, i32, i32)| a + b + c);
        assert_eq!(sum_then_double((1, 2, 3)), 12);
    }

    #[test]
    fn test_compose_with_only_rightmost_keeps_all_arguments() {
        let f = |(a, b, c): (i32, i32, i32)| a * 100 + b * 10 + c;
        let composed = compose_with(Vec::new(), f);
        assert_eq!(composed((1, 2, 3)), f((1, 2, 3)));
    }

    #[test]
    fn test_compose_macro_mixed_types() {
        let len = |s: &str| s.len();
        let is_even = |n: usize| n % 2 == 0;
        let describe = |b: bool| if b { "even" } else { "odd" };

        let f = crate::compose!(describe, is_even, len);
        assert_eq!(f("four"), "even");
        assert_eq!(f("three"), "odd");
    }

    #[test]
    fn test_compose_macro_identity_and_single() {
        let identity = crate::compose!();
        assert_eq!(identity(7), 7);

        let single = crate::compose!(|x: i32| x - 1);
        assert_eq!(single(7), 6);
    }
}
