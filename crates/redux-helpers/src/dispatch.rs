//! Callable handles shared by the store, the middleware chain and the binder

use std::fmt;
use std::sync::Arc;

/// A unary function over `T`, the unit the composer works with
pub type Unary<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Dispatch function - hands an action to the store and returns a result
///
/// The base store dispatch returns the action it reduced. Bound action
/// creators accept any dispatch, so the result type is open.
pub struct Dispatch<A, R = A> {
    inner: Arc<dyn Fn(A) -> R + Send + Sync>,
}

impl<A, R> Dispatch<A, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Dispatch an action
    pub fn call(&self, action: A) -> R {
        (self.inner)(action)
    }

    /// Whether both handles point at the same function
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A, R> Clone for Dispatch<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R> fmt::Debug for Dispatch<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch").finish_non_exhaustive()
    }
}

/// Read access to the current store state
pub struct GetState<S> {
    inner: Arc<dyn Fn() -> S + Send + Sync>,
}

impl<S> GetState<S> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn call(&self) -> S {
        (self.inner)()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S> Clone for GetState<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> fmt::Debug for GetState<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetState").finish_non_exhaustive()
    }
}
