//! Minimal store and the store-enhancer protocol
//!
//! The store here only does what an enhancer needs to wrap: it holds state
//! behind a lock, runs the reducer on dispatch and hands out `get_state`.
//! Enhancers rebuild a [`Store`] with struct-update syntax so every field they
//! do not touch passes through unchanged.

use crate::compose::compose;
use crate::dispatch::{Dispatch, GetState, Unary};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Reducer - pure function that produces new state from current state + action
pub type Reducer<S, A> = Arc<dyn Fn(S, &A) -> S + Send + Sync>;

/// Store creation function: `(reducer, initial_state, enhancer) -> Store`
///
/// `R` is what the store's dispatch returns. The base store returns the
/// action; other store implementations may return anything.
pub type CreateStore<S, A, R = A> = Arc<
    dyn Fn(Reducer<S, A>, Option<S>, Option<StoreEnhancer<S, A, R>>) -> Store<S, A, R>
        + Send
        + Sync,
>;

/// Wrap a closure or fn item as a [`Reducer`]
pub fn reducer<S, A, F>(f: F) -> Reducer<S, A>
where
    F: Fn(S, &A) -> S + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Store - the dispatch/get_state pair handed to enhancers and middleware
pub struct Store<S, A, R = A> {
    pub dispatch: Dispatch<A, R>,
    pub get_state: GetState<S>,
}

impl<S, A, R> Store<S, A, R> {
    /// Get a snapshot of the current state
    pub fn state(&self) -> S {
        self.get_state.call()
    }
}

impl<S, A, R> Clone for Store<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            dispatch: self.dispatch.clone(),
            get_state: self.get_state.clone(),
        }
    }
}

impl<S, A, R> fmt::Debug for Store<S, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("dispatch", &self.dispatch)
            .field("get_state", &self.get_state)
            .finish()
    }
}

/// Store enhancer - turns one store creation function into another
pub struct StoreEnhancer<S, A, R = A> {
    inner: Arc<dyn Fn(CreateStore<S, A, R>) -> CreateStore<S, A, R> + Send + Sync>,
}

impl<S, A, R> StoreEnhancer<S, A, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(CreateStore<S, A, R>) -> CreateStore<S, A, R> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Apply the enhancer to a store creation function
    pub fn enhance(&self, create_store: CreateStore<S, A, R>) -> CreateStore<S, A, R> {
        (self.inner)(create_store)
    }
}

impl<S: 'static, A: 'static, R: 'static> StoreEnhancer<S, A, R> {
    pub fn into_unary(self) -> Unary<CreateStore<S, A, R>> {
        Box::new(move |create_store| self.enhance(create_store))
    }
}

impl<S, A, R> Clone for StoreEnhancer<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A, R> fmt::Debug for StoreEnhancer<S, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreEnhancer").finish_non_exhaustive()
    }
}

/// Combine several enhancers into one, leftmost outermost
pub fn compose_enhancers<S: 'static, A: 'static, R: 'static>(
    enhancers: Vec<StoreEnhancer<S, A, R>>,
) -> StoreEnhancer<S, A, R> {
    let composed = compose(
        enhancers
            .into_iter()
            .map(StoreEnhancer::into_unary)
            .collect(),
    );
    StoreEnhancer::new(move |create_store| composed.call(create_store))
}

/// Create a store
///
/// A missing initial state falls back to `S::default()`. With an enhancer the
/// call is delegated to `enhancer(create_store)(reducer, initial_state, None)`.
///
/// The base dispatch runs the reducer under the state lock and returns the
/// action. Reducers must not dispatch.
pub fn create_store<S, A>(
    reducer: Reducer<S, A>,
    initial_state: Option<S>,
    enhancer: Option<StoreEnhancer<S, A>>,
) -> Store<S, A>
where
    S: Clone + Default + Send + 'static,
    A: 'static,
{
    if let Some(enhancer) = enhancer {
        return enhancer.enhance(create_store_fn())(reducer, initial_state, None);
    }

    let state = Arc::new(Mutex::new(initial_state.unwrap_or_default()));

    let dispatch = {
        let state = Arc::clone(&state);
        Dispatch::new(move |action: A| {
            let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
            *guard = reducer(guard.clone(), &action);
            action
        })
    };

    let get_state = GetState::new(move || {
        state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    });

    log::trace!("Store created");
    Store {
        dispatch,
        get_state,
    }
}

/// [`create_store`] as a [`CreateStore`] value, the input enhancers expect
pub fn create_store_fn<S, A>() -> CreateStore<S, A>
where
    S: Clone + Default + Send + 'static,
    A: 'static,
{
    Arc::new(create_store::<S, A>)
}
