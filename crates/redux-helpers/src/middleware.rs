//! Middleware system for Redux-style stores
//!
//! Middleware sits between action dispatch and the reducer, allowing side
//! effects, logging and other cross-cutting concerns to be layered around a
//! store's dispatch.
//!
//! ## Design
//!
//! ```text
//! dispatch(action) → m1 → m2 → ... → base dispatch → reducer
//! ```
//!
//! A middleware receives a [`MiddlewareApi`] and returns a [`Link`]: a
//! function from the next dispatch in the chain to a new dispatch. The
//! links are composed right to left, so the first middleware is the
//! outermost one. It sees the action first and the result last.
//!
//! `MiddlewareApi::dispatch` always goes through the whole chain, so a
//! middleware can dispatch follow-up actions from inside its own handler.
//!
//! ## Example
//!
//! ```
//! use redux_helpers::{apply_middleware, create_store, from_fn, reducer, Middleware};
//! use std::sync::Arc;
//!
//! let double: Arc<dyn Middleware<i32, i32>> = Arc::new(from_fn(
//!     |_api: &redux_helpers::MiddlewareApi<i32, i32>, next: &redux_helpers::Dispatch<i32>, n: i32| {
//!         next.call(n * 2)
//!     },
//! ));
//!
//! let store = create_store(
//!     reducer(|state: i32, n: &i32| state + n),
//!     None,
//!     Some(apply_middleware(vec![double])),
//! );
//! store.dispatch.call(21);
//! assert_eq!(store.state(), 42);
//! ```

use crate::compose::compose;
use crate::dispatch::{Dispatch, GetState, Unary};
use crate::store::{CreateStore, Reducer, Store, StoreEnhancer};
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

/// One link of the chain: wraps the next dispatch into a new one
pub type Link<A, R = A> = Unary<Dispatch<A, R>>;

/// Slot holding the installed chain of one store
type ChainCell<A, R> = OnceLock<Dispatch<A, R>>;

/// Middleware trait - builds a chain link from the store API
///
/// Implemented for every `Fn(MiddlewareApi<S, A, R>) -> Link<A, R>`; use
/// [`from_fn`] to write a middleware as a single handler function.
pub trait Middleware<S, A, R = A>: Send + Sync {
    fn link(&self, api: MiddlewareApi<S, A, R>) -> Link<A, R>;
}

impl<S, A, R, F> Middleware<S, A, R> for F
where
    F: Fn(MiddlewareApi<S, A, R>) -> Link<A, R> + Send + Sync,
{
    fn link(&self, api: MiddlewareApi<S, A, R>) -> Link<A, R> {
        self(api)
    }
}

/// Restricted view of the store handed to middleware
///
/// The API only holds a weak reference to the chain it belongs to, since the
/// chain itself keeps the API. Take a [`dispatcher`](Self::dispatcher) to
/// dispatch from outside the chain, e.g. from a thread.
pub struct MiddlewareApi<S, A, R = A> {
    get_state: GetState<S>,
    cell: Weak<ChainCell<A, R>>,
    base: Dispatch<A, R>,
}

impl<S, A, R> MiddlewareApi<S, A, R> {
    /// Get the current store state
    pub fn get_state(&self) -> S {
        self.get_state.call()
    }

    /// Dispatch an action through the entire middleware chain
    pub fn dispatch(&self, action: A) -> R {
        match self.cell.upgrade() {
            Some(cell) => route(&cell, &self.base, action),
            None => {
                log::error!(
                    "Middleware API used after its store was dropped, \
                     forwarding to the base dispatch"
                );
                self.base.call(action)
            }
        }
    }
}

impl<S, A: 'static, R: 'static> MiddlewareApi<S, A, R> {
    /// A handle to the full-chain dispatch
    ///
    /// The handle keeps the chain alive for as long as it exists. Do not
    /// store it inside the link it was taken from.
    pub fn dispatcher(&self) -> Dispatch<A, R> {
        match self.cell.upgrade() {
            Some(cell) => chain_dispatch(cell, self.base.clone()),
            None => {
                log::error!("Middleware API used after its store was dropped");
                self.base.clone()
            }
        }
    }
}

impl<S, A, R> Clone for MiddlewareApi<S, A, R> {
    fn clone(&self) -> Self {
        Self {
            get_state: self.get_state.clone(),
            cell: Weak::clone(&self.cell),
            base: self.base.clone(),
        }
    }
}

impl<S, A, R> fmt::Debug for MiddlewareApi<S, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareApi").finish_non_exhaustive()
    }
}

/// Run `action` through the installed chain, or the base dispatch while the
/// chain is still being built
fn route<A, R>(cell: &ChainCell<A, R>, base: &Dispatch<A, R>, action: A) -> R {
    match cell.get() {
        Some(wrapped) => wrapped.call(action),
        None => {
            log::warn!(
                "Middleware dispatched before the chain was installed, \
                 forwarding to the base dispatch"
            );
            base.call(action)
        }
    }
}

/// Dispatch handle owning the chain cell
fn chain_dispatch<A: 'static, R: 'static>(
    cell: Arc<ChainCell<A, R>>,
    base: Dispatch<A, R>,
) -> Dispatch<A, R> {
    Dispatch::new(move |action| route(&cell, &base, action))
}

/// Build a middleware from a `(api, next, action) -> result` handler
pub fn from_fn<S, A, R, F>(handler: F) -> impl Middleware<S, A, R>
where
    S: 'static,
    A: 'static,
    R: 'static,
    F: Fn(&MiddlewareApi<S, A, R>, &Dispatch<A, R>, A) -> R + Send + Sync + 'static,
{
    let handler = Arc::new(handler);
    move |api: MiddlewareApi<S, A, R>| -> Link<A, R> {
        let handler = Arc::clone(&handler);
        Box::new(move |next: Dispatch<A, R>| {
            let handler = Arc::clone(&handler);
            let api = api.clone();
            Dispatch::new(move |action| handler(&api, &next, action))
        })
    }
}

/// LoggingMiddleware - logs every action and the state it produced
pub fn logging_middleware<S, A, R>() -> impl Middleware<S, A, R>
where
    S: fmt::Debug + 'static,
    A: fmt::Debug + 'static,
    R: 'static,
{
    from_fn(|api: &MiddlewareApi<S, A, R>, next: &Dispatch<A, R>, action: A| {
        log::debug!("Action: {:?}", action);
        let result = next.call(action);
        log::trace!("Next state: {:?}", api.get_state());
        result
    })
}

/// Create a store enhancer that installs `middlewares` around dispatch
///
/// For every store it creates, the enhancer:
/// 1. creates the base store
/// 2. hands each middleware an API whose `dispatch` forwards through a
///    one-slot cell
/// 3. composes the links around the base dispatch
/// 4. fills the cell with the result and returns the store with its
///    `dispatch` replaced
///
/// Dispatching from the API while the chain is still being built reaches the
/// base dispatch only.
pub fn apply_middleware<S, A, R>(
    middlewares: Vec<Arc<dyn Middleware<S, A, R>>>,
) -> StoreEnhancer<S, A, R>
where
    S: 'static,
    A: 'static,
    R: 'static,
{
    let middlewares: Arc<[Arc<dyn Middleware<S, A, R>>]> = middlewares.into();

    StoreEnhancer::new(move |create_store: CreateStore<S, A, R>| -> CreateStore<S, A, R> {
        let middlewares = Arc::clone(&middlewares);
        Arc::new(
            move |reducer: Reducer<S, A>,
                  initial_state: Option<S>,
                  enhancer: Option<StoreEnhancer<S, A, R>>| {
                let store = create_store(reducer, initial_state, enhancer);
                let base = store.dispatch.clone();

                // Links reach the cell through the API's weak handle; strong
                // handles live only in the store's dispatch and in dispatchers.
                let cell: Arc<ChainCell<A, R>> = Arc::new(OnceLock::new());
                let api = MiddlewareApi {
                    get_state: store.get_state.clone(),
                    cell: Arc::downgrade(&cell),
                    base: base.clone(),
                };
                let chain: Vec<Link<A, R>> = middlewares
                    .iter()
                    .map(|middleware| middleware.link(api.clone()))
                    .collect();
                log::debug!("Installing middleware chain with {} link(s)", chain.len());

                cell.get_or_init(|| compose(chain).call(base.clone()));

                Store {
                    dispatch: chain_dispatch(cell, base),
                    ..store
                }
            },
        )
    })
}
