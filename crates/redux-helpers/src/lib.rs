//! Functional helpers for Redux-style stores
//!
//! This crate provides:
//! - Right-to-left function composition (`compose`, `compose_with`, `compose!`)
//! - Middleware chains installed around a store's dispatch (`apply_middleware`)
//! - Action creators bound to a dispatch function (`bind_action_creators`)
//! - Per-key reducer composition over JSON state (`compose_reducers`)
//!
//! Store creation is kept to the minimum the store-enhancer protocol needs
//! (`create_store`).

pub mod bind_action_creators;
pub mod compose;
pub mod compose_reducers;
pub mod dispatch;
pub mod error;
pub mod middleware;
pub mod namespace;
pub mod store;

pub use bind_action_creators::{
    action_creator, bind_action_creator, bind_action_creators, ActionCreator, ActionCreators,
    BoundActionCreator, BoundActionCreators,
};
pub use compose::{compose, compose_with, Composed};
pub use compose_reducers::{compose_reducers, slice_reducer, SliceReducer};
pub use dispatch::{Dispatch, GetState, Unary};
pub use error::{BindError, Result};
pub use middleware::{apply_middleware, from_fn, logging_middleware, Link, Middleware, MiddlewareApi};
pub use namespace::{Member, Namespace};
pub use store::{
    compose_enhancers, create_store, create_store_fn, reducer, CreateStore, Reducer, Store,
    StoreEnhancer,
};
