//! Action creators that dispatch what they create
//!
//! `bind_action_creator(create, dispatch)(args) == dispatch(create(args))`
//!
//! A single creator binds infallibly through [`bind_action_creator`].
//! [`bind_action_creators`] accepts the keyed form as well, plus plain data
//! received at runtime, and rejects anything that is neither a creator nor a
//! mapping.

use crate::dispatch::Dispatch;
use crate::error::{BindError, Result};
use crate::namespace::Namespace;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Action creator - builds an action from its arguments
pub type ActionCreator<Args, A> = Arc<dyn Fn(Args) -> A + Send + Sync>;

/// Wrap a closure or fn item as an [`ActionCreator`]
pub fn action_creator<Args, A, F>(f: F) -> ActionCreator<Args, A>
where
    F: Fn(Args) -> A + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Input accepted by [`bind_action_creators`]
pub enum ActionCreators<Args, A> {
    Single(ActionCreator<Args, A>),
    Keyed(Namespace<ActionCreator<Args, A>>),
    /// Plain data, e.g. a deserialized module. Objects bind to an empty
    /// mapping, everything else is rejected.
    Value(Value),
}

impl<Args, A> From<ActionCreator<Args, A>> for ActionCreators<Args, A> {
    fn from(creator: ActionCreator<Args, A>) -> Self {
        ActionCreators::Single(creator)
    }
}

impl<Args, A> From<Namespace<ActionCreator<Args, A>>> for ActionCreators<Args, A> {
    fn from(namespace: Namespace<ActionCreator<Args, A>>) -> Self {
        ActionCreators::Keyed(namespace)
    }
}

impl<Args, A> From<Value> for ActionCreators<Args, A> {
    fn from(value: Value) -> Self {
        ActionCreators::Value(value)
    }
}

/// An action creator wired to a dispatch function
pub struct BoundActionCreator<Args, R> {
    inner: Arc<dyn Fn(Args) -> R + Send + Sync>,
}

impl<Args, R> BoundActionCreator<Args, R> {
    /// Create the action and dispatch it, returning what dispatch returned
    pub fn call(&self, args: Args) -> R {
        (self.inner)(args)
    }
}

impl<Args, R> Clone for BoundActionCreator<Args, R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<Args, R> fmt::Debug for BoundActionCreator<Args, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundActionCreator").finish_non_exhaustive()
    }
}

/// Output of [`bind_action_creators`], shaped like its input
#[derive(Debug, Clone)]
pub enum BoundActionCreators<Args, R> {
    Single(BoundActionCreator<Args, R>),
    Keyed(IndexMap<String, BoundActionCreator<Args, R>>),
}

impl<Args, R> BoundActionCreators<Args, R> {
    pub fn as_single(&self) -> Option<&BoundActionCreator<Args, R>> {
        match self {
            BoundActionCreators::Single(bound) => Some(bound),
            BoundActionCreators::Keyed(_) => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&BoundActionCreator<Args, R>> {
        match self {
            BoundActionCreators::Single(_) => None,
            BoundActionCreators::Keyed(map) => map.get(key),
        }
    }

    /// Keys of the keyed form, in input order
    pub fn keys(&self) -> Vec<&str> {
        match self {
            BoundActionCreators::Single(_) => Vec::new(),
            BoundActionCreators::Keyed(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

/// Bind one action creator to `dispatch`
pub fn bind_action_creator<Args, A, R>(
    creator: ActionCreator<Args, A>,
    dispatch: Dispatch<A, R>,
) -> BoundActionCreator<Args, R>
where
    Args: 'static,
    A: 'static,
    R: 'static,
{
    BoundActionCreator {
        inner: Arc::new(move |args| dispatch.call(creator(args))),
    }
}

/// Bind a single creator or every creator of a mapping to `dispatch`
///
/// Non-callable entries of a mapping are dropped from the result.
pub fn bind_action_creators<Args, A, R>(
    creators: impl Into<ActionCreators<Args, A>>,
    dispatch: Dispatch<A, R>,
) -> Result<BoundActionCreators<Args, R>>
where
    Args: 'static,
    A: 'static,
    R: 'static,
{
    match creators.into() {
        ActionCreators::Single(creator) => Ok(BoundActionCreators::Single(bind_action_creator(
            creator, dispatch,
        ))),
        ActionCreators::Keyed(namespace) => Ok(bind_namespace(&namespace, &dispatch)),
        ActionCreators::Value(Value::Object(object)) => Ok(bind_namespace(
            &Namespace::from_json_object(object),
            &dispatch,
        )),
        ActionCreators::Value(other) => Err(BindError::InvalidArgument {
            received: json_type_name(&other).to_string(),
        }),
    }
}

fn bind_namespace<Args, A, R>(
    namespace: &Namespace<ActionCreator<Args, A>>,
    dispatch: &Dispatch<A, R>,
) -> BoundActionCreators<Args, R>
where
    Args: 'static,
    A: 'static,
    R: 'static,
{
    let bound: IndexMap<String, BoundActionCreator<Args, R>> = namespace
        .callables()
        .map(|(key, creator)| {
            (
                key.to_string(),
                bind_action_creator(Arc::clone(creator), dispatch.clone()),
            )
        })
        .collect();

    let dropped = namespace.len() - bound.len();
    if dropped > 0 {
        log::debug!("Dropped {} non-callable action creator entries", dropped);
    }
    BoundActionCreators::Keyed(bound)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
