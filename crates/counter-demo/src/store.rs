use crate::actions::Action;
use crate::config::AppConfig;
use crate::middleware;
use crate::reducers::root_reducer;
use redux_helpers::{apply_middleware, create_store, Store};
use serde_json::{json, Value};

/// Build the counter store: composed reducers wrapped in the middleware chain
pub fn build_store(config: &AppConfig) -> Store<Value, Action> {
    let initial_state = json!({ "counter": config.initial_count, "history": [] });
    create_store(
        root_reducer(config.history_limit),
        Some(initial_state),
        Some(apply_middleware(middleware::chain(config.log_actions))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::action_creators;
    use pretty_assertions::assert_eq;
    use redux_helpers::bind_action_creators;

    fn config(initial_count: i64) -> AppConfig {
        AppConfig {
            initial_count,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_bound_creators_drive_the_store() {
        let store = build_store(&config(0));
        let creators = bind_action_creators(action_creators(), store.dispatch.clone()).unwrap();

        assert!(creators.get("version").is_none());
        let returned = creators.get("increment").unwrap().call(2);
        creators.get("decrement").unwrap().call(1);

        assert_eq!(returned, Action::Increment(2));
        assert_eq!(store.state(), json!({ "counter": 1, "history": ["+2", "-1"] }));
    }

    #[test]
    fn test_increment_if_odd_reenters_chain() {
        let store = build_store(&config(3));

        let returned = store.dispatch.call(Action::IncrementIfOdd(4));

        // The nested Increment is what reached the reducer
        assert_eq!(returned, Action::Increment(4));
        assert_eq!(store.state(), json!({ "counter": 7, "history": ["+4"] }));
    }

    #[test]
    fn test_increment_if_odd_skips_even_counter() {
        let store = build_store(&AppConfig {
            log_actions: false,
            ..config(2)
        });

        let returned = store.dispatch.call(Action::IncrementIfOdd(4));

        assert_eq!(returned, Action::IncrementIfOdd(4));
        assert_eq!(store.state(), json!({ "counter": 2, "history": [] }));
    }
}
