use redux_helpers::{action_creator, ActionCreator, Namespace};

/// Actions understood by the counter store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Increment(i64),
    Decrement(i64),
    /// Handled by middleware: becomes `Increment` when the counter is odd
    IncrementIfOdd(i64),
    Reset,
}

impl Action {
    /// Short label recorded in the history slice
    pub fn label(&self) -> String {
        match self {
            Action::Increment(n) => format!("+{}", n),
            Action::Decrement(n) => format!("-{}", n),
            Action::IncrementIfOdd(n) => format!("+{}?", n),
            Action::Reset => "reset".to_string(),
        }
    }
}

/// Action creators exposed to the command loop, keyed by command name
pub fn action_creators() -> Namespace<ActionCreator<i64, Action>> {
    Namespace::new()
        .callable("increment", action_creator(Action::Increment))
        .callable("decrement", action_creator(Action::Decrement))
        .callable("increment_if_odd", action_creator(Action::IncrementIfOdd))
        .callable("reset", action_creator(|_: i64| Action::Reset))
        .value("version", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels() {
        assert_eq!(Action::Increment(2).label(), "+2");
        assert_eq!(Action::Decrement(1).label(), "-1");
        assert_eq!(Action::IncrementIfOdd(3).label(), "+3?");
        assert_eq!(Action::Reset.label(), "reset");
    }

    #[test]
    fn test_action_creators_namespace() {
        let creators = action_creators();
        let names: Vec<&str> = creators.callables().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec!["increment", "decrement", "increment_if_odd", "reset"]
        );
        assert_eq!(creators.len(), 5);

        let (_, increment) = creators.callables().next().unwrap();
        assert_eq!(increment(4), Action::Increment(4));
    }
}
