//! Line commands read by the demo loop

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Call the bound action creator `name` with `amount`
    Dispatch { name: &'static str, amount: i64 },
    Show,
    Quit,
}

/// Parse one input line; `step` is used when no amount is given
pub fn parse(line: &str, step: i64) -> anyhow::Result<Command> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(Command::Show);
    };

    let name = match word {
        "inc" | "+" => "increment",
        "dec" | "-" => "decrement",
        "odd" => "increment_if_odd",
        "reset" => "reset",
        "show" => return Ok(Command::Show),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        other => anyhow::bail!("Unknown command: {}", other),
    };

    let amount = match words.next() {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid amount {:?}: {}", raw, e))?,
        None => step,
    };

    Ok(Command::Dispatch { name, amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dispatch_commands() {
        assert_eq!(
            parse("inc 5", 1).unwrap(),
            Command::Dispatch {
                name: "increment",
                amount: 5
            }
        );
        assert_eq!(
            parse("  dec  ", 3).unwrap(),
            Command::Dispatch {
                name: "decrement",
                amount: 3
            }
        );
        assert_eq!(
            parse("odd", 1).unwrap(),
            Command::Dispatch {
                name: "increment_if_odd",
                amount: 1
            }
        );
    }

    #[test]
    fn test_parse_control_commands() {
        assert_eq!(parse("", 1).unwrap(), Command::Show);
        assert_eq!(parse("show", 1).unwrap(), Command::Show);
        assert_eq!(parse("q", 1).unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("jump", 1).is_err());
        assert!(parse("inc many", 1).is_err());
    }
}
