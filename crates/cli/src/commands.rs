/// One line of user input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fill the entry form and submit it. Missing words stay empty and
    /// fail form validation downstream, exactly like submitting a
    /// half-filled form.
    Add {
        amount: String,
        currency: String,
        description: String,
    },
    /// Delete the expense with this server-assigned id.
    Delete(i64),
    /// Re-fetch and redraw both regions.
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// Parse a line of input. Returns `None` for blank lines, unknown
    /// commands, and a `delete` without a numeric id.
    pub fn parse(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let head = words.next()?.to_lowercase();

        match head.as_str() {
            "add" => {
                let amount = words.next().unwrap_or_default().to_string();
                let currency = words.next().unwrap_or_default().to_string();
                let description = words.collect::<Vec<_>>().join(" ");
                Some(Command::Add {
                    amount,
                    currency,
                    description,
                })
            }
            "delete" | "del" | "rm" => words.next()?.parse().ok().map(Command::Delete),
            "refresh" | "reload" => Some(Command::Refresh),
            "help" | "?" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_add() {
        assert_eq!(
            Command::parse("add 25.5 EUR Lunch with the team"),
            Some(Command::Add {
                amount: "25.5".into(),
                currency: "EUR".into(),
                description: "Lunch with the team".into(),
            })
        );
    }

    #[test]
    fn bare_add_keeps_fields_empty() {
        assert_eq!(
            Command::parse("add"),
            Some(Command::Add {
                amount: String::new(),
                currency: String::new(),
                description: String::new(),
            })
        );
    }

    #[test]
    fn parses_delete_with_id() {
        assert_eq!(Command::parse("delete 7"), Some(Command::Delete(7)));
        assert_eq!(Command::parse("rm 2"), Some(Command::Delete(2)));
    }

    #[test]
    fn delete_without_numeric_id_is_rejected() {
        assert_eq!(Command::parse("delete"), None);
        assert_eq!(Command::parse("delete lunch"), None);
    }

    #[test]
    fn recognises_aliases_case_insensitively() {
        assert_eq!(Command::parse("REFRESH"), Some(Command::Refresh));
        assert_eq!(Command::parse("Q"), Some(Command::Quit));
        assert_eq!(Command::parse("?"), Some(Command::Help));
    }

    #[test]
    fn blank_and_unknown_lines_are_none() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   "), None);
        assert_eq!(Command::parse("frobnicate"), None);
    }
}
