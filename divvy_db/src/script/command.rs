use crate::error::ScriptError;

/// One line of the command language, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddGroup { group: String },
    ListGroups,
    AddUser { group: String, user: String },
    RemoveUser { group: String, user: String },
    ListUsers { group: String },
    UserBalance { group: String, user: String },
    UnderPaid { group: String },
    AddXct { group: String, user: String, amount: f64 },
    RecentXct { group: String, count: usize },
    Quit,
}

impl Command {
    /// Parses a single line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ScriptError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.replace('-', "_").as_str() {
            "add_group" => {
                let [group] = expect_args::<1>("add_group", &args)?;
                Command::AddGroup {
                    group: group.to_owned(),
                }
            }
            "list_groups" => {
                expect_args::<0>("list_groups", &args)?;
                Command::ListGroups
            }
            "add_user" => {
                let [group, user] = expect_args::<2>("add_user", &args)?;
                Command::AddUser {
                    group: group.to_owned(),
                    user: user.to_owned(),
                }
            }
            "remove_user" => {
                let [group, user] = expect_args::<2>("remove_user", &args)?;
                Command::RemoveUser {
                    group: group.to_owned(),
                    user: user.to_owned(),
                }
            }
            "list_users" => {
                let [group] = expect_args::<1>("list_users", &args)?;
                Command::ListUsers {
                    group: group.to_owned(),
                }
            }
            "user_balance" | "balance" => {
                let [group, user] = expect_args::<2>("user_balance", &args)?;
                Command::UserBalance {
                    group: group.to_owned(),
                    user: user.to_owned(),
                }
            }
            "under_paid" => {
                let [group] = expect_args::<1>("under_paid", &args)?;
                Command::UnderPaid {
                    group: group.to_owned(),
                }
            }
            "add_xct" | "add_transaction" => {
                let [group, user, amount] = expect_args::<3>("add_xct", &args)?;
                Command::AddXct {
                    group: group.to_owned(),
                    user: user.to_owned(),
                    amount: parse_amount(amount)?,
                }
            }
            "recent_xct" | "recent_transactions" => {
                let [group, count] = expect_args::<2>("recent_xct", &args)?;
                Command::RecentXct {
                    group: group.to_owned(),
                    count: count
                        .parse()
                        .map_err(|_| ScriptError::InvalidCount(count.to_owned()))?,
                }
            }
            "quit" | "exit" => {
                expect_args::<0>("quit", &args)?;
                Command::Quit
            }
            _ => return Err(ScriptError::UnknownCommand(keyword.to_owned())),
        };

        Ok(Some(command))
    }
}

fn expect_args<'a, const N: usize>(
    command: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], ScriptError> {
    <[&str; N]>::try_from(args).map_err(|_| ScriptError::Arity {
        command,
        expected: N,
        actual: args.len(),
    })
}

fn parse_amount(raw: &str) -> Result<f64, ScriptError> {
    raw.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ScriptError::InvalidAmount(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_skips_blank_and_comments() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t").unwrap(), None);
        assert_eq!(Command::parse("# settle up").unwrap(), None);
    }

    #[test]
    fn test_parses_underscore_keywords() {
        assert_eq!(
            Command::parse("add_xct camp alice 12.50").unwrap(),
            Some(Command::AddXct {
                group: "camp".to_string(),
                user: "alice".to_string(),
                amount: 12.5
            })
        );
        assert_eq!(
            Command::parse("  recent_xct   camp 3 ").unwrap(),
            Some(Command::RecentXct {
                group: "camp".to_string(),
                count: 3
            })
        );
        assert_eq!(Command::parse("list_groups").unwrap(), Some(Command::ListGroups));
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_accepts_hyphenated_aliases() {
        assert_eq!(
            Command::parse("add-transaction camp bob -4").unwrap(),
            Some(Command::AddXct {
                group: "camp".to_string(),
                user: "bob".to_string(),
                amount: -4.0
            })
        );
        assert_eq!(
            Command::parse("balance camp bob").unwrap(),
            Some(Command::UserBalance {
                group: "camp".to_string(),
                user: "bob".to_string()
            })
        );
        assert_eq!(
            Command::parse("under-paid camp").unwrap(),
            Some(Command::UnderPaid {
                group: "camp".to_string()
            })
        );
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(
            Command::parse("add_user camp").unwrap_err(),
            ScriptError::Arity {
                command: "add_user",
                expected: 2,
                actual: 1
            }
        );
        assert!(matches!(
            Command::parse("list_groups extra"),
            Err(ScriptError::Arity { .. })
        ));
    }

    #[test]
    fn test_bad_numbers() {
        assert_eq!(
            Command::parse("add_xct camp alice lots").unwrap_err(),
            ScriptError::InvalidAmount("lots".to_string())
        );
        assert_eq!(
            Command::parse("add_xct camp alice NaN").unwrap_err(),
            ScriptError::InvalidAmount("NaN".to_string())
        );
        assert_eq!(
            Command::parse("recent_xct camp -1").unwrap_err(),
            ScriptError::InvalidCount("-1".to_string())
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            Command::parse("delete_group camp").unwrap_err(),
            ScriptError::UnknownCommand("delete_group".to_string())
        );
    }
}
