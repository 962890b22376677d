//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! The driver itself lives in the `commands` module.

use std::str::FromStr;

use clap::Parser;

/// Builds a growable array of strings and prints it.
///
/// Values are appended in order, then every `--insert` is applied, then every
/// `--remove`. With no values and no operations, runs the built-in scenario:
/// append 10, 20, 30, 40 and insert 50 at the front.
#[derive(Parser, Debug)]
#[command(name = "growable-demo", version, about, long_about = None)]
pub struct Cli {
    /// Values to append
    pub values: Vec<String>,

    /// Insert VALUE so that it ends up at INDEX
    #[arg(long = "insert", value_name = "INDEX:VALUE")]
    pub insertions: Vec<Insertion>,

    /// Remove the element at INDEX
    #[arg(long = "remove", value_name = "INDEX")]
    pub removals: Vec<usize>,

    /// Print from the last element to the first
    #[arg(long)]
    pub reverse: bool,

    /// Text printed between elements
    #[arg(long, default_value = " ")]
    pub separator: String,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// True when no values or operations were given on the command line.
    pub fn is_scenario(&self) -> bool {
        self.values.is_empty() && self.insertions.is_empty() && self.removals.is_empty()
    }
}

/// A positional insertion, written `INDEX:VALUE` on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub index: usize,
    pub value: String,
}

impl FromStr for Insertion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (index, value) = s
            .split_once(':')
            .ok_or_else(|| format!("expected INDEX:VALUE, got `{s}`"))?;
        let index = index
            .parse()
            .map_err(|e| format!("invalid index `{index}`: {e}"))?;
        Ok(Insertion {
            index,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_insertion() {
        assert_eq!(
            "0:50".parse::<Insertion>(),
            Ok(Insertion {
                index: 0,
                value: "50".to_string()
            })
        );
        // Only the first colon separates the index.
        assert_eq!(
            "2:a:b".parse::<Insertion>().map(|i| i.value),
            Ok("a:b".to_string())
        );
    }

    #[test]
    fn parse_insertion_errors() {
        assert!("50".parse::<Insertion>().is_err());
        assert!("x:50".parse::<Insertion>().is_err());
        assert!("-1:50".parse::<Insertion>().is_err());
    }

    #[test]
    fn no_arguments_is_scenario() {
        let cli = Cli::try_parse_from(["growable-demo"]).unwrap();
        assert!(cli.is_scenario());
        assert_eq!(cli.separator, " ");
        assert!(!cli.reverse);
    }

    #[test]
    fn full_command_line() {
        let cli = Cli::try_parse_from([
            "growable-demo",
            "a",
            "b",
            "--insert",
            "1:x",
            "--insert",
            "0:y",
            "--remove",
            "3",
            "--reverse",
            "--separator",
            ",",
        ])
        .unwrap();
        assert!(!cli.is_scenario());
        assert_eq!(cli.values, ["a", "b"]);
        assert_eq!(cli.insertions.len(), 2);
        assert_eq!(cli.insertions[1].index, 0);
        assert_eq!(cli.removals, [3]);
        assert!(cli.reverse);
        assert_eq!(cli.separator, ",");
    }

    #[test]
    fn malformed_insertion_is_rejected() {
        assert!(Cli::try_parse_from(["growable-demo", "--insert", "oops"]).is_err());
    }
}
