//! The demo driver - build an array from the command line and print it.

use growable::{Cursor, Direction, GrowableArray};

use crate::cli::{Cli, Insertion};
use crate::common::CliResult;

const SCENARIO_VALUES: [&str; 4] = ["10", "20", "30", "40"];
const SCENARIO_INSERTION: (usize, &str) = (0, "50");

/// Run the demo and print the resulting line to stdout.
pub fn run(cli: &Cli) -> CliResult<()> {
    let array = build(cli)?;
    let line = if cli.reverse {
        render(array.reverse_cursor(), &cli.separator)?
    } else {
        render(array.cursor(), &cli.separator)?
    };
    println!("{line}");
    Ok(())
}

/// Apply the command line (or the built-in scenario) to a fresh array.
pub fn build(cli: &Cli) -> CliResult<GrowableArray<String>> {
    if cli.is_scenario() {
        let (index, value) = SCENARIO_INSERTION;
        let values = SCENARIO_VALUES.map(String::from);
        let insertion = Insertion {
            index,
            value: value.to_string(),
        };
        return apply(&values, &[insertion], &[]);
    }
    apply(&cli.values, &cli.insertions, &cli.removals)
}

fn apply(
    values: &[String],
    insertions: &[Insertion],
    removals: &[usize],
) -> CliResult<GrowableArray<String>> {
    let mut array = GrowableArray::new();

    for value in values {
        let index = array.push(value.clone());
        tracing::debug!(index, %value, capacity = array.capacity(), "appended");
    }

    for Insertion { index, value } in insertions {
        array.insert(*index, value.clone())?;
        tracing::debug!(index, %value, capacity = array.capacity(), "inserted");
    }

    for &index in removals {
        let removed = array.remove(index)?;
        tracing::debug!(index, value = %removed, "removed");
    }

    Ok(array)
}

/// Join every element the cursor visits with `separator`.
pub fn render<D: Direction>(
    mut cursor: Cursor<'_, String, D>,
    separator: &str,
) -> CliResult<String> {
    let mut parts = Vec::with_capacity(cursor.len());
    while cursor.has_next() {
        let Some(value) = cursor.current() else {
            unreachable!("has_next() implies a current element");
        };
        parts.push(value.as_str());
        cursor.advance()?;
    }
    Ok(parts.join(separator))
}
