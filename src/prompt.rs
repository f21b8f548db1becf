//! Interactive prompting for run settings.
//!
//! An empty answer (or end of input) keeps the value shown in brackets.
//! A target that is not a directory stops the questions right away.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::cli::Settings;
use crate::core::SortKey;
use crate::report::check_target;

pub fn prompt_settings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: Settings,
) -> Result<Settings> {
    writeln!(output, "=== File tree ===")?;

    let answer = ask(
        input,
        output,
        &format!("Directory to scan [{}]: ", defaults.target.display()),
    )?;
    let target = if answer.is_empty() {
        defaults.target
    } else {
        PathBuf::from(answer)
    };
    check_target(&target)?;

    let answer = ask(
        input,
        output,
        &format!(
            "Print the tree to the console? [{}]: ",
            if defaults.mirror_console { "Y/n" } else { "y/N" }
        ),
    )?;
    let mirror_console = match answer.to_lowercase().as_str() {
        "y" | "yes" | "1" => true,
        "n" | "no" | "2" => false,
        _ => defaults.mirror_console,
    };

    writeln!(output, "Sort entries by:")?;
    writeln!(output, "1 - name (alphabetical)")?;
    writeln!(output, "2 - creation time (newest first)")?;
    writeln!(output, "3 - size (largest first)")?;
    let answer = ask(
        input,
        output,
        &format!("Choose 1, 2 or 3 [{}]: ", sort_choice(defaults.sort_key)),
    )?;
    let sort_key = match answer.as_str() {
        "1" => SortKey::Name,
        "2" => SortKey::CreationTime,
        "3" => SortKey::Size,
        _ => defaults.sort_key,
    };

    let default_destination = defaults
        .destination
        .clone()
        .unwrap_or_else(|| target.clone());
    writeln!(output, "Where should the report be saved?")?;
    writeln!(output, "1 - {}", default_destination.display())?;
    writeln!(output, "2 - another directory")?;
    let answer = ask(input, output, "Choose 1 or 2 [1]: ")?;
    let destination = if answer == "2" {
        let path = ask(input, output, "Directory to save the report in: ")?;
        if path.is_empty() {
            writeln!(
                output,
                "No directory given, using {}",
                default_destination.display()
            )?;
            defaults.destination
        } else {
            Some(PathBuf::from(path))
        }
    } else {
        defaults.destination
    };

    Ok(Settings {
        target,
        mirror_console,
        sort_key,
        destination,
    })
}

fn sort_choice(key: SortKey) -> u8 {
    match key {
        SortKey::Name => 1,
        SortKey::CreationTime => 2,
        SortKey::Size => 3,
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("failed to read answer")?;
    Ok(answer.trim().to_owned())
}
