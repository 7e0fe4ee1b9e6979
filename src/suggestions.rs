//! # Error Suggestions
//!
//! Helper functions that turn library errors into messages telling users
//! what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rit_repo::suggestions;
//!
//! let err = setter.set_priority(name, priority).map_err(|e| suggestions::explain(e, &names))?;
//! ```

use std::path::Path;

use crate::error::{Error, NO_REPOSITORIES_MESSAGE};

/// Generate an error for when the repositories file does not exist yet.
///
/// Includes hints about:
/// - Pointing at another home with --home
/// - Using the RIT_HOME environment variable
pub fn no_repositories(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "{NO_REPOSITORIES_MESSAGE}\n\
         looked for: {path}\n\n\
         hint: Add a repository first, it will create the file\n\
         hint: Use --home to point at a different home directory\n\
         hint: Set RIT_HOME environment variable",
        path = path.display()
    )
}

/// Generate an error for an unknown repository name.
///
/// Suggests the closest existing name when one is within a small edit
/// distance, and lists what is available.
pub fn repository_not_found(name: &str, available: &[&str]) -> anyhow::Error {
    let did_you_mean = find_similar(name, available)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();
    let listing = if available.is_empty() {
        "No repositories are configured.".to_string()
    } else {
        format!("Available repositories: {}", available.join(", "))
    };

    anyhow::anyhow!(
        "Repository not found: {name}{did_you_mean}\n\n\
         {listing}\n\
         hint: Run 'rit-repo list' to see configured repositories"
    )
}

/// Generate an error for a stdin payload that could not be decoded.
pub fn invalid_stdin(error: &serde_json::Error) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid input on stdin: {error}\n\n\
         hint: Expected a JSON object like {{\"name\": \"commons\", \"priority\": 0}}\n\
         hint: Pass NAME and PRIORITY as arguments instead"
    )
}

/// Generate an error for a prompt that could not be shown.
///
/// Raised when stdin or the terminal is not interactive, e.g. in scripts.
pub fn not_interactive(error: impl std::fmt::Display) -> anyhow::Error {
    anyhow::anyhow!(
        "Cannot prompt for input: {error}\n\n\
         hint: Pass NAME and PRIORITY as arguments, e.g. 'rit-repo set-priority commons 0'\n\
         hint: Use --stdin to read {{\"name\": ..., \"priority\": ...}} from stdin"
    )
}

/// Convert a library error into a user-facing one, adding hints where the
/// failure has an obvious fix.
pub fn explain(error: Error, available: &[&str]) -> anyhow::Error {
    match error {
        Error::NotExist { path } => no_repositories(&path),
        Error::NotFound { name } => repository_not_found(&name, available),
        Error::Parse { path, source } => anyhow::anyhow!(
            "Failed to parse {path}: {source}\n\n\
             hint: The file must be a JSON array of repositories",
            path = path.display()
        ),
        other => other.into(),
    }
}

/// Pick the configured name closest to `input`, if any is close enough.
///
/// The allowed distance grows with name length, one edit per four
/// characters, between 1 and 3. Ties go to the earlier candidate, which is
/// the higher-priority repository when the list is passed in rank order.
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input_len = input.chars().count();
    let mut best: Option<(&'a str, usize)> = None;

    for &candidate in candidates {
        let budget = (input_len.max(candidate.chars().count()) / 4).clamp(1, 3);
        let distance = edit_distance(input, candidate);
        // Replacing every character is not a typo; stops "a" matching "b".
        if distance > budget || distance >= input_len {
            continue;
        }
        if best.map_or(true, |(_, closest)| distance < closest) {
            best = Some((candidate, distance));
        }
    }

    best.map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Single rolling row.
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, a_char) in a_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b_chars.len()]
}
