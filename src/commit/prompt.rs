//! Prompt construction for AI-generated commit messages.

/// Build the LLM prompt for generating a commit subject line.
///
/// The diff is embedded verbatim. Length limits are guidance for the model
/// only; nothing checks the reply against them.
pub fn build_commit_prompt(diff: &str) -> String {
    format!(
        r#"For the following Git diff, generate a single, short commit message (max 10 words and under 50 characters for the subject line) that accurately summarizes the changes.
Be precise, but don't sacrifice readability.

Follow conventional commit style, using prefixes like `feat:`, `fix:`, `refactor:`, `docs:`, `test:`, `chore:`.
Start the subject line with a strong, imperative verb ('Add', 'Fix', 'Remove', 'Update').
Respond with the subject line only.

Git Diff:
```diff
{diff}
```

Commit Message:
"#
    )
}
