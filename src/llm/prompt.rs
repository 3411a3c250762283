//! Prompt construction for commit message generation.

/// Instruction template. `{diff}` and `{language}` are the only placeholders.
const COMMIT_PROMPT_TEMPLATE: &str = r#"You are an AI assistant that generates professional and concise git commit messages following the Conventional Commits specification.

Each commit message should start with one of the following types, with their meanings:

- feat: A new feature
- fix: A bug fix
- docs: Documentation only changes
- style: Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)
- refactor: A code change that neither fixes a bug nor adds a feature
- perf: A code change that improves performance
- test: Adding missing tests or correcting existing tests
- chore: Changes to the build process or auxiliary tools and libraries such as documentation generation

Given the code changes in the diff below, write a commit message that:

- Starts with the appropriate type from above
- Uses the present tense
- Is no longer than 72 characters in the subject line
- Includes a short summary in the first line
- Optionally adds a more detailed description separated by a blank line
- Clearly describes what has been changed or fixed

IMPORTANT: You must write the entire commit message in {language}. Do not use English if the requested language is different.

Return ONLY the commit message as plain text. Do not wrap it in markdown code fences, backticks, or quotes, and do not add any explanation.

Here is the code diff:

{diff}

Generate the commit message entirely in {language}:"#;

/// Render the commit prompt for `diff`, written in `language_name`.
pub fn build_commit_prompt(diff: &str, language_name: &str) -> String {
    render(COMMIT_PROMPT_TEMPLATE, &[("diff", diff), ("language", language_name)])
}

/// Expand `{name}` placeholders in one pass over `template`.
///
/// Substituted values are copied verbatim and never scanned again, so a diff
/// that itself contains `{diff}` or `{language}` cannot alter the prompt.
/// Braces that do not form a known placeholder are kept as-is.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra * 2);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
