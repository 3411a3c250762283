//! Interactive y/n confirmation.

use std::io::{BufRead, Write};

use crate::error::ConfirmError;

/// Ask `question` until the answer is yes or no.
///
/// Accepts `y`/`yes` and `n`/`no` in any case; anything else asks again.
/// Input and output are injected so the prompt can be driven from tests.
pub fn confirm<R: BufRead, W: Write>(
    question: &str,
    mut input: R,
    mut output: W,
) -> Result<bool, ConfirmError> {
    let mut line = String::new();

    loop {
        write!(output, "{}", question).map_err(ConfirmError::Write)?;
        output.flush().map_err(ConfirmError::Write)?;

        line.clear();
        let read = input.read_line(&mut line).map_err(ConfirmError::Read)?;
        if read == 0 {
            return Err(ConfirmError::InputClosed);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (Result<bool, ConfirmError>, String) {
        let mut out = Vec::new();
        let result = confirm("Commit? ", Cursor::new(input), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_accepted_answers() {
        let cases = [
            ("y\n", true),
            ("yes\n", true),
            ("Y\n", true),
            ("YES\n", true),
            ("n\n", false),
            ("no\n", false),
            ("N\n", false),
            ("NO\n", false),
            ("  yes  \n", true),
        ];
        for (input, expected) in cases {
            let (result, _) = answer(input);
            assert_eq!(result.unwrap(), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_reprompts_on_unrecognized_answer() {
        let (result, out) = answer("maybe\ny\n");
        assert!(result.unwrap());
        assert_eq!(out.matches("Commit? ").count(), 2);
    }

    #[test]
    fn test_final_line_without_newline() {
        let (result, _) = answer("n");
        assert!(!result.unwrap());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (result, out) = answer("");
        assert!(matches!(result, Err(ConfirmError::InputClosed)));
        assert_eq!(out, "Commit? ");

        let (result, _) = answer("what\n");
        assert!(matches!(result, Err(ConfirmError::InputClosed)));
    }
}
