//! Implementation of the `mailpatch check` command.

use crate::cli::CheckArgs;
use crate::error::{MailPatchError, Result};
use crate::fs::atomic_write;
use crate::patch::{Recognition, recognize};
use std::io::Read;

/// Execute the `mailpatch check` command.
///
/// Exits with the recognition-failure code when the body is not a clean patch.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let body = read_input(&args.input)?;
    let recognition = recognize(&body);

    if args.json {
        let json = serde_json::to_string_pretty(&recognition).map_err(|e| {
            MailPatchError::UserError(format!("failed to serialize result: {}", e))
        })?;
        println!("{}", json);
    } else {
        print!("{}", render_report(&recognition));
    }

    if let Some(output) = &args.output {
        atomic_write(output, recognition.patch.as_bytes())?;
        log::info!("wrote {}", output.display());
    }

    if !recognition.success {
        return Err(MailPatchError::RecognitionFailed(1));
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .map_err(|e| MailPatchError::io("<stdin>", e))?;
        return Ok(body);
    }

    std::fs::read_to_string(input).map_err(|e| MailPatchError::io(input, e))
}

/// Human-readable verdict followed by one line per violation.
fn render_report(recognition: &Recognition) -> String {
    let mut out = String::new();

    if recognition.success {
        out.push_str("patch: ok\n");
    } else {
        out.push_str("patch: not a clean patch\n");
    }

    for violation in &recognition.violations {
        out.push_str(&format!("  - {}\n", violation));
    }

    out
}
