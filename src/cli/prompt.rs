//! Interactive prompt helpers.

use std::io::{self, BufRead, Write};

/// Ask a question, returning `default` when the user just presses Enter.
pub fn prompt_line(question: &str, default: &str) -> io::Result<String> {
    if default.is_empty() {
        print!("{}: ", question);
    } else {
        print!("{} [{}]: ", question, default);
    }
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    let answer = answer.trim();
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

/// Ask a yes/no question, defaulting to no.
pub fn prompt_yes_no(question: &str) -> io::Result<bool> {
    let answer = prompt_line(question, "n")?;
    Ok(parse_yes_no(&answer))
}

/// Interpret a y/n answer; anything but "y"/"yes" counts as no.
pub fn parse_yes_no(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Hold the console open until the user presses Enter.
pub fn pause_before_exit() {
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();

    let mut sink = String::new();
    let _ = io::stdin().lock().read_line(&mut sink);
}
