use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing messages. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn is_err_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if is_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if is_err_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_err_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Dry-run plans go through here
/// so they can be piped or diffed.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Ask a yes/no question on stderr and read the answer from stdin.
/// Anything but `y`/`yes` (including EOF) counts as no.
pub fn confirm(question: &str) -> io::Result<bool> {
    let mut stderr = io::stderr();
    if is_err_tty() {
        write!(stderr, "{} {} [y/N] ", "?".yellow().bold(), question)?;
    } else {
        write!(stderr, "{} [y/N] ", question)?;
    }
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
