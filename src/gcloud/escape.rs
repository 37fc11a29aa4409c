use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tokens made of these characters survive `sh -c` without quoting.
    static ref PLAIN_TOKEN: Regex = Regex::new(r"^[a-zA-Z0-9._@%+=:,/-]+$").unwrap();
}

/// Quote a single argument for safe transport through a shell command line.
/// Plain tokens pass through unmodified; everything else is single-quoted
/// with embedded quotes rewritten as `'\''`.
pub fn escape_arg(arg: &str) -> String {
    if PLAIN_TOKEN.is_match(arg) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}

/// Join an argument list into one shell-safe command string.
pub fn join_command(args: &[String]) -> String {
    args.iter()
        .map(|arg| escape_arg(arg))
        .collect::<Vec<_>>()
        .join(" ")
}
