//! Tests for the completions CLI command

use clap_complete::Shell;
use termsift::cli::commands::completions::write_completions;

#[test]
fn test_bash_completions_mention_commands() {
    let mut buf = Vec::new();
    write_completions(Shell::Bash, None, &mut buf);
    let script = String::from_utf8(buf).expect("utf8");
    assert!(script.contains("termsift"));
    assert!(script.contains("normalize"));
    assert!(script.contains("show-config"));
}

#[test]
fn test_completions_bin_name_override() {
    let mut buf = Vec::new();
    write_completions(Shell::Zsh, Some("tsift"), &mut buf);
    let script = String::from_utf8(buf).expect("utf8");
    assert!(script.contains("tsift"));
}
