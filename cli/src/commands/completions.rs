//! `spanbench completions <shell>`: print a completion script on stdout.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::{Cli, CompletionsArgs};

pub fn run(args: CompletionsArgs) {
    write_completions(args.shell, &mut std::io::stdout());
}

/// Writes the completion script for `shell`, covering the `run`/`list`
/// subcommands and the `--target`/`--case` value lists.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_knows_subcommands_and_targets() {
        let out = script(Shell::Bash);
        assert!(out.contains("spanbench"));
        assert!(out.contains("list"));
        assert!(out.contains("transparent"));
    }

    #[test]
    fn zsh_script_is_a_compdef() {
        assert!(script(Shell::Zsh).starts_with("#compdef spanbench"));
    }
}
