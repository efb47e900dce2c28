//! `fsi completions` – emit shell completions on stdout.

use clap_complete::Shell;

pub fn run_completions(shell: Shell, cmd: &mut clap::Command) {
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, bin_name, &mut std::io::stdout());
}
