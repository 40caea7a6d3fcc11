//! # Shell Completion Module
//!
//! - Generation of completion scripts for various shells through clap
//! - An enhanced bash script that also completes mood names and favorite ids
//!
//! ## Usage
//!
//! ```bash
//! moodify completion bash > ~/.local/share/bash-completion/completions/moodify
//! moodify completion-enhanced > ~/.local/share/bash-completion/completions/moodify
//! ```

use crate::config;
use crate::favorites::FavoritesStore;
use crate::mood::MoodCategory;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Generate enhanced bash completion script with mood and favorite completion
pub fn generate_enhanced_bash_completion() {
    let moods = mood_completions().join(" ");
    println!(r#"#!/bin/bash
# Enhanced Moodify completion script
# Install with: moodify completion-enhanced > ~/.local/share/bash-completion/completions/moodify

_moodify() {{
    local cur prev words cword
    _init_completion || return

    case "${{prev}}" in
        query|add)
            COMPREPLY=($(compgen -W "{moods}" -- "${{cur}}"))
            return 0
            ;;
        remove)
            mapfile -t COMPREPLY < <(moodify complete-favorites 2>/dev/null | grep -i "^${{cur}}")
            return 0
            ;;
        --preset)
            COMPREPLY=($(compgen -W "strict lenient" -- "${{cur}}"))
            return 0
            ;;
        --file|--rules|--catalog|--config)
            _filedir
            return 0
            ;;
        completion)
            COMPREPLY=($(compgen -W "bash zsh fish power-shell elvish" -- "${{cur}}"))
            return 0
            ;;
        favorites)
            COMPREPLY=($(compgen -W "list add remove clear" -- "${{cur}}"))
            return 0
            ;;
    esac

    local subcommands="detect moods query search shuffle favorites concerts completion completion-enhanced help"

    if [[ $cword -eq 1 ]]; then
        COMPREPLY=($(compgen -W "$subcommands --help --version --config" -- "${{cur}}"))
    else
        case "${{words[1]}}" in
            detect)
                COMPREPLY=($(compgen -W "--file --preset --min-score --rules --json --verbose -v --help" -- "${{cur}}"))
                ;;
            search)
                COMPREPLY=($(compgen -W "--voice --catalog --preset --min-score --rules --help" -- "${{cur}}"))
                ;;
            shuffle)
                COMPREPLY=($(compgen -W "--catalog --help" -- "${{cur}}"))
                ;;
            concerts)
                COMPREPLY=($(compgen -W "--artist --city --json --help" -- "${{cur}}"))
                ;;
            *)
                COMPREPLY=($(compgen -W "$subcommands" -- "${{cur}}"))
                ;;
        esac
    fi
}} &&
complete -F _moodify moodify

# ex: filetype=sh
"#);
}

/// Convert our Shell enum to clap_complete's Shell enum
pub fn shell_to_completion_shell(shell: &crate::cli::Shell) -> CompletionShell {
    match shell {
        crate::cli::Shell::Bash => CompletionShell::Bash,
        crate::cli::Shell::Zsh => CompletionShell::Zsh,
        crate::cli::Shell::Fish => CompletionShell::Fish,
        crate::cli::Shell::PowerShell => CompletionShell::PowerShell,
        crate::cli::Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Canonical mood names in declaration order
pub fn mood_completions() -> Vec<&'static str> {
    MoodCategory::ALL.iter().map(|mood| mood.name()).collect()
}

/// Ids of stored favorites, sorted. Empty if the data directory is unavailable.
pub fn get_favorite_completions() -> Vec<String> {
    let path = match config::get_favorites_path() {
        Ok(path) => path,
        Err(_) => return Vec::new(),
    };
    let mut ids: Vec<String> = FavoritesStore::open(path)
        .items()
        .iter()
        .map(|item| item.id.clone())
        .collect();
    ids.sort();
    ids
}

/// Print favorite ids, one per line, for shell completion scripts
pub fn print_favorite_completions() {
    for id in get_favorite_completions() {
        println!("{id}");
    }
}
