//  ____  ____     __        __       ____
// |  _ \|  _ \ __ \ \      / /__    / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/   \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Random password generator with a strength score.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rpawogen::setclip;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen", version)]
#[command(about = "Generate random passwords and score their strength", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Score the strength of a password
    Score {
        /// Password to score (prompted for when omitted)
        password: Option<String>,

        /// Show how many characters fall into each class
        #[arg(short, long, default_value_t = false)]
        details: bool,
    },

    /// Show or initialise the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password [default: from config, 12]
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Save the password to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Print only the password
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 剪贴板守护进程
    if setclip::is_daemon() {
        return setclip::run_daemon();
    }

    let cli = Cli::parse();
    match cli {
        Cli::Gen(args) => commands::password_gen::generate_random(args),
        Cli::Score { password, details } => commands::testpass::test_password(password, details),
        Cli::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(),
            ConfigAction::Init { force } => commands::config::init_config(force),
        },
    }
}
