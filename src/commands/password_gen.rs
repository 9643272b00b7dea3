use anyhow::{Context, Result};
use rpawogen::configtool::GenConfig;
use rpawogen::passgen;
use rpawogen::setclip;

use crate::GenArgs;
use super::display_strength;

pub fn generate_random(args: GenArgs) -> Result<()> {
    let config = GenConfig::load().context("Failed to load configuration")?;

    // 命令行参数只能关闭配置中启用的字符类别
    let request = config.to_request_with(
        args.length,
        args.no_uppercase,
        args.no_lowercase,
        args.no_digits,
        args.no_special,
    )?;
    let password = passgen::generate_password(&request)?;

    if args.quiet {
        println!("{}", password);
    } else {
        println!("Generated password: {}", password);
        display_strength(&password);
    }

    if let Some(path) = args.output {
        passgen::save_password_to_file(&password, &path)?;
        if !args.quiet {
            println!("Password saved to file: {}", path.display());
        }
    }

    if args.copy {
        setclip::copy_to_clipboard(&password, config.clipboard_timeout)?;
        if !args.quiet {
            if config.clipboard_timeout > 0 {
                println!("Password copied to clipboard, clearing in {}s.", config.clipboard_timeout);
            } else {
                println!("Password copied to clipboard.");
            }
        }
    }
    Ok(())
}
