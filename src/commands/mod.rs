pub mod config;
pub mod password_gen;
pub mod testpass;

use rpawogen::passgen::{self, StrengthLevel};

const BAR_WIDTH: usize = 20;

/// 显示密码强度
pub fn display_strength(password: &str) {
    let score = passgen::score_strength(password);
    let level = StrengthLevel::from_score(score);
    let filled = usize::from(score) * BAR_WIDTH / 100;
    println!(
        "Strength: {}/100 ({}) [{}{}]",
        score,
        level,
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    );
}
