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
// Password generator

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGIT_CHARS: &str = "0123456789";
const SPECIAL_CHARS: &str = "!@#$%^&*()-_=+[]{}|;:'\",.<>?/";

// 评分规则
const LENGTH_BONUS_MIN: usize = 8;
const LENGTH_BONUS_LONG: usize = 12;
const MAX_SCORE: u32 = 100;

/// Longest password `generate` will produce.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

#[derive(Debug, Error)]
pub enum PassgenError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// 字符类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// All classes, in the order their characters are concatenated.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE_CHARS,
            CharacterClass::Lowercase => LOWERCASE_CHARS,
            CharacterClass::Digit => DIGIT_CHARS,
            CharacterClass::Special => SPECIAL_CHARS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Class of `c`, if it belongs to any of the four alphabets.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Special => "special characters",
        };
        write!(f, "{}", name)
    }
}

/// Characters eligible for one generation. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: Vec<CharacterClass>,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: &[CharacterClass]) -> Result<Self, PassgenError> {
        check_length(length)?;
        let mut classes = classes.to_vec();
        classes.sort();
        classes.dedup();
        if classes.is_empty() {
            return Err(PassgenError::InvalidRequest(
                "At least one character type should be selected".to_string(),
            ));
        }
        Ok(Self { length, classes })
    }

    /// Builds a request from the four on/off switches of the generator.
    pub fn from_flags(
        length: usize,
        uppercase: bool,
        lowercase: bool,
        digits: bool,
        special: bool,
    ) -> Result<Self, PassgenError> {
        let switches = [uppercase, lowercase, digits, special];
        let classes: Vec<CharacterClass> = CharacterClass::ALL
            .into_iter()
            .zip(switches)
            .filter_map(|(class, on)| on.then_some(class))
            .collect();
        Self::new(length, &classes)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }
}

/// 强度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => StrengthLevel::Strong,
            50..=74 => StrengthLevel::Medium,
            _ => StrengthLevel::Weak,
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Medium => write!(f, "Medium"),
            StrengthLevel::Strong => write!(f, "Strong"),
        }
    }
}

fn check_length(length: usize) -> Result<(), PassgenError> {
    if length == 0 {
        return Err(PassgenError::InvalidRequest(
            "Password length must be greater than zero".to_string(),
        ));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(PassgenError::InvalidRequest(format!(
            "Password length must be at most {}",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

/// Concatenates the characters of every enabled class in the fixed class
/// order. Each class contributes once, however often it is listed.
pub fn build_alphabet(enabled_classes: &[CharacterClass]) -> Result<Alphabet, PassgenError> {
    let chars: Vec<char> = CharacterClass::ALL
        .into_iter()
        .filter(|class| enabled_classes.contains(class))
        .flat_map(|class| class.chars().chars())
        .collect();

    if chars.is_empty() {
        return Err(PassgenError::InvalidRequest(
            "At least one character type should be selected".to_string(),
        ));
    }
    debug!("Built alphabet of {} characters", chars.len());
    Ok(Alphabet { chars })
}

/// Draws `length` characters uniformly from `alphabet` using the OS CSPRNG.
pub fn generate(length: usize, alphabet: &Alphabet) -> Result<String, PassgenError> {
    let mut rng = OsRng;
    generate_with_rng(length, alphabet, &mut rng)
}

pub fn generate_with_rng<R>(
    length: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<String, PassgenError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    check_length(length)?;
    debug!("Generating {} characters from an alphabet of {}", length, alphabet.len());

    let mut password = String::with_capacity(length);
    for _ in 0..length {
        let c = alphabet
            .chars
            .choose(rng)
            .ok_or_else(|| PassgenError::InvalidRequest("Alphabet is empty".to_string()))?;
        password.push(*c);
    }
    Ok(password)
}

pub fn generate_password(request: &GenerationRequest) -> Result<String, PassgenError> {
    let alphabet = build_alphabet(request.classes())?;
    generate(request.length(), &alphabet)
}

/// Heuristic 0-100 score: +30 from 8 characters, +20 more from 12, and one
/// point for every character that belongs to one of the four classes.
///
/// This is not an entropy estimate. `"aaaaaaaaaaaa"` scores higher than a
/// random 11-character mixed password. Length is counted in `char`s, so
/// characters outside the Basic Multilingual Plane (emoji) count once each
/// rather than as two UTF-16 units.
pub fn score_strength(password: &str) -> u8 {
    let length = password.chars().count();
    let class_chars = password
        .chars()
        .filter(|&c| CharacterClass::of(c).is_some())
        .count();

    let mut strength: u32 = 0;
    if length >= LENGTH_BONUS_MIN {
        strength += 30;
    }
    if length >= LENGTH_BONUS_LONG {
        strength += 20;
    }
    strength = strength.saturating_add(u32::try_from(class_chars).unwrap_or(u32::MAX));

    let score = strength.min(MAX_SCORE) as u8;
    debug!("Scored password of length {}: {}", length, score);
    score
}

/// Per-class character counts, in the fixed class order.
pub fn class_counts(password: &str) -> [(CharacterClass, usize); 4] {
    CharacterClass::ALL.map(|class| (class, password.chars().filter(|&c| class.contains(c)).count()))
}

/// Writes the password verbatim, creating or truncating `path`.
pub fn save_password_to_file(password: &str, path: &Path) -> Result<(), PassgenError> {
    if password.is_empty() {
        return Err(PassgenError::InvalidRequest(
            "No password generated to save".to_string(),
        ));
    }
    fs::write(path, password)?;
    info!("Password saved to {}", path.display());
    Ok(())
}
