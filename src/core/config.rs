use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::core::alphabet::Alphabet;
use crate::encoders::algorithms::ascii85::Ascii85Codec;
use crate::encoders::algorithms::chunked::BitGroupCodec;
use crate::encoders::algorithms::errors::{ConfigError, FormatNotFoundError, find_closest_name};
use crate::encoders::algorithms::math::BigIntegerCodec;
use crate::encoders::codec::Codec;

/// Algorithm family used to turn bytes into symbols.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    /// Fixed-width bit groups. Requires a power-of-two alphabet; supports padding.
    BitGroup,
    /// 4-byte/5-symbol tuples over an 85-symbol alphabet.
    Ascii85,
    /// The whole input as one big integer. Works with any alphabet size.
    BigInteger,
}

/// Configuration for a single codec loaded from TOML.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// The value symbols, in value order
    pub chars: String,
    /// The algorithm family (auto-detected if not specified)
    #[serde(default)]
    pub kind: Option<CodecKind>,
    /// Optional padding character (e.g., "=" for base64)
    #[serde(default)]
    pub padding: Option<char>,
    /// Also accept the opposite case of letter symbols when decoding
    #[serde(default)]
    pub fold_case: bool,
    /// Extra decode-only characters, each mapped to the symbol it stands for
    #[serde(default)]
    pub aliases: BTreeMap<char, char>,
    /// Shortcut symbol for an all-zero tuple (ascii85 only)
    #[serde(default)]
    pub zero_run: Option<char>,
    /// Ignore whitespace when decoding (ascii85 only)
    #[serde(default)]
    pub skip_whitespace: bool,
}

impl CodecConfig {
    /// Returns the effective codec kind, auto-detecting if not explicitly set.
    ///
    /// Auto-detection rules:
    /// - BitGroup: if the alphabet length is a power of 2
    /// - BigInteger: otherwise
    ///
    /// Ascii85 must be requested explicitly.
    pub fn effective_kind(&self) -> CodecKind {
        if let Some(kind) = self.kind {
            return kind;
        }

        let len = self.chars.chars().count();
        if len > 0 && len.is_power_of_two() {
            CodecKind::BitGroup
        } else {
            CodecKind::BigInteger
        }
    }

    /// Builds and validates the alphabet described by this entry.
    pub fn alphabet(&self) -> Result<Alphabet, ConfigError> {
        let symbols: Vec<char> = self.chars.chars().collect();

        let mut builder = Alphabet::builder()
            .padding_opt(self.padding)
            .fold_case(self.fold_case);
        for (&alias, &target) in &self.aliases {
            let value = symbols
                .iter()
                .position(|&c| c == target)
                .ok_or(ConfigError::UnknownAliasTarget { alias, target })?;
            builder = builder.alias(alias, value);
        }

        builder.symbol_vec(symbols).build()
    }

    /// Builds the codec described by this entry.
    pub fn build(&self) -> Result<Codec, ConfigError> {
        let alphabet = self.alphabet()?;
        let codec = match self.effective_kind() {
            CodecKind::BitGroup => BitGroupCodec::new(alphabet)?.into(),
            CodecKind::Ascii85 => {
                Ascii85Codec::new(alphabet, self.zero_run, self.skip_whitespace)?.into()
            }
            CodecKind::BigInteger => BigIntegerCodec::new(alphabet).into(),
        };
        Ok(codec)
    }
}

/// Collection of codec configurations loaded from TOML files.
#[derive(Debug, Default, Deserialize)]
pub struct CodecRegistry {
    /// Map of codec names to their configurations
    pub codecs: HashMap<String, CodecConfig>,
}

impl CodecRegistry {
    /// Parses codec configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in codec configurations.
    ///
    /// Holds one entry per named format, under the same name.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../codecs.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in codecs (from library)
    /// 2. `~/.config/base-codec/codecs.toml` (user overrides)
    /// 3. `./codecs.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching codec names.
    /// Unreadable override files are reported on stderr and skipped.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        Self::load_with_overrides_using(|warning| eprintln!("Warning: {}", warning))
    }

    /// Like [`load_with_overrides`](Self::load_with_overrides), but hands
    /// warnings to `on_warning` instead of printing them.
    pub fn load_with_overrides_using<F>(mut on_warning: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: FnMut(String),
    {
        let mut config = Self::load_default()?;

        for path in override_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => config.merge(overrides),
                Err(e) => on_warning(format!("Failed to load config from {:?}: {}", path, e)),
            }
        }

        Ok(config)
    }

    /// Merges another configuration into this one.
    ///
    /// Codecs from `other` override codecs with the same name in `self`.
    pub fn merge(&mut self, other: CodecRegistry) {
        for (name, codec) in other.codecs {
            self.codecs.insert(name, codec);
        }
    }

    /// Retrieves a codec configuration by name.
    pub fn get(&self, name: &str) -> Option<&CodecConfig> {
        self.codecs.get(name)
    }

    /// Builds the named codec.
    ///
    /// An unknown name yields a [`FormatNotFoundError`] with the closest
    /// configured name as a suggestion.
    pub fn build(&self, name: &str) -> Result<Codec, Box<dyn std::error::Error>> {
        let config = self.get(name).ok_or_else(|| {
            let suggestion = find_closest_name(name, &self.names());
            FormatNotFoundError::new(name, suggestion)
        })?;
        Ok(config.build()?)
    }

    /// Configured codec names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn override_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("base-codec").join("codecs.toml"));
    }
    paths.push(PathBuf::from("codecs.toml"));
    paths
}
