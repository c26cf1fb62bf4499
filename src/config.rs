//! Configuration management for the shelter records tool
//!
//! Centralizes session options and provides validation.

use crate::{cli::Args, error::ShelterError};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Print the welcome line when the session starts
    pub banner: bool,
    /// Prompt configuration
    pub prompts: PromptConfig,
}

/// Texts shown when asking the operator for input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Whether prompt texts are printed at all
    pub show: bool,
    /// Main action prompt
    pub action: String,
    /// Name prompt when adding
    pub name: String,
    /// Fee prompt when adding
    pub fee: String,
    /// Name prompt when looking up a fee
    pub lookup: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            banner: true,
            prompts: PromptConfig::default(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            show: true,
            action: "Choose an action: 'add', 'fee', or 'exit': ".to_string(),
            name: "Enter the animal's name: ".to_string(),
            fee: "Enter the adoption fee: ".to_string(),
            lookup: "Enter the animal's name to find its adoption fee: ".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ShelterError> {
        let mut config = Self {
            debug: args.debug,
            banner: !args.no_banner,
            ..Self::default()
        };
        config.prompts.show = !args.quiet_prompts;

        let overrides = [
            (&args.action_prompt, &mut config.prompts.action),
            (&args.name_prompt, &mut config.prompts.name),
            (&args.fee_prompt, &mut config.prompts.fee),
            (&args.lookup_prompt, &mut config.prompts.lookup),
        ];
        for (text, prompt) in overrides {
            if let Some(text) = text {
                prompt.clone_from(text);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ShelterError> {
        if !self.prompts.show {
            return Ok(());
        }

        let prompts = [
            ("action", &self.prompts.action),
            ("name", &self.prompts.name),
            ("fee", &self.prompts.fee),
            ("lookup", &self.prompts.lookup),
        ];

        for (label, text) in prompts {
            if text.trim().is_empty() {
                return Err(ShelterError::validation(format!(
                    "{label} prompt must not be blank"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_from_args() {
        let args = Args::try_parse_from(["shelter"]).unwrap();
        let config = Config::from_args(&args).unwrap();

        assert!(!config.debug);
        assert!(config.banner);
        assert!(config.prompts.show);
        assert!(config.prompts.action.contains("'add', 'fee', or 'exit'"));
    }

    #[test]
    fn test_flags_override_defaults() {
        let args =
            Args::try_parse_from(["shelter", "--debug", "--no-banner", "--quiet-prompts"])
                .unwrap();
        let config = Config::from_args(&args).unwrap();

        assert!(config.debug);
        assert!(!config.banner);
        assert!(!config.prompts.show);
    }

    #[test]
    fn test_prompt_texts_from_args() {
        let args = Args::try_parse_from(["shelter", "--lookup-prompt", "Who? "]).unwrap();
        let config = Config::from_args(&args).unwrap();

        assert_eq!(config.prompts.lookup, "Who? ");
        assert_eq!(config.prompts.name, PromptConfig::default().name);
    }

    #[test]
    fn test_blank_prompt_from_args_is_rejected() {
        let args = Args::try_parse_from(["shelter", "--name-prompt", " "]).unwrap();
        let err = Config::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("name prompt"));

        let args =
            Args::try_parse_from(["shelter", "--quiet-prompts", "--name-prompt", ""]).unwrap();
        assert!(Config::from_args(&args).is_ok());
    }

    #[test]
    fn test_blank_prompt_is_rejected() {
        let mut config = Config::default();
        config.prompts.fee = "  ".to_string();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fee prompt"));
    }

    #[test]
    fn test_blank_prompt_allowed_when_silenced() {
        let mut config = Config::default();
        config.prompts.show = false;
        config.prompts.action = String::new();

        assert!(config.validate().is_ok());
    }
}
