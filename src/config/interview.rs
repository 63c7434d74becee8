//! Interview configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound accepted for `max_turns`.
pub const MAX_TURNS_LIMIT: usize = 50;

/// Upper bound accepted for `listen_timeout_secs`.
pub const MAX_LISTEN_TIMEOUT_SECS: u64 = 300;

/// Interview behaviour settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InterviewConfig {
    /// Number of answers collected before the interview ends
    #[serde(default = "default_max_turns")]
    pub max_turns: usize,

    /// How long `listen` waits for an utterance, in seconds
    #[serde(default = "default_listen_timeout")]
    pub listen_timeout_secs: u64,

    /// Whether questions are spoken aloud when the platform supports it
    #[serde(default = "default_voice_enabled")]
    pub voice_enabled: bool,

    /// YAML role catalog replacing the builtin roles
    #[serde(default)]
    pub roles_file: Option<PathBuf>,
}

impl InterviewConfig {
    pub fn listen_timeout(&self) -> Duration {
        Duration::from_secs(self.listen_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_turns == 0 || self.max_turns > MAX_TURNS_LIMIT {
            return Err(ValidationError::InvalidMaxTurns(self.max_turns));
        }
        if self.listen_timeout_secs == 0 || self.listen_timeout_secs > MAX_LISTEN_TIMEOUT_SECS {
            return Err(ValidationError::InvalidListenTimeout(self.listen_timeout_secs));
        }
        if matches!(&self.roles_file, Some(path) if path.as_os_str().is_empty()) {
            return Err(ValidationError::EmptyRolesFile);
        }
        Ok(())
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
            listen_timeout_secs: default_listen_timeout(),
            voice_enabled: default_voice_enabled(),
            roles_file: None,
        }
    }
}

fn default_max_turns() -> usize {
    8
}

fn default_listen_timeout() -> u64 {
    30
}

fn default_voice_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InterviewConfig::default();
        assert_eq!(config.max_turns, 8);
        assert_eq!(config.listen_timeout(), Duration::from_secs(30));
        assert!(config.voice_enabled);
        assert!(config.roles_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn max_turns_bounds() {
        for bad in [0, MAX_TURNS_LIMIT + 1] {
            let config = InterviewConfig {
                max_turns: bad,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidMaxTurns(bad)));
        }
        let config = InterviewConfig {
            max_turns: 1,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn listen_timeout_bounds() {
        let config = InterviewConfig {
            listen_timeout_secs: 301,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidListenTimeout(301)));
    }

    #[test]
    fn empty_roles_file_is_rejected() {
        let config = InterviewConfig {
            roles_file: Some(PathBuf::new()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyRolesFile));
    }
}
