use crate::domain::model::{Section, DEFAULT_THEME, STATS_THEMES};
use crate::utils::error::{ReadmeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("environment placeholder pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Stat-card theme, `tokyonight` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_sections: Vec<String>,
    pub basic_info: BasicInfo,
    pub about_me: AboutMe,
    pub tech_stack: TechStack,
    pub currently: Currently,
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typing_animation: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutMe {
    pub description: Vec<String>,
    pub quotes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStack {
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub cloud_devops: Vec<String>,
    pub tools_editors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currently {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exploring: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reach_me: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buymeacoffee: Option<String>,
}

fn is_toml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Trimmed value, or `None` when missing or whitespace-only.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl ProfileConfig {
    /// Load a profile, choosing the format from the file extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        if is_toml_path(path) {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        Ok(serde_json::from_str(&processed)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| ReadmeError::TomlError {
            message: e.to_string(),
        })
    }

    /// Replace `${VAR}` with the variable's value; unknown names stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_pretty(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ReadmeError::TomlError {
            message: e.to_string(),
        })
    }

    /// Write the profile in the format `from_file` would read it back with.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = if is_toml_path(path) {
            self.to_toml_pretty()?
        } else {
            self.to_json_pretty()?
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::info!("✅ Configuration saved to {}", path.display());
        Ok(())
    }

    pub fn github_username(&self) -> &str {
        present(&self.basic_info.github_username).unwrap_or("username")
    }

    pub fn theme(&self) -> &str {
        present(&self.theme).unwrap_or(DEFAULT_THEME)
    }

    pub fn excluded_sections(&self) -> Result<Vec<Section>> {
        self.exclude_sections
            .iter()
            .map(|name| {
                name.trim()
                    .parse::<Section>()
                    .map_err(|reason| ReadmeError::InvalidConfigValueError {
                        field: "exclude_sections".to_string(),
                        value: name.clone(),
                        reason,
                    })
            })
            .collect()
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(username) = present(&self.basic_info.github_username) {
            validation::validate_github_username("basic_info.github_username", username)?;
        }

        if let Some(email) = present(&self.social_links.email) {
            validation::validate_email("social_links.email", email)?;
        }

        let links = [
            ("social_links.portfolio", &self.social_links.portfolio),
            ("social_links.linkedin", &self.social_links.linkedin),
            ("social_links.twitter", &self.social_links.twitter),
            ("social_links.blog", &self.social_links.blog),
            ("social_links.buymeacoffee", &self.social_links.buymeacoffee),
        ];
        for (field, value) in links {
            if let Some(url) = present(value) {
                validation::validate_url(field, url)?;
            }
        }

        if let Some(theme) = present(&self.theme) {
            if !STATS_THEMES.contains(&theme) {
                return Err(ReadmeError::InvalidConfigValueError {
                    field: "theme".to_string(),
                    value: theme.to_string(),
                    reason: format!("Unknown theme. Known themes: {}", STATS_THEMES.join(", ")),
                });
            }
        }

        self.excluded_sections()?;
        Ok(())
    }
}
