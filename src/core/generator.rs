use crate::config::profile::ProfileConfig;
use crate::core::sections;
use crate::domain::model::Section;
use crate::utils::error::Result;

type Renderer = fn(&ProfileConfig) -> Option<String>;

fn renderer(section: Section) -> Renderer {
    match section {
        Section::HeroSection => sections::hero,
        Section::AboutMe => sections::about,
        Section::WhatSetsApart => sections::what_sets_apart,
        Section::TechStack => sections::tech_stack,
        Section::GithubStats => sections::github_stats,
        Section::CurrentlyWorking => sections::currently,
        Section::PinnedProjects => sections::pinned_projects,
        Section::CustomSections => sections::custom_sections,
        Section::ToolsDaily => sections::tools_daily,
        Section::ConnectMe => sections::connect,
        Section::SponsorSection => sections::sponsor,
        Section::CallToAction => sections::call_to_action,
    }
}

/// Assembles the README document from a profile.
pub struct ReadmeGenerator<'a> {
    profile: &'a ProfileConfig,
    excluded: Vec<Section>,
}

impl<'a> ReadmeGenerator<'a> {
    pub fn new(profile: &'a ProfileConfig) -> Result<Self> {
        let excluded = profile.excluded_sections()?;
        Ok(Self { profile, excluded })
    }

    /// Sections in document order, paired with their rendered text.
    pub fn sections(&self) -> Vec<(Section, String)> {
        Section::ALL
            .into_iter()
            .filter(|section| !self.excluded.contains(section))
            .filter_map(|section| {
                let block = renderer(section)(self.profile);
                if block.is_none() {
                    tracing::debug!("Section '{}' has no content, skipping", section);
                }
                block.map(|text| (section, text))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        self.sections()
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_sections() {
        let profile = ProfileConfig::default();
        let generator = ReadmeGenerator::new(&profile).unwrap();
        let names: Vec<Section> = generator.sections().into_iter().map(|(s, _)| s).collect();

        assert_eq!(
            names,
            vec![
                Section::HeroSection,
                Section::WhatSetsApart,
                Section::GithubStats,
                Section::PinnedProjects,
                Section::CustomSections,
                Section::ToolsDaily,
                Section::ConnectMe,
                Section::SponsorSection,
                Section::CallToAction,
            ]
        );
    }

    #[test]
    fn test_excluded_sections_are_dropped() {
        let profile = ProfileConfig {
            exclude_sections: vec!["custom_sections".into(), "tools_daily".into()],
            ..Default::default()
        };

        let output = ReadmeGenerator::new(&profile).unwrap().render();

        assert!(!output.contains("## 🎨 Unique Sections"));
        assert!(!output.contains("## 🧰 Tools I Use Daily"));
        assert!(output.contains("## 📁 Featured Projects"));
    }

    #[test]
    fn test_unknown_excluded_section_is_an_error() {
        let profile = ProfileConfig {
            exclude_sections: vec!["footer".into()],
            ..Default::default()
        };
        assert!(ReadmeGenerator::new(&profile).is_err());
    }

    #[test]
    fn test_sections_joined_by_blank_line() {
        let profile = ProfileConfig::default();
        let output = ReadmeGenerator::new(&profile).unwrap().render();

        assert!(output.contains("</p>\n\n## 🚀 What Sets Me Apart\n\n"));
        assert!(output.ends_with("with ❤️*\n\n</div>"));
    }
}
