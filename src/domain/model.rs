use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document sections, declared in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    HeroSection,
    AboutMe,
    WhatSetsApart,
    TechStack,
    GithubStats,
    CurrentlyWorking,
    PinnedProjects,
    CustomSections,
    ToolsDaily,
    ConnectMe,
    SponsorSection,
    CallToAction,
}

impl Section {
    pub const ALL: [Section; 12] = [
        Section::HeroSection,
        Section::AboutMe,
        Section::WhatSetsApart,
        Section::TechStack,
        Section::GithubStats,
        Section::CurrentlyWorking,
        Section::PinnedProjects,
        Section::CustomSections,
        Section::ToolsDaily,
        Section::ConnectMe,
        Section::SponsorSection,
        Section::CallToAction,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::HeroSection => "hero_section",
            Section::AboutMe => "about_me",
            Section::WhatSetsApart => "what_sets_apart",
            Section::TechStack => "tech_stack",
            Section::GithubStats => "github_stats",
            Section::CurrentlyWorking => "currently_working",
            Section::PinnedProjects => "pinned_projects",
            Section::CustomSections => "custom_sections",
            Section::ToolsDaily => "tools_daily",
            Section::ConnectMe => "connect_me",
            Section::SponsorSection => "sponsor_section",
            Section::CallToAction => "call_to_action",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Section::ALL.iter().map(|s| s.as_str()).collect();
                format!("Unknown section '{}'. Known sections: {}", s, known.join(", "))
            })
    }
}

pub const DEFAULT_THEME: &str = "tokyonight";

/// Themes accepted by the github-readme-stats family of cards.
pub const STATS_THEMES: [&str; 25] = [
    "dark",
    "light",
    "tokyonight",
    "radical",
    "dracula",
    "gruvbox",
    "cobalt",
    "synthwave",
    "highcontrast",
    "ocean",
    "noctis",
    "gotham",
    "material",
    "nord",
    "onedark",
    "catppuccin",
    "monokai",
    "solarized",
    "ayu",
    "github",
    "discord",
    "vue",
    "chartreuse",
    "merko",
    "algolia",
];

/// The activity-graph service spells `tokyonight` as `tokyo-night`.
pub fn activity_graph_theme(theme: &str) -> &str {
    match theme {
        "tokyonight" => "tokyo-night",
        other => other,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechCategory {
    Languages,
    Frameworks,
    CloudDevops,
    ToolsEditors,
}

impl TechCategory {
    pub fn color(self) -> &'static str {
        match self {
            TechCategory::Languages => "blue",
            TechCategory::Frameworks => "green",
            TechCategory::CloudDevops => "orange",
            TechCategory::ToolsEditors => "purple",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TechCategory::Languages => "🧑‍💻 **Languages**",
            TechCategory::Frameworks => "🧱 **Frameworks**",
            TechCategory::CloudDevops => "☁️ **Cloud & DevOps**",
            TechCategory::ToolsEditors => "🛠️ **Tools & Editors**",
        }
    }
}
