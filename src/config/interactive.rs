use crate::config::profile::{
    AboutMe, BasicInfo, Currently, ProfileConfig, SocialLinks, TechStack,
};
use crate::domain::ports::Prompter;
use crate::utils::error::Result;

const ABOUT_LINES: usize = 3;
const DEFAULT_QUOTES: [&str; 2] = [
    "First solve the problem, then write the code.",
    "Bad code runs. Clean code grows.",
];

fn comma_list(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Walk the user through every profile field.
pub fn collect_profile<P: Prompter>(prompter: &mut P) -> Result<ProfileConfig> {
    prompter.say("\n🎯 Welcome to the GitHub Profile README Generator!")?;
    prompter.say("Let's create your profile README step by step...\n")?;

    let basic_info = BasicInfo {
        name: prompter.ask_optional("Your Name: ")?,
        github_username: prompter.ask_optional("GitHub Username: ")?,
        tagline: prompter
            .ask_optional("Your Tagline (e.g., 'Code. Create. Contribute. 🚀'): ")?,
        typing_animation: prompter
            .ask_optional("Typing animation lines, separated by ';' (optional): ")?,
    };

    prompter.say("\n📝 About Me Section:")?;
    let mut description = Vec::new();
    for i in 1..=ABOUT_LINES {
        let label = format!("About line {} (press Enter to skip): ", i);
        if let Some(line) = prompter.ask_optional(&label)? {
            description.push(line);
        }
    }

    let mut quotes = Vec::new();
    for (i, default) in DEFAULT_QUOTES.iter().enumerate() {
        let quote = prompter
            .ask_optional(&format!("Motivational quote {} (optional): ", i + 1))?
            .unwrap_or_else(|| default.to_string());
        quotes.push(quote);
    }

    prompter.say("\n🛠️ Tech Stack:")?;
    let tech_stack = TechStack {
        languages: comma_list(&prompter.ask("Languages (comma-separated): ")?),
        frameworks: comma_list(&prompter.ask("Frameworks (comma-separated): ")?),
        cloud_devops: comma_list(&prompter.ask("Cloud/DevOps tools (comma-separated): ")?),
        tools_editors: comma_list(&prompter.ask("Tools/Editors (comma-separated): ")?),
    };

    prompter.say("\n📚 Currently Section:")?;
    let currently = Currently {
        working_on: prompter.ask_optional("🔭 Working on: ")?,
        learning: prompter.ask_optional("🌱 Learning: ")?,
        collaborating: prompter.ask_optional("👯 Open to collaborating on: ")?,
        exploring: prompter.ask_optional("🧠 Exploring: ")?,
        reach_me: prompter.ask_optional("📫 How to reach me: ")?,
    };

    prompter.say("\n📬 Social Links:")?;
    let social_links = SocialLinks {
        portfolio: prompter.ask_optional("Portfolio URL (optional): ")?,
        email: prompter.ask_optional("Email (optional): ")?,
        linkedin: prompter.ask_optional("LinkedIn URL (optional): ")?,
        twitter: prompter.ask_optional("Twitter/X URL (optional): ")?,
        blog: prompter.ask_optional("Blog/Dev.to URL (optional): ")?,
        buymeacoffee: prompter.ask_optional("Buy Me a Coffee URL (optional): ")?,
    };

    Ok(ProfileConfig {
        theme: None,
        exclude_sections: Vec::new(),
        basic_info,
        about_me: AboutMe {
            description,
            quotes,
        },
        tech_stack,
        currently,
        social_links,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedPrompter {
        answers: VecDeque<&'static str>,
        asked: Vec<String>,
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, label: &str) -> Result<String> {
            self.asked.push(label.to_string());
            Ok(self.answers.pop_front().unwrap_or_default().to_string())
        }

        fn say(&mut self, _message: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(comma_list(" Rust, Go ,,Python"), vec!["Rust", "Go", "Python"]);
        assert!(comma_list("").is_empty());
    }

    #[test]
    fn test_empty_answers_fall_back_to_defaults() {
        let mut prompter = ScriptedPrompter {
            answers: VecDeque::new(),
            asked: Vec::new(),
        };

        let profile = collect_profile(&mut prompter).unwrap();

        assert_eq!(prompter.asked.len(), 4 + 3 + 2 + 4 + 5 + 6);
        assert_eq!(profile.basic_info, BasicInfo::default());
        assert!(profile.about_me.description.is_empty());
        assert_eq!(profile.about_me.quotes, DEFAULT_QUOTES.to_vec());
        assert_eq!(profile.tech_stack, TechStack::default());
        assert_eq!(profile.social_links, SocialLinks::default());
    }
}
