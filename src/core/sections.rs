//! Section templates. Each renderer returns `None` when the profile has
//! nothing to show for that section.

use crate::config::profile::{present, ProfileConfig};
use crate::core::badges::{generate_badges, has_content};
use crate::domain::model::{activity_graph_theme, TechCategory};

const DEFAULT_NAME: &str = "Developer";
const DEFAULT_TAGLINE: &str = "Code. Create. Contribute. 🚀";
const DEFAULT_TYPING_LINES: &str =
    "Full+Stack+Developer;Open+Source+Enthusiast;Problem+Solver;Community+Builder";

const WHAT_SETS_APART: &str = "## 🚀 What Sets Me Apart

- 🎨 **Design-focused development** - Creating beautiful, accessible user interfaces
- 📚 **Documentation enthusiast** - Writing developer-friendly docs that actually help
- 🤖 **Automation advocate** - Building scripts and workflows that save time
- 🌱 **Community contributor** - Believing in clean code and open-source collaboration
- 🔍 **Problem solver** - Finding elegant solutions to complex challenges";

const CUSTOM_SECTIONS: &str = r#"## 🎨 Unique Sections

### 🧭 My Coding Principles
> "Write once. Refactor twice. Document always."  
> "Code for humans, optimize for machines."  
> "Test early, test often, test everything."

### 🗓️ Weekly Dev Schedule
- 🧘 **Monday**: Documentation & Planning
- 🎥 **Tuesday**: Content Creation & Learning  
- 🚀 **Wednesday**: Open Source Contributions
- 🌐 **Thursday**: Live Building & Streaming
- 🔬 **Friday**: Experimentation & Research

### 🧬 Dev Milestones
```
2021 → Started my coding journey with JavaScript
2022 → Created my first open-source project  
2023 → Built an AI-powered development tool
2024 → Reached 1000+ GitHub contributions
2025 → Goal: Speak at major tech conferences
```

<details>
<summary>✨ Fun Facts About Me</summary>

- 🎮 I built my first game at age 12
- ⌨️ I collect vintage mechanical keyboards  
- 🌍 I've contributed to projects in 5+ languages
- ☕ I can't code without coffee (seriously!)
- 🎵 I code to lo-fi hip hop exclusively
- 🏃‍♂️ I debug best while walking

</details>

### 💡 Dev Tips I Live By
- **"First solve the problem, then write the code"** - John Johnson
- **"Clean code always looks like it was written by someone who cares"** - Robert C. Martin
- **"Programs must be written for people to read"** - Harold Abelson

### 📈 Goals for 2025
- [ ] 🚀 Release 3 major open-source projects
- [ ] 🎤 Speak at 2 tech conferences  
- [ ] 🧑‍🎓 Mentor 10 new developers
- [ ] 📚 Write 50 technical blog posts
- [ ] 🌟 Reach 5000 GitHub stars across projects

### 🔐 Security & Best Practices Checklist
- [x] Always use environment variables for secrets
- [x] Validate and sanitize all user inputs
- [x] Implement proper error handling
- [x] Use HTTPS everywhere
- [x] Regular dependency updates
- [x] Code reviews for every change"#;

const TOOLS_DAILY: &str = r#"## 🧰 Tools I Use Daily

<div align="center">

### 💻 Development Environment
![VSCode](https://img.shields.io/badge/-VSCode-007ACC?style=flat-square&logo=visual-studio-code&logoColor=white)
![Vim](https://img.shields.io/badge/-Vim-019733?style=flat-square&logo=vim&logoColor=white)
![Terminal](https://img.shields.io/badge/-Terminal-000000?style=flat-square&logo=terminal&logoColor=white)

### 🌐 Browsers & Testing
![Firefox](https://img.shields.io/badge/-Firefox-FF7139?style=flat-square&logo=firefox&logoColor=white)
![Chrome](https://img.shields.io/badge/-Chrome-4285F4?style=flat-square&logo=google-chrome&logoColor=white)
![Postman](https://img.shields.io/badge/-Postman-FF6C37?style=flat-square&logo=postman&logoColor=white)

### 🖥️ Operating Systems
![Linux](https://img.shields.io/badge/-Linux-FCC624?style=flat-square&logo=linux&logoColor=black)
![macOS](https://img.shields.io/badge/-macOS-000000?style=flat-square&logo=apple&logoColor=white)
![Windows](https://img.shields.io/badge/-Windows-0078D6?style=flat-square&logo=windows&logoColor=white)

</div>"#;

/// `a; b c` becomes `a;b+c`, the line syntax of readme-typing-svg.
fn typing_lines(animation: &str) -> String {
    animation
        .split(';')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join("+"))
        .collect::<Vec<_>>()
        .join(";")
}

pub fn hero(profile: &ProfileConfig) -> Option<String> {
    let info = &profile.basic_info;
    let name = present(&info.name).unwrap_or(DEFAULT_NAME);
    let tagline = present(&info.tagline).unwrap_or(DEFAULT_TAGLINE);
    let lines = present(&info.typing_animation)
        .map(typing_lines)
        .filter(|lines| !lines.is_empty())
        .unwrap_or_else(|| DEFAULT_TYPING_LINES.to_string());
    let username = profile.github_username();

    Some(format!(
        r#"<h1 align="center">👋 Hi there, I'm {name}!</h1>

<p align="center">
  <strong>{tagline}</strong>
</p>

<p align="center">
  <img src="https://readme-typing-svg.herokuapp.com?font=Fira+Code&weight=500&size=22&pause=1000&color=F7931E&center=true&vCenter=true&width=435&lines={lines}" alt="Typing SVG" />
</p>

<p align="center">
  <img src="https://komarev.com/ghpvc/?username={username}&label=Profile%20views&color=0e75b6&style=flat" alt="Profile views" />
</p>"#
    ))
}

pub fn about(profile: &ProfileConfig) -> Option<String> {
    let about = &profile.about_me;
    if !has_content(&about.description) && !has_content(&about.quotes) {
        return None;
    }

    let mut section = String::from("## 🧠 About Me\n\n");

    for line in about.description.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        section.push_str(&format!("- {}\n", line));
    }

    section.push('\n');

    for quote in about.quotes.iter().map(|q| q.trim()).filter(|q| !q.is_empty()) {
        section.push_str(&format!("> \"{}\"\n\n", quote));
    }

    Some(section)
}

pub fn what_sets_apart(_profile: &ProfileConfig) -> Option<String> {
    Some(WHAT_SETS_APART.to_string())
}

pub fn tech_stack(profile: &ProfileConfig) -> Option<String> {
    let tech = &profile.tech_stack;
    let categories = [
        (TechCategory::Languages, &tech.languages),
        (TechCategory::Frameworks, &tech.frameworks),
        (TechCategory::CloudDevops, &tech.cloud_devops),
        (TechCategory::ToolsEditors, &tech.tools_editors),
    ];

    let mut body = String::new();
    for (category, items) in categories {
        if has_content(items) {
            body.push_str(&format!(
                "{}\n\n{}\n\n",
                category.title(),
                generate_badges(items, category)
            ));
        }
    }

    if body.is_empty() {
        return None;
    }

    Some(format!("## 🛠️ Tech Stack\n\n{}", body))
}

pub fn github_stats(profile: &ProfileConfig) -> Option<String> {
    let username = profile.github_username();
    let theme = profile.theme();
    let graph_theme = activity_graph_theme(theme);

    Some(format!(
        r#"## 📊 GitHub Stats & Visuals

<div align="center">

![GitHub Stats](https://github-readme-stats.vercel.app/api?username={username}&show_icons=true&theme={theme}&hide_border=true&count_private=true)

![GitHub Streak](https://github-readme-streak-stats.herokuapp.com/?user={username}&theme={theme}&hide_border=true)

![Top Languages](https://github-readme-stats.vercel.app/api/top-langs/?username={username}&layout=compact&theme={theme}&hide_border=true)

![GitHub Trophies](https://github-profile-trophy.vercel.app/?username={username}&theme={theme}&no-frame=true&margin-w=15)

![Activity Graph](https://github-readme-activity-graph.vercel.app/graph?username={username}&theme={graph_theme}&hide_border=true)

</div>"#
    ))
}

pub fn currently(profile: &ProfileConfig) -> Option<String> {
    let current = &profile.currently;
    let items = [
        ("🔭 I'm currently working on", &current.working_on),
        ("🌱 I'm currently learning", &current.learning),
        ("👯 I'm looking to collaborate on", &current.collaborating),
        ("🧠 I'm currently exploring", &current.exploring),
        ("📫 How to reach me", &current.reach_me),
    ];

    let lines: Vec<String> = items
        .into_iter()
        .filter_map(|(label, value)| present(value).map(|v| format!("- {}: **{}**\n", label, v)))
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(format!("## 📚 Currently...\n\n{}", lines.concat()))
}

pub fn pinned_projects(profile: &ProfileConfig) -> Option<String> {
    let username = profile.github_username();

    Some(format!(
        r#"## 📁 Featured Projects

<div align="center">

| Project | Description | Tech Stack | Links |
|---------|-------------|------------|-------|
| 🚀 **Project 1** | Amazing project description | `React` `Node.js` `MongoDB` | [Live Demo](#) • [Repo](#) |
| 🎨 **Project 2** | Creative solution for developers | `Python` `Django` `PostgreSQL` | [Live Demo](#) • [Repo](#) |
| 🤖 **Project 3** | AI-powered development tool | `TypeScript` `Next.js` `OpenAI` | [Live Demo](#) • [Repo](#) |

</div>

> 📌 **Want to see more?** Check out my [repositories](https://github.com/{username}?tab=repositories) for the complete collection!"#
    ))
}

pub fn custom_sections(_profile: &ProfileConfig) -> Option<String> {
    Some(CUSTOM_SECTIONS.to_string())
}

pub fn tools_daily(_profile: &ProfileConfig) -> Option<String> {
    Some(TOOLS_DAILY.to_string())
}

pub fn connect(profile: &ProfileConfig) -> Option<String> {
    let social = &profile.social_links;
    let mut links = Vec::new();

    if let Some(portfolio) = present(&social.portfolio) {
        links.push(format!("[![Portfolio](https://img.shields.io/badge/Portfolio-000000?style=for-the-badge&logo=about.me&logoColor=white)]({})", portfolio));
    }
    if let Some(email) = present(&social.email) {
        links.push(format!("[![Email](https://img.shields.io/badge/Email-D14836?style=for-the-badge&logo=gmail&logoColor=white)](mailto:{})", email));
    }
    if let Some(linkedin) = present(&social.linkedin) {
        links.push(format!("[![LinkedIn](https://img.shields.io/badge/LinkedIn-0077B5?style=for-the-badge&logo=linkedin&logoColor=white)]({})", linkedin));
    }
    if let Some(twitter) = present(&social.twitter) {
        links.push(format!("[![Twitter](https://img.shields.io/badge/Twitter-1DA1F2?style=for-the-badge&logo=twitter&logoColor=white)]({})", twitter));
    }
    if let Some(blog) = present(&social.blog) {
        links.push(format!("[![Blog](https://img.shields.io/badge/Blog-FF5722?style=for-the-badge&logo=blogger&logoColor=white)]({})", blog));
    }
    if let Some(coffee) = present(&social.buymeacoffee) {
        links.push(format!("[![Buy Me A Coffee](https://img.shields.io/badge/Buy%20Me%20A%20Coffee-FFDD00?style=for-the-badge&logo=buy-me-a-coffee&logoColor=black)]({})", coffee));
    }

    links.push(format!(
        "[![GitHub](https://img.shields.io/badge/GitHub-100000?style=for-the-badge&logo=github&logoColor=white)](https://github.com/{})",
        profile.github_username()
    ));

    Some(format!(
        "## 📬 Connect With Me\n\n<div align=\"center\">\n\n{}\n\n</div>",
        links.join("\n")
    ))
}

pub fn sponsor(profile: &ProfileConfig) -> Option<String> {
    let mut section = String::from(
        "## 🎁 Support My Work

<div align=\"center\">

> ❤️ **Love my work?** Your support helps me create more amazing projects!

",
    );

    if let Some(coffee) = present(&profile.social_links.buymeacoffee) {
        section.push_str(&format!("[![Buy Me A Coffee](https://img.shields.io/badge/☕%20Buy%20me%20a%20coffee-FFDD00?style=for-the-badge&logo=buy-me-a-coffee&logoColor=black)]({})\n", coffee));
    }

    section.push_str(&format!(
        "[![GitHub Sponsors](https://img.shields.io/badge/💖%20Sponsor%20on%20GitHub-EA4AAA?style=for-the-badge&logo=github-sponsors&logoColor=white)](https://github.com/sponsors/{})\n\n</div>",
        profile.github_username()
    ));

    Some(section)
}

pub fn call_to_action(profile: &ProfileConfig) -> Option<String> {
    let username = profile.github_username();

    Some(format!(
        r#"## 📌 Let's Build Something Amazing Together!

<div align="center">

### 🌟 **Star my repositories** if you find them useful!
### 👨‍💻 **Open to collaborations** on exciting projects
### 🔔 **Follow my GitHub** for the latest updates
### 💬 **Reach out** - I love connecting with fellow developers!

---

<p align="center">
  <img src="https://raw.githubusercontent.com/Platane/snk/output/github-contribution-grid-snake.svg" alt="Snake animation" />
</p>

*⭐ From [{username}](https://github.com/{username}) with ❤️*

</div>"#
    ))
}
