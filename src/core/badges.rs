use crate::domain::model::TechCategory;

/// Percent-encode characters that would end a URL path or query value.
fn encode_reserved(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            ' ' => encoded.push_str("%20"),
            '#' => encoded.push_str("%23"),
            '&' => encoded.push_str("%26"),
            '+' => encoded.push_str("%2B"),
            '/' => encoded.push_str("%2F"),
            '?' => encoded.push_str("%3F"),
            _ => encoded.push(c),
        }
    }
    encoded
}

/// Encode text for the label segment of a shields.io static badge path.
fn badge_label(item: &str) -> String {
    encode_reserved(&item.replace('-', "--").replace('_', "__"))
}

fn badge_logo(item: &str) -> String {
    encode_reserved(&item.to_lowercase().replace(' ', ""))
}

/// Render one flat-square shields.io badge per non-blank item, space separated.
pub fn generate_badges<S: AsRef<str>>(items: &[S], category: TechCategory) -> String {
    let color = category.color();

    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .map(|item| {
            format!(
                "![{}](https://img.shields.io/badge/-{}-{}?style=flat-square&logo={}&logoColor=white)",
                item,
                badge_label(item),
                color,
                badge_logo(item)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn has_content<S: AsRef<str>>(items: &[S]) -> bool {
    items.iter().any(|item| !item.as_ref().trim().is_empty())
}
