use url::Url;

use crate::models::tab::TabUrlMetadata;

const TAB_HOST: &str = "ultimate-guitar.com";
const DEFAULT_TYPE: &str = "Chords";

/// Slug suffixes that name the tab type rather than the song.
const TYPE_KEYWORDS: &[&str] = &[
    "chords", "tab", "tabs", "ukulele", "bass", "power", "pro", "video", "official", "drums",
];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Recover artist, song, type and id from a tab page link such as
/// `https://tabs.ultimate-guitar.com/tab/oasis/wonderwall-chords-27596`.
pub fn parse_tab_url(link: &str) -> Option<TabUrlMetadata> {
    let parsed = Url::parse(link).ok()?;
    if !parsed.host_str()?.contains(TAB_HOST) {
        return None;
    }

    let segments: Vec<&str> = parsed.path_segments()?.collect();
    let (artist_slug, song_slug) = segments
        .windows(3)
        .find(|w| w[0] == "tab" && !w[1].is_empty() && !w[2].is_empty())
        .map(|w| (w[1], w[2]))?;

    let artist_name = artist_slug
        .split(['-', '_'])
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    let mut parts: Vec<&str> = song_slug.split('-').collect();
    let mut id = None;
    if let Some(last) = parts.last() {
        if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
            id = last.parse::<i64>().ok();
            parts.pop();
        }
    }

    let mut category = DEFAULT_TYPE.to_string();
    if parts.len() > 1 {
        let keyword = parts[parts.len() - 1].to_lowercase();
        if TYPE_KEYWORDS.contains(&keyword.as_str()) {
            category = match keyword.as_str() {
                "tabs" => "Tab".to_string(),
                other => capitalize(other),
            };
            parts.pop();
        }
    }

    let song_title = parts
        .iter()
        .map(|part| capitalize(part))
        .collect::<Vec<_>>()
        .join(" ");

    Some(TabUrlMetadata {
        id,
        song_title,
        artist_name,
        category,
    })
}
