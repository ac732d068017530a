//! Embed markers, player URLs, and the stored metadata blob.

use serde::Serialize;

use medialift_host::PluginConfig;
use medialift_media::{EntryId, MediaEntry};

use crate::error::ConvertError;

/// Fixed player dimensions used for every replacement module.
pub const PLAYER_WIDTH: u32 = 608;
pub const PLAYER_HEIGHT: u32 = 402;

/// Token the host substitutes with a serving URL in stored rich text.
pub const PLUGINFILE_TOKEN: &str = "@@PLUGINFILE@@/";

/// Literal start/end tokens around an embedded file's encoded name.
/// Replacement works on exact substrings, never on patterns.
pub const MARKER_START: &str = "<a href=\"@@PLUGINFILE@@/";
pub const MARKER_END: &str = "\">";

/// Label inside a rewritten player embed marker.
pub const EMBED_LABEL: &str = "mediaplayer-embed";

/// Build the player source URL for an entry.
pub fn player_url(config: &PluginConfig, entry: &EntryId) -> Result<String, ConvertError> {
    let skin = config.player_skin.ok_or(ConvertError::MissingPlayerSkin)?;
    Ok(format!(
        "{}/browseandembed/index/media/entryid/{}/showDescription/false/showTitle/false/\
         showTags/true/showDuration/false/showOwner/false/showUploadDate/false/\
         playerSize/{}x{}/playerSkin/{}/",
        config.service_url.trim_end_matches('/'),
        entry,
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        skin
    ))
}

/// Metadata persisted alongside a replacement module. Mostly a snapshot of
/// the remote entry at creation time; the empty display toggles mirror what
/// the player frontend expects to find.
#[derive(Debug, Serialize)]
struct EntryMetadata<'a> {
    url: &'a str,
    width: u32,
    height: u32,
    entry_id: &'a EntryId,
    thumbnail_url: Option<&'a str>,
    duration: Option<u64>,
    description: &'a str,
    created_at: Option<chrono::DateTime<chrono::Utc>>,
    owner: Option<&'a str>,
    tags: Option<&'a str>,
    show_title: &'a str,
    show_description: &'a str,
    show_duration: &'a str,
    show_owner: &'a str,
    size: &'a str,
    player: u64,
}

/// JSON-encode the metadata blob for a freshly created entry.
pub fn metadata_blob(config: &PluginConfig, entry: &MediaEntry) -> Result<String, ConvertError> {
    let url = player_url(config, &entry.id)?;
    let skin = config.player_skin.ok_or(ConvertError::MissingPlayerSkin)?;
    let metadata = EntryMetadata {
        url: &url,
        width: PLAYER_WIDTH,
        height: PLAYER_HEIGHT,
        entry_id: &entry.id,
        thumbnail_url: entry.thumbnail_url.as_deref(),
        duration: entry.duration,
        description: &entry.description,
        created_at: entry.created_at,
        owner: entry.owner.as_deref(),
        tags: entry.tags.as_deref(),
        show_title: "",
        show_description: "",
        show_duration: "",
        show_owner: "",
        size: "",
        player: skin,
    };
    Ok(serde_json::to_string(&metadata)?)
}

/// Build the replacement marker that embeds the remote player.
pub fn embed_marker(url: &str, encoded_name: &str, width: u32, height: u32) -> String {
    format!("<a href=\"{url}\">{EMBED_LABEL}||{encoded_name}||{width}||{height}</a>")
}

/// Scan text for embedded-file markers and return the encoded filenames, in
/// order of appearance (duplicates included).
pub fn embedded_filenames(text: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(MARKER_START) {
        let after = &rest[start + MARKER_START.len()..];
        let Some(end) = after.find(MARKER_END) else {
            break;
        };
        names.push(&after[..end]);
        rest = &after[end + MARKER_END.len()..];
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> PluginConfig {
        PluginConfig::new("server>site>channels", 26365392, "https://media.example.edu")
    }

    #[test]
    fn player_url_carries_skin_and_size() {
        let url = player_url(&config(), &EntryId::new("1_abc")).unwrap();
        assert!(url.starts_with("https://media.example.edu/browseandembed/index/media/entryid/1_abc/"));
        assert!(url.contains("playerSize/608x402"));
        assert!(url.contains("playerSkin/26365392/"));
    }

    #[test]
    fn player_url_requires_a_skin() {
        let mut config = config();
        config.player_skin = None;
        assert!(matches!(
            player_url(&config, &EntryId::new("1_abc")),
            Err(ConvertError::MissingPlayerSkin)
        ));
    }

    #[test]
    fn metadata_blob_snapshots_the_entry() {
        let entry = MediaEntry {
            id: EntryId::new("1_abc"),
            name: "Lecture".to_string(),
            description: "week one".to_string(),
            thumbnail_url: Some("https://media.example.edu/thumb/1_abc".to_string()),
            duration: Some(93),
            owner: Some("user3".to_string()),
            tags: None,
            created_at: Some(chrono::Utc::now()),
        };
        let blob = metadata_blob(&config(), &entry).unwrap();
        assert!(blob.contains("\"entry_id\":\"1_abc\""));
        assert!(blob.contains("\"duration\":93"));
        assert!(blob.contains("\"created_at\":\"2"));
        assert!(blob.contains("\"player\":26365392"));
    }

    #[test]
    fn finds_each_marker_in_order() {
        let text = format!(
            "intro {MARKER_START}a%20b.mp4{MARKER_END}a b.mp4</a> middle \
             {MARKER_START}c.mov{MARKER_END}c.mov</a> end"
        );
        assert_eq!(embedded_filenames(&text), vec!["a%20b.mp4", "c.mov"]);
    }

    #[test]
    fn unterminated_marker_is_ignored() {
        let text = format!("{MARKER_START}never-closed");
        assert!(embedded_filenames(&text).is_empty());
    }

    proptest! {
        #[test]
        fn text_without_markers_yields_nothing(text in "\\PC*") {
            prop_assume!(!text.contains(PLUGINFILE_TOKEN));
            prop_assert!(embedded_filenames(&text).is_empty());
        }
    }
}
