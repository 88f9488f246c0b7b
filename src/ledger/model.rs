/// One resolved, player-ready track.
///
/// `creator` and `artwork_src` are never empty: resolution falls back to an
/// abbreviated owner address and deterministic placeholder artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Transaction id of the audio entry.
    pub id: String,
    /// `Title` tag value, when the entry carries one.
    pub name: Option<String>,
    /// Display name of the entry owner.
    pub creator: String,
    /// Fully qualified gateway URI of the audio content.
    pub src: String,
    /// Fully qualified artwork URI (published thumbnail or placeholder).
    pub artwork_src: String,
}

impl Track {
    /// Name to render when the entry has no `Title` tag.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Untitled")
    }
}

/// Ordered list of resolved tracks, in index query result order.
pub type Tracklist = Vec<Track>;
