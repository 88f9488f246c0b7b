/// Placeholder artwork for entries published without a `Thumbnail` tag.
///
/// Pure function of the transaction id: two resolutions of the same id
/// always yield the same URI, with no network involved.
pub fn placeholder_artwork(id: &str) -> String {
    format!(
        "https://source.boringavatars.com/marble/100/{id}?square=true&colors=264653,2a9d8f,e9c46a,f4a261,e76f51"
    )
}
