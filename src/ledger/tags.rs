use serde::Deserialize;

/// One name/value annotation attached to a ledger entry.
///
/// Tag names are not unique within an entry, and no ordering beyond the
/// entry's own is guaranteed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

/// Return the value of the first tag whose name equals `name`.
pub fn first_tag_value<'a>(tags: &'a [Tag], name: &str) -> Option<&'a str> {
    tags.iter()
        .find(|tag| tag.name == name)
        .map(|tag| tag.value.as_str())
}
