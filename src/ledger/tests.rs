use super::*;
use super::query::IndexError;

fn tag(name: &str, value: &str) -> Tag {
    Tag {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn entry(id: &str, address: &str, tags: Vec<Tag>) -> LedgerEntry {
    LedgerEntry {
        id: id.to_string(),
        owner: Owner {
            address: address.to_string(),
        },
        tags,
    }
}

/// Index stub returning a canned result.
struct FakeIndex {
    outcome: Result<Vec<LedgerEntry>, ()>,
}

impl LedgerIndex for FakeIndex {
    fn query(
        &self,
        _ids: &[String],
        _content_types: &[String],
    ) -> Result<Vec<LedgerEntry>, IndexError> {
        match &self.outcome {
            Ok(entries) => Ok(entries.clone()),
            Err(()) => Err(IndexError::Status(reqwest::StatusCode::BAD_GATEWAY)),
        }
    }
}

/// Lookup stub: resolves a fixed account for one known address.
struct FakeLookup {
    known: Option<(String, Account)>,
}

impl FakeLookup {
    fn empty() -> Self {
        Self { known: None }
    }
}

impl IdentityLookup for FakeLookup {
    fn account(&self, address: &str) -> Option<Account> {
        self.known
            .as_ref()
            .filter(|(known, _)| known == address)
            .map(|(_, account)| account.clone())
    }
}

fn account(handle: Option<&str>, handle_name: Option<&str>) -> Account {
    Account {
        handle: handle.map(str::to_string),
        profile: super::identity::Profile {
            handle_name: handle_name.map(str::to_string),
        },
    }
}

#[test]
fn first_tag_value_returns_first_match() {
    let tags = vec![
        tag("Content-Type", "audio/mpeg"),
        tag("Title", "First"),
        tag("Title", "Second"),
    ];
    assert_eq!(first_tag_value(&tags, "Title"), Some("First"));
    assert_eq!(first_tag_value(&tags, "Content-Type"), Some("audio/mpeg"));
}

#[test]
fn first_tag_value_absent_when_no_match() {
    let tags = vec![tag("Content-Type", "audio/wav")];
    assert_eq!(first_tag_value(&tags, "Title"), None);
    assert_eq!(first_tag_value(&[], "Title"), None);
}

#[test]
fn abbreviate_address_uses_five_five_and_three_dots() {
    let abbreviated = abbreviate_address("abcdef1234567890");
    assert_eq!(abbreviated, "abcde...67890");

    // Realistic ledger addresses are 43 characters.
    let address = "Z7t5Dw42qrS8LcdIZcA8GXXYuWJjHO36VtKKpj6IO0Q";
    let abbreviated = abbreviate_address(address);
    assert_eq!(abbreviated.len(), 13);
    assert!(abbreviated.starts_with("Z7t5D"));
    assert!(abbreviated.ends_with("6IO0Q"));
    assert_eq!(abbreviated.matches('.').count(), 3);
}

#[test]
fn abbreviate_address_leaves_short_addresses_alone() {
    assert_eq!(abbreviate_address("short"), "short");
}

#[test]
fn resolve_creator_prefers_profile_handle_name() {
    let lookup = FakeLookup {
        known: Some(("addr".into(), account(Some("raw"), Some("Display")))),
    };
    assert_eq!(resolve_creator(&lookup, "addr"), "Display");
}

#[test]
fn resolve_creator_falls_back_to_raw_handle() {
    let lookup = FakeLookup {
        known: Some(("addr".into(), account(Some("raw"), None))),
    };
    assert_eq!(resolve_creator(&lookup, "addr"), "raw");

    // Empty handle names count as absent.
    let lookup = FakeLookup {
        known: Some(("addr".into(), account(Some("raw"), Some("")))),
    };
    assert_eq!(resolve_creator(&lookup, "addr"), "raw");
}

#[test]
fn resolve_creator_abbreviates_unknown_addresses() {
    let lookup = FakeLookup::empty();
    assert_eq!(
        resolve_creator(&lookup, "abcdef1234567890"),
        "abcde...67890"
    );
}

#[test]
fn placeholder_artwork_is_deterministic_and_keyed_by_id() {
    assert_eq!(placeholder_artwork("tx123"), placeholder_artwork("tx123"));
    assert_ne!(placeholder_artwork("tx123"), placeholder_artwork("tx124"));
    assert!(placeholder_artwork("tx123").contains("tx123"));
}

#[test]
fn resolve_maps_tags_owner_and_gateway_paths() {
    let index = FakeIndex {
        outcome: Ok(vec![entry(
            "tx123",
            "abcdef1234567890",
            vec![tag("Title", "Song"), tag("Thumbnail", "imgTx")],
        )]),
    };
    let lookup = FakeLookup::empty();

    let tracks = resolve_tracklist(
        "https://g",
        &["tx123".to_string()],
        &[],
        &index,
        &lookup,
    )
    .unwrap();

    assert_eq!(tracks.len(), 1);
    let track = &tracks[0];
    assert_eq!(track.name.as_deref(), Some("Song"));
    assert_eq!(track.src, "https://g/tx123");
    assert_eq!(track.artwork_src, "https://g/imgTx");
    assert_eq!(track.creator, "abcde...67890");
}

#[test]
fn resolve_fills_placeholder_artwork_when_thumbnail_missing_or_empty() {
    let index = FakeIndex {
        outcome: Ok(vec![
            entry("tx1", "abcdef1234567890", vec![tag("Title", "A")]),
            entry(
                "tx2",
                "abcdef1234567890",
                vec![tag("Title", "B"), tag("Thumbnail", "")],
            ),
        ]),
    };
    let lookup = FakeLookup::empty();

    let tracks =
        resolve_tracklist("https://g", &["tx1".into(), "tx2".into()], &[], &index, &lookup)
            .unwrap();

    assert_eq!(tracks[0].artwork_src, placeholder_artwork("tx1"));
    assert_eq!(tracks[1].artwork_src, placeholder_artwork("tx2"));
}

#[test]
fn resolved_tracks_never_have_empty_creator_or_artwork() {
    let index = FakeIndex {
        outcome: Ok(vec![entry("tx1", "abcdef1234567890", vec![])]),
    };
    let lookup = FakeLookup::empty();

    let tracks =
        resolve_tracklist("https://g", &["tx1".into()], &[], &index, &lookup).unwrap();

    assert!(tracks[0].name.is_none());
    assert!(!tracks[0].creator.is_empty());
    assert!(!tracks[0].artwork_src.is_empty());
}

#[test]
fn resolve_preserves_index_result_order() {
    // The index is free to return entries in an order unrelated to the
    // requested ids.
    let index = FakeIndex {
        outcome: Ok(vec![
            entry("tx2", "abcdef1234567890", vec![]),
            entry("tx1", "abcdef1234567890", vec![]),
            entry("tx3", "abcdef1234567890", vec![]),
        ]),
    };
    let lookup = FakeLookup::empty();

    let tracks = resolve_tracklist(
        "https://g",
        &["tx1".into(), "tx2".into(), "tx3".into()],
        &[],
        &index,
        &lookup,
    )
    .unwrap();

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["tx2", "tx1", "tx3"]);
}

#[test]
fn empty_result_is_distinct_from_transport_failure() {
    let lookup = FakeLookup::empty();

    let empty = FakeIndex { outcome: Ok(vec![]) };
    let err = resolve_tracklist("https://g", &["tx".into()], &[], &empty, &lookup).unwrap_err();
    assert!(matches!(err, ResolveError::EmptyResult));

    let down = FakeIndex { outcome: Err(()) };
    let err = resolve_tracklist("https://g", &["tx".into()], &[], &down, &lookup).unwrap_err();
    assert!(matches!(err, ResolveError::Network(_)));
}

#[test]
fn gateway_trailing_slash_does_not_double_up() {
    let index = FakeIndex {
        outcome: Ok(vec![entry("tx1", "abcdef1234567890", vec![])]),
    };
    let lookup = FakeLookup::empty();

    let tracks =
        resolve_tracklist("https://g/", &["tx1".into()], &[], &index, &lookup).unwrap();
    assert_eq!(tracks[0].src, "https://g/tx1");
}
