use spotctl::utils::*;
use std::collections::BTreeSet;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_search_kind_display() {
    assert_eq!(SearchKind::Track.to_string(), "track");
    assert_eq!(SearchKind::Album.to_string(), "album");
    assert_eq!(SearchKind::Artist.to_string(), "artist");
    assert_eq!(SearchKind::Playlist.to_string(), "playlist");
    assert_eq!(SearchKind::Show.to_string(), "show");
    assert_eq!(SearchKind::Episode.to_string(), "episode");
}

#[test]
fn test_search_kinds_default() {
    let default_kinds = SearchKinds::default();
    let collected: Vec<SearchKind> = default_kinds.iter().collect();
    assert_eq!(collected, vec![SearchKind::Track]);
}

#[test]
fn test_search_kinds_display() {
    // Test empty set (shouldn't happen in practice, but test the edge case)
    let empty_kinds = SearchKinds(BTreeSet::new());
    assert_eq!(empty_kinds.to_string(), "");

    // Test single kind
    let mut set = BTreeSet::new();
    set.insert(SearchKind::Album);
    let single_kind = SearchKinds(set);
    assert_eq!(single_kind.to_string(), "album");

    // Test multiple kinds (should be sorted)
    let mut set = BTreeSet::new();
    set.insert(SearchKind::Show);
    set.insert(SearchKind::Track);
    set.insert(SearchKind::Album);
    let multi_kinds = SearchKinds(set);
    assert_eq!(multi_kinds.to_string(), "track,album,show");
}

#[test]
fn test_parse_search_kinds_valid_inputs() {
    // Test single kind
    let result = parse_search_kinds("track").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track]);

    // Test multiple kinds
    let result = parse_search_kinds("track,album").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track, SearchKind::Album]);

    // Test "all" keyword
    let result = parse_search_kinds("all").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds.len(), 6);
    assert!(kinds.contains(&SearchKind::Track));
    assert!(kinds.contains(&SearchKind::Album));
    assert!(kinds.contains(&SearchKind::Artist));
    assert!(kinds.contains(&SearchKind::Playlist));
    assert!(kinds.contains(&SearchKind::Show));
    assert!(kinds.contains(&SearchKind::Episode));

    // Test with spaces
    let result = parse_search_kinds("track, episode").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track, SearchKind::Episode]);

    // Test case insensitivity
    let result = parse_search_kinds("TRACK,Album").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track, SearchKind::Album]);
}

#[test]
fn test_parse_search_kinds_invalid_inputs() {
    // Test empty string
    let result = parse_search_kinds("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test whitespace only
    let result = parse_search_kinds("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test invalid kind
    let result = parse_search_kinds("invalid_kind");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'invalid_kind'"));

    // Test malformed input (empty segment)
    let result = parse_search_kinds("track,,album");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("empty segment"));

    // Test mixed valid and invalid
    let result = parse_search_kinds("track,invalid,album");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'invalid'"));
}

#[test]
fn test_parse_search_kinds_deduplication() {
    // Test that duplicates are removed
    let result = parse_search_kinds("track,track,album").unwrap();
    let kinds: Vec<SearchKind> = result.iter().collect();
    assert_eq!(kinds, vec![SearchKind::Track, SearchKind::Album]);
}

#[test]
fn test_search_kinds_iter() {
    let mut set = BTreeSet::new();
    set.insert(SearchKind::Album);
    set.insert(SearchKind::Track);
    let kinds = SearchKinds(set);

    let collected: Vec<SearchKind> = kinds.iter().collect();
    // Should be sorted due to BTreeSet
    assert_eq!(collected, vec![SearchKind::Track, SearchKind::Album]);
}

#[test]
fn test_search_kind_all_constant() {
    // Ensure ALL constant contains all variants
    assert_eq!(SearchKind::ALL.len(), 6);
    assert!(SearchKind::ALL.contains(&SearchKind::Track));
    assert!(SearchKind::ALL.contains(&SearchKind::Album));
    assert!(SearchKind::ALL.contains(&SearchKind::Artist));
    assert!(SearchKind::ALL.contains(&SearchKind::Playlist));
    assert!(SearchKind::ALL.contains(&SearchKind::Show));
    assert!(SearchKind::ALL.contains(&SearchKind::Episode));
}

#[test]
fn test_search_kinds_contains() {
    let kinds = parse_search_kinds("track,show").unwrap();
    assert!(kinds.contains(SearchKind::Track));
    assert!(kinds.contains(SearchKind::Show));
    assert!(!kinds.contains(SearchKind::Album));
}

#[test]
fn test_format_duration_ms() {
    assert_eq!(format_duration_ms(0), "0:00");
    assert_eq!(format_duration_ms(999), "0:00");
    assert_eq!(format_duration_ms(1_000), "0:01");
    assert_eq!(format_duration_ms(59_999), "0:59");
    assert_eq!(format_duration_ms(60_000), "1:00");
    assert_eq!(format_duration_ms(207_959), "3:27");
    assert_eq!(format_duration_ms(3_600_000), "60:00");
}
