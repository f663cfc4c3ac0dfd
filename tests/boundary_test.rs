use autorelease::boundary::ReleaseWarning;
use autorelease::ui;

// ============================================================================
// ReleaseWarning Display Tests
// ============================================================================

#[test]
fn test_changelog_missing_display() {
    let warning = ReleaseWarning::ChangelogMissing {
        path: "docs/CHANGELOG.md".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Changelog not found"),
        "Message should contain 'Changelog not found', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("docs/CHANGELOG.md"),
        "Message should contain the path, got: {}",
        display_msg
    );
}

#[test]
fn test_section_not_found_display() {
    let warning = ReleaseWarning::SectionNotFound {
        version: "1.4.0".to_string(),
        path: "CHANGELOG.md".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("1.4.0"),
        "Message should contain version '1.4.0', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("default release notes"),
        "Message should mention the fallback, got: {}",
        display_msg
    );
}

#[test]
fn test_tag_listing_failed_display() {
    let warning = ReleaseWarning::TagListingFailed {
        reason: "not a git repository".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("not a git repository"),
        "Message should contain the reason, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("assuming none"),
        "Message should say tags are treated as absent, got: {}",
        display_msg
    );
}

#[test]
fn test_tag_already_exists_display() {
    let warning = ReleaseWarning::TagAlreadyExists {
        tag: "v2.0.0".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("'v2.0.0' already exists"),
        "Message should name the tag, got: {}",
        display_msg
    );
}

#[test]
fn test_warnings_render_without_panicking() {
    let warnings = vec![
        ReleaseWarning::ChangelogMissing {
            path: "CHANGELOG.md".to_string(),
        },
        ReleaseWarning::SectionNotFound {
            version: "".to_string(),
            path: "".to_string(),
        },
        ReleaseWarning::TagListingFailed {
            reason: "message with\nnewline".to_string(),
        },
        ReleaseWarning::TagAlreadyExists {
            tag: "v1.0.0+build.1".to_string(),
        },
    ];

    for warning in &warnings {
        ui::display_boundary_warning(warning);
        assert!(!warning.to_string().is_empty());
    }
}
