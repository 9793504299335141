//! Organizer run integration tests.
//!
//! Drive the full scan -> classify -> link -> prune pipeline against real
//! temporary directories, with the guessing capability mocked out.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use linkarr_core::{
    testing::MockGuesser, Config, Guess, Organizer, OrganizerConfig, RunReport,
};

/// Test helper holding the source/destination trees and the mock guesser.
struct TestHarness {
    source: TempDir,
    dest: TempDir,
    guesser: Arc<MockGuesser>,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            source: TempDir::new().expect("Failed to create source dir"),
            dest: TempDir::new().expect("Failed to create dest dir"),
            guesser: Arc::new(MockGuesser::new()),
        }
    }

    fn create_organizer(&self) -> Organizer {
        let config = Config {
            source: self.source.path().to_path_buf(),
            dest_base: self.dest.path().to_path_buf(),
            modified_within_hours: 24,
            organizer: OrganizerConfig::default(),
        };
        Organizer::new(&config, Arc::clone(&self.guesser) as Arc<dyn linkarr_core::Guesser>)
    }

    fn write_source_file(&self, name: &str) -> PathBuf {
        let path = self.source.path().join(name);
        std::fs::write(&path, name).expect("Failed to write source file");
        path
    }

    fn dest_path(&self, relative: &str) -> PathBuf {
        self.dest.path().join(relative)
    }

    async fn run(&self) -> RunReport {
        self.create_organizer()
            .run_once()
            .await
            .expect("Run should complete")
    }
}

fn assert_links_to(link: &Path, source: &Path) {
    let stored = std::fs::read_link(link).expect("Expected a symlink");
    assert_eq!(
        stored.file_name(),
        source.file_name(),
        "link {} points at {}, expected {}",
        link.display(),
        stored.display(),
        source.display()
    );
    assert!(stored.is_absolute());
}

#[tokio::test]
async fn test_movie_and_episode_linked_into_library_layout() {
    let harness = TestHarness::new();
    let movie = harness.write_source_file("inception.bluray.mkv");
    let episode = harness.write_source_file("show.ep.mp4");

    harness
        .guesser
        .set_response("inception.bluray.mkv", Guess::movie("Inception", Some(2010)))
        .await;
    harness
        .guesser
        .set_response("show.ep.mp4", Guess::episode("Show", 1, 1))
        .await;

    let report = harness.run().await;

    assert_eq!(report.scanned, 2);
    assert_eq!(report.linked, 2);
    assert_eq!(report.errors, 0);

    assert_links_to(
        &harness.dest_path("Movies/Inception (2010)/Inception (2010).mkv"),
        &movie,
    );
    assert_links_to(
        &harness.dest_path("TV Shows/Show/Season 01/Show - S01E01.mp4"),
        &episode,
    );
}

#[tokio::test]
async fn test_movie_without_year_omits_parenthetical() {
    let harness = TestHarness::new();
    let movie = harness.write_source_file("oldfilm.avi");
    harness
        .guesser
        .set_response("oldfilm.avi", Guess::movie("Old Film", None))
        .await;

    harness.run().await;

    assert_links_to(&harness.dest_path("Movies/Old Film/Old Film.avi"), &movie);
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let harness = TestHarness::new();
    harness.write_source_file("inception.mkv");
    harness
        .guesser
        .set_response("inception.mkv", Guess::movie("Inception", Some(2010)))
        .await;

    let first = harness.run().await;
    assert_eq!(first.linked, 1);

    let second = harness.run().await;
    assert_eq!(second.linked, 0);
    assert_eq!(second.already_linked, 1);
    assert_eq!(second.conflicts, 0);
    assert_eq!(second.errors, 0);
}

#[tokio::test]
async fn test_conflicting_target_preserves_existing_link() {
    let harness = TestHarness::new();
    let file_a = harness.write_source_file("x.release-a.mkv");
    harness
        .guesser
        .set_response("x.release-a.mkv", Guess::movie("X", Some(2020)))
        .await;

    harness.run().await;
    let target = harness.dest_path("Movies/X (2020)/X (2020).mkv");
    assert_links_to(&target, &file_a);

    // A second candidate resolves to the same target.
    harness.write_source_file("x.release-b.mkv");
    harness
        .guesser
        .set_response("x.release-b.mkv", Guess::movie("X", Some(2020)))
        .await;

    let report = harness.run().await;
    assert_eq!(report.conflicts, 1);

    // The existing link must still point at A.
    assert_links_to(&target, &file_a);
}

#[tokio::test]
async fn test_unknown_classification_is_skipped_without_error() {
    let harness = TestHarness::new();
    harness.write_source_file("mystery.mkv");
    // No canned response: the mock answers unknown.

    let report = harness.run().await;

    assert_eq!(report.scanned, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.linked, 0);
    assert_eq!(report.errors, 0);
    assert_eq!(
        harness.guesser.recorded_queries().await,
        vec!["mystery.mkv".to_string()]
    );
}

#[tokio::test]
async fn test_pruning_removes_dangling_links_only() {
    let harness = TestHarness::new();
    let kept_source = harness.write_source_file("kept.mkv");

    // One valid link, one dangling link planted in the destination tree.
    let season_dir = harness.dest_path("TV Shows/Show/Season 01");
    std::fs::create_dir_all(&season_dir).unwrap();
    let valid_link = season_dir.join("Show - S01E01.mkv");
    let dangling_link = season_dir.join("Show - S01E02.mkv");
    std::os::unix::fs::symlink(&kept_source, &valid_link).unwrap();
    std::os::unix::fs::symlink(
        harness.source.path().join("deleted.mkv"),
        &dangling_link,
    )
    .unwrap();

    // kept.mkv itself is classified as that episode, so the valid link is
    // also the one the run would create (idempotent).
    harness
        .guesser
        .set_response("kept.mkv", Guess::episode("Show", 1, 1))
        .await;

    let report = harness.run().await;

    assert_eq!(report.pruned, 1);
    // symlink_metadata, because Path::exists() follows the link.
    assert!(std::fs::symlink_metadata(&dangling_link).is_err());
    assert!(std::fs::symlink_metadata(&valid_link).is_ok());
}

#[tokio::test]
async fn test_one_bad_candidate_does_not_abort_the_run() {
    let harness = TestHarness::new();
    harness.write_source_file("good.mkv");
    harness.write_source_file("no-numbers.mkv");

    harness
        .guesser
        .set_response("good.mkv", Guess::movie("Good", Some(2021)))
        .await;
    // Episode guess with missing numbers: resolution fails per-file.
    harness
        .guesser
        .set_response(
            "no-numbers.mkv",
            Guess {
                kind: linkarr_core::MediaKind::Episode,
                title: Some("Show".to_string()),
                year: None,
                season: None,
                episode: None,
            },
        )
        .await;

    let report = harness.run().await;

    assert_eq!(report.linked, 1);
    assert_eq!(report.skipped, 1);
    assert!(harness
        .dest_path("Movies/Good (2021)/Good (2021).mkv")
        .exists());
}
