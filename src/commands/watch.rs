use crate::commands::scan::{print_sequences, scan_directory, ListingOptions};
use crate::core::{
    config::WatchConfig,
    dir_monitor::events_of_kind,
    error::Result,
    events::{DirEvent, EventKind},
    print_info,
    seq_mon::{AddOutcome, DeleteOutcome},
    templates::{render_template, TemplateContext, TEMPLATES},
    tracker::{SequenceTracker, TrackerUpdate},
};
use std::path::{Path, PathBuf};
use std::thread;

#[derive(Debug, Clone, Default)]
pub struct WatchArgs {
    pub directory: PathBuf,
    pub recursive: bool,
    pub interval_ms: Option<u64>,
    /// Polls to run after the initial scan; `None` watches until interrupted
    pub max_polls: Option<u64>,
}

pub fn execute_watch(args: WatchArgs) -> Result<()> {
    let mut config = WatchConfig::load()?;
    if args.recursive {
        config.recursive = true;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.poll_interval_ms = interval_ms;
    }
    config.validate()?;

    let (mut monitor, mut tracker) = scan_directory(&args.directory, &config)?;
    print_sequences(&tracker, &ListingOptions::default());
    print_info(&format!(
        "Watching {} every {}ms",
        args.directory.display(),
        config.poll_interval_ms
    ));

    let mut polls = 0u64;
    while args.max_polls.map_or(true, |max| polls < max) {
        thread::sleep(config.poll_interval());
        polls += 1;

        let events = monitor.poll()?;
        if events.is_empty() {
            continue;
        }
        log::debug!(
            "Poll {polls}: {} added, {} changed, {} deleted",
            events_of_kind(&events, EventKind::Added).count(),
            events_of_kind(&events, EventKind::Changed).count(),
            events_of_kind(&events, EventKind::Deleted).count()
        );

        let mut sequences_changed = false;
        for event in &events {
            let update = tracker.apply(event)?;
            if update == TrackerUpdate::Ignored {
                continue;
            }
            print_event(event, &update, &tracker);
            sequences_changed |= update.changes_sequences();
        }

        if sequences_changed {
            print_sequences(&tracker, &ListingOptions::default());
        }
    }

    Ok(())
}

fn print_event(event: &DirEvent, update: &TrackerUpdate, tracker: &SequenceTracker) {
    let path = event.path().display().to_string();
    let outcome = describe_update(update, tracker);
    println!(
        "{}",
        render_template(
            TEMPLATES.event_line,
            &TemplateContext {
                event: Some(event.kind()),
                path: Some(&path),
                outcome: Some(&outcome),
                ..Default::default()
            }
        )
    );
}

/// Suffix for an event line saying what happened to the sequences
fn describe_update(update: &TrackerUpdate, tracker: &SequenceTracker) -> String {
    match update {
        TrackerUpdate::Added { directory, outcome }
        | TrackerUpdate::Changed { directory, outcome } => match outcome {
            AddOutcome::Joined(index) => pattern_at(tracker, directory, *index)
                .map(|pattern| format!(" → {pattern}"))
                .unwrap_or_default(),
            AddOutcome::Created(index) => pattern_at(tracker, directory, *index)
                .map(|pattern| format!(" → {pattern} (new sequence)"))
                .unwrap_or_default(),
            AddOutcome::Unsequenced => " (unsequenced)".to_string(),
        },
        TrackerUpdate::Deleted { directory, outcome } => match outcome {
            DeleteOutcome::Removed { pruned: true, .. } => " (sequence removed)".to_string(),
            DeleteOutcome::Removed { index, .. } => pattern_at(tracker, directory, *index)
                .map(|pattern| format!(" ← {pattern}"))
                .unwrap_or_default(),
            DeleteOutcome::NotTracked => String::new(),
        },
        TrackerUpdate::DirectoryRemoved { sequences, .. } => {
            format!(" ({sequences} sequences removed)")
        }
        TrackerUpdate::Ignored => String::new(),
    }
}

fn pattern_at(tracker: &SequenceTracker, directory: &Path, index: usize) -> Option<String> {
    tracker
        .monitor(directory)
        .and_then(|monitor| monitor.sequences().get(index))
        .map(|seq| seq.pattern())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tracker::ImageFilter;
    use std::fs;
    use tempfile::TempDir;

    fn tracker_for(dir: &Path) -> Result<SequenceTracker> {
        let (_, tracker) = scan_directory(dir, &WatchConfig::default())?;
        Ok(tracker)
    }

    #[test]
    fn test_describe_joined_and_created() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("frame_001.tga"), b"x")?;
        fs::write(dir.path().join("frame_002.tga"), b"x")?;
        let tracker = tracker_for(dir.path())?;
        let directory = dir.path().to_path_buf();

        let joined = TrackerUpdate::Added {
            directory: directory.clone(),
            outcome: AddOutcome::Joined(0),
        };
        assert_eq!(describe_update(&joined, &tracker), " → frame_###.tga");

        let created = TrackerUpdate::Added {
            directory,
            outcome: AddOutcome::Created(0),
        };
        assert_eq!(
            describe_update(&created, &tracker),
            " → frame_###.tga (new sequence)"
        );
        Ok(())
    }

    #[test]
    fn test_describe_deletions() {
        let tracker = SequenceTracker::new(ImageFilter::all());
        let pruned = TrackerUpdate::Deleted {
            directory: PathBuf::from("/renders"),
            outcome: DeleteOutcome::Removed {
                index: 0,
                pruned: true,
            },
        };
        assert_eq!(describe_update(&pruned, &tracker), " (sequence removed)");

        let untracked = TrackerUpdate::Deleted {
            directory: PathBuf::from("/renders"),
            outcome: DeleteOutcome::NotTracked,
        };
        assert_eq!(describe_update(&untracked, &tracker), "");

        let removed_dir = TrackerUpdate::DirectoryRemoved {
            directory: PathBuf::from("/renders/old"),
            sequences: 2,
        };
        assert_eq!(
            describe_update(&removed_dir, &tracker),
            " (2 sequences removed)"
        );
    }

    #[test]
    fn test_describe_unsequenced() {
        let tracker = SequenceTracker::default();
        let update = TrackerUpdate::Changed {
            directory: PathBuf::from("/renders"),
            outcome: AddOutcome::Unsequenced,
        };
        assert_eq!(describe_update(&update, &tracker), " (unsequenced)");
    }

    #[test]
    fn test_watch_with_zero_polls_only_scans() -> Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("shot_0001.exr"), b"x")?;

        execute_watch(WatchArgs {
            directory: dir.path().to_path_buf(),
            interval_ms: Some(10),
            max_polls: Some(0),
            ..Default::default()
        })
    }

    #[test]
    fn test_watch_rejects_short_interval() -> Result<()> {
        let dir = TempDir::new()?;
        let result = execute_watch(WatchArgs {
            directory: dir.path().to_path_buf(),
            interval_ms: Some(1),
            max_polls: Some(1),
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(crate::core::error::SeqMonError::InvalidPollInterval { .. })
        ));
        Ok(())
    }
}
