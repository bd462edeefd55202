use crate::core::{
    config::WatchConfig,
    dir_monitor::DirMonitor,
    error::Result,
    image_seq::ImageSeq,
    print_info,
    templates::{render_template, TemplateContext, TEMPLATES},
    tracker::SequenceTracker,
    FrameRange, FrameRanges,
};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub const MAX_LISTED_MISSING: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub directory: PathBuf,
    pub recursive: bool,
    pub all: bool,
    pub json: bool,
    pub long: bool,
    pub missing: bool,
}

/// What [`print_sequences`] shows besides the sequence lines
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingOptions {
    pub show_unsequenced: bool,
    pub show_details: bool,
    pub show_missing_files: bool,
}

pub fn execute_scan(args: ScanArgs) -> Result<()> {
    let mut config = WatchConfig::load()?;
    if args.recursive {
        config.recursive = true;
    }

    let (_, tracker) = scan_directory(&args.directory, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tracker.summaries())?);
        return Ok(());
    }

    print_sequences(
        &tracker,
        &ListingOptions {
            show_unsequenced: args.all,
            show_details: args.long,
            show_missing_files: args.missing,
        },
    );
    Ok(())
}

/// Take the first snapshot of `directory` and feed it to a fresh tracker.
///
/// The monitor is returned so a caller can keep polling from this snapshot.
pub fn scan_directory(
    directory: &Path,
    config: &WatchConfig,
) -> Result<(DirMonitor, SequenceTracker)> {
    let mut monitor = DirMonitor::new(directory, config.monitor_options())?;
    let mut tracker = SequenceTracker::new(config.image_filter());

    let events = monitor.poll()?;
    tracker.apply_all(&events)?;

    log::info!(
        "Scanned {} entries in {}: {} sequences",
        monitor.snapshot_len(),
        directory.display(),
        tracker.sequence_count()
    );
    Ok((monitor, tracker))
}

pub fn print_sequences(tracker: &SequenceTracker, options: &ListingOptions) {
    let unsequenced: Vec<&Path> = tracker.unsequenced().collect();

    if tracker.sequence_count() == 0 && (!options.show_unsequenced || unsequenced.is_empty()) {
        print_info("No image sequences found");
        return;
    }

    for (directory, monitor) in tracker.directories() {
        let directory = directory.display().to_string();
        println!();
        println!(
            "{}",
            render_template(
                TEMPLATES.section_directory,
                &TemplateContext {
                    directory: Some(&directory),
                    ..Default::default()
                }
            )
        );

        for (i, seq) in monitor.sequences().iter().enumerate() {
            print_sequence(i + 1, seq, options);
        }
    }

    if options.show_unsequenced && !unsequenced.is_empty() {
        println!();
        println!(
            "{}",
            render_template(TEMPLATES.section_unsequenced, &TemplateContext::default())
        );
        for path in &unsequenced {
            let path = path.display().to_string();
            println!(
                "{}",
                render_template(
                    TEMPLATES.unsequenced_line,
                    &TemplateContext {
                        path: Some(&path),
                        ..Default::default()
                    }
                )
            );
        }
    }

    println!();
    println!(
        "{}",
        render_template(
            TEMPLATES.summary_line,
            &TemplateContext {
                count: Some(tracker.sequence_count()),
                unsequenced: Some(unsequenced.len()),
                ..Default::default()
            }
        )
    );
    println!();
}

fn print_sequence(n: usize, seq: &ImageSeq, options: &ListingOptions) {
    let pattern = seq.pattern();
    let frames = FrameRanges::format(&seq.frame_numbers());
    println!(
        "{}",
        render_template(
            TEMPLATES.sequence_line,
            &TemplateContext {
                n: Some(n),
                pattern: Some(&pattern),
                frames: Some(&frames),
                count: Some(seq.len()),
                ..Default::default()
            }
        )
    );

    let gaps = seq.missing_ranges();
    if !gaps.is_empty() {
        let missing = FrameRanges::join(&gaps);
        println!(
            "{}",
            render_template(
                TEMPLATES.missing_line,
                &TemplateContext {
                    missing: Some(&missing),
                    ..Default::default()
                }
            )
        );

        if options.show_missing_files {
            for line in missing_file_lines(seq, &gaps) {
                println!(
                    "{}",
                    render_template(
                        TEMPLATES.missing_file_line,
                        &TemplateContext {
                            path: Some(&line),
                            ..Default::default()
                        }
                    )
                );
            }
        }
    }

    if options.show_details {
        let size = format_size(seq.total_size());
        let modified = seq
            .latest_modified()
            .map(|time| {
                DateTime::<Local>::from(time)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}",
            render_template(
                TEMPLATES.detail_line,
                &TemplateContext {
                    size: Some(&size),
                    modified: Some(&modified),
                    ..Default::default()
                }
            )
        );
    }
}

/// Expected names of missing frames, at most [`MAX_LISTED_MISSING`] of them
/// followed by a count of the rest
pub fn missing_file_lines(seq: &ImageSeq, gaps: &[FrameRange]) -> Vec<String> {
    let mut lines: Vec<String> = gaps
        .iter()
        .flat_map(FrameRange::frames)
        .take(MAX_LISTED_MISSING)
        .map(|frame| seq.frame_name(frame))
        .collect();

    let remaining = FrameRanges::total(gaps).saturating_sub(lines.len() as u64);
    if remaining > 0 {
        lines.push(format!("... and {remaining} more"));
    }
    lines
}

/// Human-readable byte count, e.g. `1.5 MB`
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_scan_directory_groups_frames() -> Result<()> {
        let dir = TempDir::new()?;
        for name in ["frame_001.tga", "frame_002.tga", "frame_003.tga", "logo.png"] {
            fs::write(dir.path().join(name), b"data")?;
        }

        let (monitor, tracker) = scan_directory(dir.path(), &WatchConfig::default())?;
        assert_eq!(monitor.snapshot_len(), 4);
        assert_eq!(tracker.sequence_count(), 1);
        assert_eq!(tracker.unsequenced().count(), 1);

        let summaries = tracker.summaries();
        assert_eq!(summaries[0].frames, "1-3");
        Ok(())
    }

    #[test]
    fn test_missing_file_lines_are_capped() -> Result<()> {
        let dir = TempDir::new()?;
        for name in ["cap_1.png", "cap_1700000000000.png"] {
            fs::write(dir.path().join(name), b"data")?;
        }
        let (_, tracker) = scan_directory(dir.path(), &WatchConfig::default())?;
        let seq = &tracker.directories().next().map(|(_, m)| m.sequences()[0].clone()).unwrap();

        let lines = missing_file_lines(seq, &seq.missing_ranges());
        assert_eq!(lines.len(), MAX_LISTED_MISSING + 1);
        assert_eq!(lines[0], "cap_2.png");
        assert_eq!(lines[MAX_LISTED_MISSING - 1], "cap_101.png");
        assert_eq!(
            lines[MAX_LISTED_MISSING],
            format!("... and {} more", 1_699_999_999_998u64 - 100)
        );

        let summaries = tracker.summaries();
        assert_eq!(summaries[0].missing, "2-1699999999999");
        assert_eq!(summaries[0].missing_count, 1_699_999_999_998);
        Ok(())
    }

    #[test]
    fn test_missing_file_lines_short_gap_is_complete() -> Result<()> {
        let dir = TempDir::new()?;
        for name in ["shot_0001.exr", "shot_0004.exr"] {
            fs::write(dir.path().join(name), b"data")?;
        }
        let (_, tracker) = scan_directory(dir.path(), &WatchConfig::default())?;
        let seq = &tracker.directories().next().map(|(_, m)| m.sequences()[0].clone()).unwrap();

        assert_eq!(
            missing_file_lines(seq, &seq.missing_ranges()),
            vec!["shot_0002.exr", "shot_0003.exr"]
        );
        Ok(())
    }

    #[test]
    fn test_scan_directory_missing_root() {
        let result = scan_directory(Path::new("/no/such/dir"), &WatchConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_print_sequences_does_not_panic() -> Result<()> {
        let dir = TempDir::new()?;
        for name in ["a_01.png", "a_03.png", "notes.txt"] {
            fs::write(dir.path().join(name), b"data")?;
        }
        let (_, tracker) = scan_directory(dir.path(), &WatchConfig::default())?;

        print_sequences(
            &tracker,
            &ListingOptions {
                show_unsequenced: true,
                show_details: true,
                show_missing_files: true,
            },
        );
        print_sequences(&SequenceTracker::default(), &ListingOptions::default());
        Ok(())
    }
}
