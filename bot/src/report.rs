/// Status report formatting: byte and rate scaling, the progress bar, and
/// the multi-line queue report sent back to the user.
use nzbgram_rpc::models::{GroupInfo, GroupStatus, QueueStatus};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Unit suffixes for `format_size`; TB is the ceiling.
const SIZE_SUFFIXES: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Sentence used when the queue has nothing to show.
const NO_FILES_SENTENCE: &str = "No files are currently downloading or queued.";

/// Render a transfer rate with a unit from B/s to GB/s.
///
/// Whole bytes below 1 KB/s, two decimals above; anything at or past
/// 1 GB/s stays in GB/s.
pub fn format_speed(bytes_per_second: u64) -> String {
    if bytes_per_second < KIB {
        format!("{} B/s", bytes_per_second)
    } else if bytes_per_second < MIB {
        format!("{:.2} KB/s", bytes_per_second as f64 / KIB as f64)
    } else if bytes_per_second < GIB {
        format!("{:.2} MB/s", bytes_per_second as f64 / MIB as f64)
    } else {
        format!("{:.2} GB/s", bytes_per_second as f64 / GIB as f64)
    }
}

/// Render a byte count with two decimals and a unit from B to TB.
pub fn format_size(bytes: u64) -> String {
    let mut size = bytes as f64;
    let mut index = 0;
    while size >= 1024.0 && index < SIZE_SUFFIXES.len() - 1 {
        size /= 1024.0;
        index += 1;
    }
    format!("{:.2} {}", size, SIZE_SUFFIXES[index])
}

/// Render a 10-cell progress bar with a two-decimal percentage.
///
/// Callers only build bars for groups with a known positive total.
pub fn progress_bar(processed: u64, total: u64) -> String {
    let percentage = processed as f64 / total as f64 * 100.0;
    let filled = ((percentage / 10.0) as usize).min(10);
    let empty = 10usize.saturating_sub(filled);
    format!(
        "[{}{}] {:.2}%",
        "▰".repeat(filled),
        "▱".repeat(empty),
        percentage
    )
}

/// Compose the `/status` reply from the server state and the queue.
pub fn build_status_report(status: &QueueStatus, groups: &[GroupInfo]) -> String {
    let state = if status.server_paused {
        "paused"
    } else {
        "running"
    };
    let mut report = format!(
        "NZBGet is {}.\nCurrent speed: {}\n\n",
        state,
        format_speed(status.download_rate),
    );

    let mut files_text = String::new();
    for group in groups {
        files_text.push_str(&format!("- {}\n", group.nzb_name));
        files_text.push_str(&format!("  Status: {}\n", group.status));

        if group.status == GroupStatus::Downloading {
            let processed = group.downloaded_size();
            let total = group.file_size();
            files_text.push_str(&format!(
                "  Size: {} processed of {}\n",
                format_size(processed),
                format_size(total),
            ));
            if total > 0 {
                files_text.push_str(&format!(
                    "  Progress: {}\n",
                    progress_bar(processed, total)
                ));
            }
        }

        files_text.push_str(&format!("  NZB ID: {}\n", group.nzb_id));
    }

    // An empty queue and a queue that produced no lines read the same.
    if files_text.is_empty() {
        report.push_str(NO_FILES_SENTENCE);
    } else {
        report.push_str("List of currently downloading and queued files:\n");
        report.push_str(&files_text);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(nzb_id: i64, name: &str, status: GroupStatus) -> GroupInfo {
        GroupInfo {
            nzb_id,
            nzb_name: name.to_string(),
            status,
            downloaded_size_hi: 0,
            downloaded_size_lo: 0,
            file_size_hi: 0,
            file_size_lo: 0,
        }
    }

    fn downloading_group() -> GroupInfo {
        GroupInfo {
            downloaded_size_lo: 52_428_800,
            file_size_lo: 104_857_600,
            ..group(42, "ubuntu-24.04.iso", GroupStatus::Downloading)
        }
    }

    #[test]
    fn test_format_speed_tiers() {
        assert_eq!(format_speed(0), "0 B/s");
        assert_eq!(format_speed(1023), "1023 B/s");
        assert_eq!(format_speed(1024), "1.00 KB/s");
        assert_eq!(format_speed(1536), "1.50 KB/s");
        assert_eq!(format_speed(1024 * 1024), "1.00 MB/s");
        assert_eq!(format_speed(5 * 1024 * 1024 + 512 * 1024), "5.50 MB/s");
        assert_eq!(format_speed(1024 * 1024 * 1024), "1.00 GB/s");
        assert_eq!(format_speed(3 * 1024 * 1024 * 1024), "3.00 GB/s");
    }

    #[test]
    fn test_format_speed_never_exceeds_gb() {
        assert_eq!(format_speed(1024 * 1024 * 1024 + 1), "1.00 GB/s");
        assert_eq!(format_speed(2048 * 1024 * 1024 * 1024), "2048.00 GB/s");
    }

    #[test]
    fn test_format_size_two_decimals() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn test_format_size_clamps_at_tb() {
        let tb = 1024u64 * 1024 * 1024 * 1024;
        assert_eq!(format_size(tb), "1.00 TB");
        assert_eq!(format_size(1024 * tb), "1024.00 TB");
    }

    #[test]
    fn test_progress_bar_midway() {
        assert_eq!(progress_bar(50, 100), "[▰▰▰▰▰▱▱▱▱▱] 50.00%");
    }

    #[test]
    fn test_progress_bar_empty_and_full() {
        assert_eq!(progress_bar(0, 100), "[▱▱▱▱▱▱▱▱▱▱] 0.00%");
        assert_eq!(progress_bar(100, 100), "[▰▰▰▰▰▰▰▰▰▰] 100.00%");
    }

    #[test]
    fn test_progress_bar_floors_partial_cells() {
        assert_eq!(progress_bar(999, 10000), "[▱▱▱▱▱▱▱▱▱▱] 9.99%");
        assert_eq!(progress_bar(1999, 10000), "[▰▱▱▱▱▱▱▱▱▱] 19.99%");
    }

    #[test]
    fn test_report_empty_queue() {
        let status = QueueStatus {
            server_paused: true,
            download_rate: 0,
        };
        let report = build_status_report(&status, &[]);
        assert_eq!(
            report,
            "NZBGet is paused.\nCurrent speed: 0 B/s\n\nNo files are currently downloading or queued."
        );
    }

    #[test]
    fn test_report_downloading_group_line_order() {
        let status = QueueStatus {
            server_paused: false,
            download_rate: 2 * 1024 * 1024,
        };
        let report = build_status_report(&status, &[downloading_group()]);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "NZBGet is running.");
        assert_eq!(lines[1], "Current speed: 2.00 MB/s");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "List of currently downloading and queued files:");
        assert_eq!(lines[4], "- ubuntu-24.04.iso");
        assert_eq!(lines[5], "  Status: DOWNLOADING");
        assert_eq!(lines[6], "  Size: 50.00 MB processed of 100.00 MB");
        assert_eq!(lines[7], "  Progress: [▰▰▰▰▰▱▱▱▱▱] 50.00%");
        assert_eq!(lines[8], "  NZB ID: 42");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_report_skips_size_and_bar_for_queued_groups() {
        let status = QueueStatus {
            server_paused: false,
            download_rate: 1024,
        };
        let report = build_status_report(&status, &[group(7, "later.nzb", GroupStatus::Queued)]);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[4], "- later.nzb");
        assert_eq!(lines[5], "  Status: QUEUED");
        assert_eq!(lines[6], "  NZB ID: 7");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_report_downloading_with_unknown_total_has_no_bar() {
        let status = QueueStatus {
            server_paused: false,
            download_rate: 1024,
        };
        let entry = GroupInfo {
            downloaded_size_lo: 4096,
            ..group(9, "sizeless.nzb", GroupStatus::Downloading)
        };
        let report = build_status_report(&status, &[entry]);

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[5], "  Status: DOWNLOADING");
        assert_eq!(lines[6], "  Size: 4.00 KB processed of 0.00 B");
        assert_eq!(lines[7], "  NZB ID: 9");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_report_lists_groups_in_server_order() {
        let status = QueueStatus {
            server_paused: false,
            download_rate: 0,
        };
        let groups = vec![
            group(2, "b.nzb", GroupStatus::Paused),
            group(1, "a.nzb", GroupStatus::Queued),
        ];
        let report = build_status_report(&status, &groups);

        let b_pos = report.find("- b.nzb").unwrap();
        let a_pos = report.find("- a.nzb").unwrap();
        assert!(b_pos < a_pos);
    }
}
