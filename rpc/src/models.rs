/// Typed views of NZBGet RPC results.
///
/// NZBGet reports 64-bit sizes as two 32-bit halves; `GroupInfo` rejoins
/// them. Fields the bot does not use are ignored during deserialization.
use serde::Deserialize;

/// Result of the `status` method, reduced to what the bot reports.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueueStatus {
    /// Whether the whole server is paused.
    pub server_paused: bool,
    /// Current download rate in bytes per second.
    pub download_rate: u64,
}

/// One entry from the `listgroups` method: a job in the download queue.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GroupInfo {
    #[serde(rename = "NZBID")]
    pub nzb_id: i64,
    #[serde(rename = "NZBName")]
    pub nzb_name: String,
    pub status: GroupStatus,
    #[serde(default)]
    pub downloaded_size_hi: u32,
    #[serde(default)]
    pub downloaded_size_lo: u32,
    #[serde(default)]
    pub file_size_hi: u32,
    #[serde(default)]
    pub file_size_lo: u32,
}

impl GroupInfo {
    /// Bytes downloaded so far.
    pub fn downloaded_size(&self) -> u64 {
        join_size(self.downloaded_size_hi, self.downloaded_size_lo)
    }

    /// Total size of the job.
    pub fn file_size(&self) -> u64 {
        join_size(self.file_size_hi, self.file_size_lo)
    }
}

/// Combine a split 64-bit size: `hi * 2^32 + lo`.
fn join_size(hi: u32, lo: u32) -> u64 {
    (u64::from(hi) << 32) | u64::from(lo)
}

/// Group status vocabulary reported by `listgroups`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupStatus {
    Queued,
    Paused,
    Downloading,
    Fetching,
    PpQueued,
    LoadingPars,
    VerifyingSources,
    Repairing,
    VerifyingRepaired,
    Renaming,
    Unpacking,
    Moving,
    ExecutingScript,
    PpFinished,
    /// Any status this client does not know yet.
    #[serde(other)]
    Unknown,
}

impl GroupStatus {
    /// The status name as NZBGet reports it.
    pub fn as_str(self) -> &'static str {
        match self {
            GroupStatus::Queued => "QUEUED",
            GroupStatus::Paused => "PAUSED",
            GroupStatus::Downloading => "DOWNLOADING",
            GroupStatus::Fetching => "FETCHING",
            GroupStatus::PpQueued => "PP_QUEUED",
            GroupStatus::LoadingPars => "LOADING_PARS",
            GroupStatus::VerifyingSources => "VERIFYING_SOURCES",
            GroupStatus::Repairing => "REPAIRING",
            GroupStatus::VerifyingRepaired => "VERIFYING_REPAIRED",
            GroupStatus::Renaming => "RENAMING",
            GroupStatus::Unpacking => "UNPACKING",
            GroupStatus::Moving => "MOVING",
            GroupStatus::ExecutingScript => "EXECUTING_SCRIPT",
            GroupStatus::PpFinished => "PP_FINISHED",
            GroupStatus::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
