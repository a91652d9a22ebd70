//! Environment probes for hardware, memory, and clock values shown by the shell and settings.

/// Literal shown for any value the host does not report.
pub const UNKNOWN: &str = "Unknown";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Script-heap usage in bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapUsage {
    /// Bytes currently used.
    pub used_bytes: f64,
    /// Bytes currently reserved.
    pub total_bytes: f64,
}

/// Host service reporting environment values. Every value is optional.
pub trait EnvironmentProbe {
    /// Logical processor count.
    fn hardware_concurrency(&self) -> Option<u32>;
    /// Approximate device memory in GB.
    fn device_memory_gb(&self) -> Option<f64>;
    /// Browser user-agent string.
    fn user_agent(&self) -> Option<String>;
    /// Script-heap usage.
    fn heap_usage(&self) -> Option<HeapUsage>;
    /// Human-readable local date and time.
    fn local_time(&self) -> String;
}

/// Fixed environment values for native builds and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticEnvironment {
    /// Reported processor count.
    pub hardware_concurrency: Option<u32>,
    /// Reported memory in GB.
    pub device_memory_gb: Option<f64>,
    /// Reported user agent.
    pub user_agent: Option<String>,
    /// Reported heap usage.
    pub heap_usage: Option<HeapUsage>,
    /// Reported local time.
    pub local_time: String,
}

impl EnvironmentProbe for StaticEnvironment {
    fn hardware_concurrency(&self) -> Option<u32> {
        self.hardware_concurrency
    }

    fn device_memory_gb(&self) -> Option<f64> {
        self.device_memory_gb
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn heap_usage(&self) -> Option<HeapUsage> {
        self.heap_usage
    }

    fn local_time(&self) -> String {
        self.local_time.clone()
    }
}

/// Display-ready snapshot of the performance panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceSnapshot {
    /// Processor count or [`UNKNOWN`].
    pub cpu_cores: String,
    /// Memory as `N GB` or [`UNKNOWN`].
    pub memory: String,
    /// Used heap as `N.NN MB` or [`UNKNOWN`].
    pub heap_used: String,
    /// Total heap as `N.NN MB` or [`UNKNOWN`].
    pub heap_total: String,
}

impl PerformanceSnapshot {
    /// Samples every value from `probe`.
    pub fn capture<P: EnvironmentProbe + ?Sized>(probe: &P) -> Self {
        let heap = probe.heap_usage();
        Self {
            cpu_cores: format_cores(probe.hardware_concurrency()),
            memory: format_memory_gb(probe.device_memory_gb()),
            heap_used: format_mb(heap.map(|heap| heap.used_bytes)),
            heap_total: format_mb(heap.map(|heap| heap.total_bytes)),
        }
    }
}

/// Formats a processor count.
pub fn format_cores(cores: Option<u32>) -> String {
    cores.map_or_else(|| UNKNOWN.to_string(), |cores| cores.to_string())
}

/// Formats device memory as `N GB`.
pub fn format_memory_gb(gb: Option<f64>) -> String {
    gb.map_or_else(|| UNKNOWN.to_string(), |gb| format!("{gb} GB"))
}

/// Formats a byte count as megabytes with two decimals.
pub fn format_mb(bytes: Option<f64>) -> String {
    bytes.map_or_else(
        || UNKNOWN.to_string(),
        |bytes| format!("{:.2} MB", bytes / BYTES_PER_MB),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn snapshot_formats_reported_values() {
        let probe = StaticEnvironment {
            hardware_concurrency: Some(8),
            device_memory_gb: Some(4.0),
            heap_usage: Some(HeapUsage {
                used_bytes: 12.5 * BYTES_PER_MB,
                total_bytes: 32.0 * BYTES_PER_MB,
            }),
            ..StaticEnvironment::default()
        };
        assert_eq!(
            PerformanceSnapshot::capture(&probe),
            PerformanceSnapshot {
                cpu_cores: "8".to_string(),
                memory: "4 GB".to_string(),
                heap_used: "12.50 MB".to_string(),
                heap_total: "32.00 MB".to_string(),
            }
        );
    }

    #[test]
    fn snapshot_falls_back_to_unknown() {
        let snapshot = PerformanceSnapshot::capture(&StaticEnvironment::default());
        assert_eq!(snapshot.cpu_cores, UNKNOWN);
        assert_eq!(snapshot.memory, UNKNOWN);
        assert_eq!(snapshot.heap_used, UNKNOWN);
        assert_eq!(snapshot.heap_total, UNKNOWN);
    }

    #[test]
    fn fractional_memory_keeps_its_decimals() {
        assert_eq!(format_memory_gb(Some(0.5)), "0.5 GB");
    }
}
