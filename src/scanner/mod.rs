//! Scan station - keystroke detection, catalog lookup and activity recording.

pub mod detector;
pub mod lookup;
pub mod recorder;
pub mod session;

pub use detector::ScanDetector;
pub use lookup::{clean_barcode, find_by_barcode};
pub use recorder::{
    describe_device, station_user_agent, ActivityRecorder, ActivitySink, LogServiceSink,
};
pub use session::{HistoryEntry, ScanResult, ScanSession};

#[cfg(any(test, feature = "test-utils"))]
pub use recorder::MockActivitySink;
