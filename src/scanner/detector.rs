//! Keystroke scan detection.
//!
//! Handheld scanners act as keyboards: they type the barcode a few
//! milliseconds per character and finish with `Enter`. A person typing is
//! much slower, so a long gap between keys throws away what was collected.

use std::time::{Duration, Instant};

use crate::config::{Config, SCAN_TERMINATOR_KEY};

/// Turns keystrokes into completed barcodes
#[derive(Debug, Clone)]
pub struct ScanDetector {
    timeout: Duration,
    min_length: usize,
    buffer: String,
    last_key_at: Option<Instant>,
}

impl ScanDetector {
    pub fn new(timeout: Duration, min_length: usize) -> Self {
        Self {
            timeout,
            min_length,
            buffer: String::new(),
            last_key_at: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_millis(config.scan_timeout_ms),
            config.scan_min_length,
        )
    }

    /// Feed one key event. `key` is a key name: a single character for
    /// printable keys, `Enter`, `Shift`, `ArrowUp` and so on otherwise.
    ///
    /// Returns the barcode when this key completes one.
    pub fn push(&mut self, key: &str, at: Instant) -> Option<String> {
        if let Some(last) = self.last_key_at {
            if at.saturating_duration_since(last) > self.timeout && !self.buffer.is_empty() {
                self.buffer.clear();
            }
        }
        self.last_key_at = Some(at);

        if key == SCAN_TERMINATOR_KEY {
            let collected = std::mem::take(&mut self.buffer);
            return (collected.chars().count() >= self.min_length).then_some(collected);
        }

        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            self.buffer.push(c);
        }

        None
    }

    /// Characters collected so far
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.last_key_at = None;
    }
}

impl Default for ScanDetector {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: Duration = Duration::from_millis(10);

    fn detector() -> ScanDetector {
        ScanDetector::new(Duration::from_millis(100), 3)
    }

    /// Type `keys` with `gap` between each, then press Enter
    fn burst(detector: &mut ScanDetector, start: Instant, keys: &str, gap: Duration) -> (Instant, Option<String>) {
        let mut at = start;
        for c in keys.chars() {
            assert_eq!(detector.push(&c.to_string(), at), None);
            at += gap;
        }
        let result = detector.push("Enter", at);
        (at, result)
    }

    #[test]
    fn test_fast_burst_emits_barcode() {
        let mut d = detector();
        let (_, scanned) = burst(&mut d, Instant::now(), "8851234567890", FAST);

        assert_eq!(scanned.as_deref(), Some("8851234567890"));
        assert_eq!(d.pending(), "");
    }

    #[test]
    fn test_short_buffer_is_dropped() {
        let mut d = detector();
        let (at, scanned) = burst(&mut d, Instant::now(), "AB", FAST);

        assert_eq!(scanned, None);
        assert_eq!(d.pending(), "");

        // the dropped keys never leak into the next scan
        let (_, next) = burst(&mut d, at + FAST, "CDE", FAST);
        assert_eq!(next.as_deref(), Some("CDE"));
    }

    #[test]
    fn test_gap_discards_earlier_keys() {
        let mut d = detector();
        let start = Instant::now();

        assert_eq!(d.push("A", start), None);
        let later = start + Duration::from_millis(250);
        let (_, scanned) = burst(&mut d, later, "BCD", FAST);

        assert_eq!(scanned.as_deref(), Some("BCD"));
    }

    #[test]
    fn test_gap_exactly_at_timeout_keeps_buffer() {
        let mut d = detector();
        let start = Instant::now();

        d.push("A", start);
        d.push("B", start + Duration::from_millis(100));
        assert_eq!(d.push("Enter", start + Duration::from_millis(110)), None);

        d.push("X", start + Duration::from_millis(200));
        d.push("Y", start + Duration::from_millis(300));
        d.push("Z", start + Duration::from_millis(400));
        assert_eq!(
            d.push("Enter", start + Duration::from_millis(500)).as_deref(),
            Some("XYZ")
        );
    }

    #[test]
    fn test_named_keys_are_ignored() {
        let mut d = detector();
        let mut at = Instant::now();

        for key in ["Shift", "A", "Shift", "b", "ArrowUp", "1", "Control"] {
            d.push(key, at);
            at += FAST;
        }

        assert_eq!(d.push("Enter", at).as_deref(), Some("Ab1"));
    }

    #[test]
    fn test_slow_typing_never_emits() {
        let mut d = detector();
        let (_, scanned) = burst(&mut d, Instant::now(), "12345", Duration::from_millis(300));

        assert_eq!(scanned, None);
    }

    #[test]
    fn test_configured_thresholds() {
        let mut d = ScanDetector::new(Duration::from_millis(30), 5);
        let (at, short) = burst(&mut d, Instant::now(), "1234", FAST);
        assert_eq!(short, None);

        let (_, long) = burst(&mut d, at + FAST, "12345", FAST);
        assert_eq!(long.as_deref(), Some("12345"));
    }
}
