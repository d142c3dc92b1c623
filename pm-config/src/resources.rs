/// Advice printed by setup based on installed memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RamAdvice {
    /// Under 16 GB
    Limited,
    /// 32 GB or more
    Plenty,
}

impl RamAdvice {
    pub fn for_gb(gb: f64) -> Option<Self> {
        if gb < 16.0 {
            Some(RamAdvice::Limited)
        } else if gb >= 32.0 {
            Some(RamAdvice::Plenty)
        } else {
            None
        }
    }
}

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0 * 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(RamAdvice::for_gb(8.0), Some(RamAdvice::Limited));
        assert_eq!(RamAdvice::for_gb(15.9), Some(RamAdvice::Limited));
        assert_eq!(RamAdvice::for_gb(16.0), None);
        assert_eq!(RamAdvice::for_gb(31.9), None);
        assert_eq!(RamAdvice::for_gb(32.0), Some(RamAdvice::Plenty));
        assert_eq!(RamAdvice::for_gb(128.0), Some(RamAdvice::Plenty));
    }

    #[test]
    fn test_bytes_to_gb() {
        assert_eq!(bytes_to_gb(16 * 1024 * 1024 * 1024), 16.0);
        assert_eq!(format!("{:.1}", bytes_to_gb(17_179_869_184 + 107_374_182)), "16.1");
    }
}
