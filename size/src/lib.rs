//! Byte counts scaled by powers of 1024.
//!
//! The plain functions wrap on overflow, the same way `u64` multiplication
//! does in release builds. Use [`Unit::checked_apply`] when overflow must be
//! reported instead.

mod byte_size;
mod error;
mod unit;

pub use byte_size::ByteSize;
pub use error::Error;
pub use unit::Unit;

pub const KB: u64 = 1024;
pub const MB: u64 = KB * 1024;
pub const GB: u64 = MB * 1024;
pub const TB: u64 = GB * 1024;

pub const fn bytes(bytes: u64) -> u64 {
    bytes
}

pub const fn kilobytes(kb: u64) -> u64 {
    bytes(kb).wrapping_mul(1024)
}

pub const fn megabytes(mb: u64) -> u64 {
    kilobytes(mb).wrapping_mul(1024)
}

pub const fn gigabytes(gb: u64) -> u64 {
    megabytes(gb).wrapping_mul(1024)
}

pub const fn terabytes(tb: u64) -> u64 {
    gigabytes(tb).wrapping_mul(1024)
}

#[cfg(test)]
mod test {
    use rand::Rng;

    use super::{bytes, gigabytes, kilobytes, megabytes, terabytes, GB, KB, MB, TB};

    // Evaluated by the compiler; a non-const fn would fail to build here.
    const PAGE: u64 = kilobytes(4);
    const HUGE_PAGE: u64 = megabytes(2);

    #[test]
    fn test_known_values() {
        assert_eq!(bytes(512), 512);
        assert_eq!(kilobytes(2), 2048);
        assert_eq!(megabytes(1), 1_048_576);
        assert_eq!(gigabytes(1), 1_073_741_824);
        assert_eq!(terabytes(1), 1_099_511_627_776);
        assert_eq!(PAGE, 4096);
        assert_eq!(HUGE_PAGE, 2_097_152);
    }

    #[test]
    fn test_constants() {
        assert_eq!(KB, kilobytes(1));
        assert_eq!(MB, megabytes(1));
        assert_eq!(GB, gigabytes(1));
        assert_eq!(TB, terabytes(1));
        assert_eq!(3 * MB, megabytes(3));
    }

    #[test]
    fn test_zero() {
        assert_eq!(kilobytes(0), 0);
        assert_eq!(terabytes(0), 0);
    }

    #[test]
    fn test_scaling_below_overflow() {
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let n = rng.gen_range(0..(u64::MAX >> 40));
            assert_eq!(kilobytes(n), n * 1024);
            assert_eq!(megabytes(n), n * 1024 * 1024);
            assert_eq!(gigabytes(n), n * 1024 * 1024 * 1024);
            assert_eq!(terabytes(n), n * 1024 * 1024 * 1024 * 1024);
        }
    }

    #[test]
    fn test_overflow_wraps() {
        // 2^24 TiB is exactly 2^64.
        assert_eq!(terabytes(1 << 24), 0);
        assert_eq!(terabytes((1 << 24) + 1), TB);
        assert_eq!(kilobytes(u64::MAX), u64::MAX.wrapping_mul(1024));
        assert_eq!(gigabytes(u64::MAX), u64::MAX.wrapping_mul(GB));
    }
}
