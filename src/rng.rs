use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Error, RngCore, SeedableRng};

const MULTIPLIER: u32 = 1_103_515_245;
const INCREMENT: u32 = 12_345;

/// Linear congruential generator with the classic C `rand()` constants.
///
/// Every output is in `0..32768`. That includes [`RngCore::next_u32`], so only
/// the low 15 bits of each word carry randomness; callers reduce it with `%`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Lcg { state: seed }
    }

    pub fn next_value(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        (self.state / 65536) % 32768
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.next_value()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_value());
        let low = u64::from(self.next_value());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_value().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Lcg::new(u32::from_le_bytes(seed))
    }
}

/// Source of the one-off seed value.
pub trait Clock {
    /// Any value that differs between runs. Nothing else is promised.
    fn read_coarse_time(&self) -> u32;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn read_coarse_time(&self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos() ^ elapsed.as_secs() as u32)
            .unwrap_or(0)
    }
}
