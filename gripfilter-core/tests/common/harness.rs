//! Assertions and deterministic noise for integration tests

/// Deterministic random number generator for jittering poses
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        // Xorshift
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / 16777216.0
    }

    pub fn gen_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

#[macro_export]
macro_rules! assert_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let actual: f32 = $actual;
        let expected: f32 = $expected;
        let diff = (actual - expected).abs();
        if !(diff <= $tolerance) {
            panic!(
                "Value {} not within tolerance {} of expected {} (diff: {})",
                actual, $tolerance, expected, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_vec_within_tolerance {
    ($actual:expr, $expected:expr, $tolerance:expr) => {
        let actual: glam::Vec3 = $actual;
        let expected: glam::Vec3 = $expected;
        let diff = (actual - expected).length();
        if !(diff <= $tolerance) {
            panic!(
                "Vector {:?} not within tolerance {} of expected {:?} (diff: {})",
                actual, $tolerance, expected, diff
            );
        }
    };
}
