//! scalex-test - Regression test framework for ScaleX
//!
//! Provides [`RegParams`], a small harness that numbers each check, records
//! failures and reports them together at the end of a test, plus
//! deterministic test patterns for differential tests.
//!
//! # Usage
//!
//! ```ignore
//! use scalex_test::{RegParams, palette_noise};
//!
//! let mut rp = RegParams::new("scale2x");
//! rp.compare_values(64.0, out.width() as f64, 0.0);
//! rp.compare_buffers(&reference, &optimized);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every check, or "compare"
//!   (default) to print failures only

mod error;
mod params;
mod patterns;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use patterns::{SimpleRng, benchmark_scene, noise, palette_noise};
