//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the behavior engine
//! against mock adapters.  All tests run on the host (x86_64) with no
//! real hardware required.

mod board_tests;
mod mock_hw;
mod scheduler_tests;
