//! Step definitions for task board behaviour scenarios.

mod then;
