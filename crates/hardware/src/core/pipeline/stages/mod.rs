//! Pipeline stage implementations.
//!
//! Each stage is a free function over the shared `PipelineState`. Within a cycle the
//! scheduler runs them in this order:
//! 1. **Fetch:** Fills the issue window in trace order (windowed model).
//! 2. **Dispatch:** Moves ready window entries onto free execution units (windowed model).
//! 3. **Issue:** Starts ready nodes directly, bypassing the window (direct model).
//! 4. **Execute:** Decrements remaining latencies and retires finished nodes.

/// Dispatch stage implementation.
pub mod dispatch;

/// Execute stage implementation.
pub mod execute;

/// Fetch stage implementation.
pub mod fetch;

/// Direct issue stage implementation.
pub mod issue;

/// Dispatch stage entry point (DS stage).
pub use dispatch::dispatch_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Direct issue entry point (IS stage).
pub use issue::direct_issue_stage;
