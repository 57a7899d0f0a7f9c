//! Workspace-level tooling package; the real crates live under `crates/`.
