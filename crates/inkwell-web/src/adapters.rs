//! Features that open dialogs on the shared modal stack. Each one keeps
//! its own latch so a repeated trigger never stacks a second copy of the
//! same prompt.

pub mod auth_gate;
pub mod delete_confirm;
pub mod notice;
pub mod write_flow;
