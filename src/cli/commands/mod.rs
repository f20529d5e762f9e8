mod forget;
mod resolve;

pub use forget::cmd_forget;
pub use resolve::cmd_resolve;
