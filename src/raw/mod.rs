mod arena;
mod handle;

pub(crate) use arena::Arena;
pub(crate) use handle::Handle;
