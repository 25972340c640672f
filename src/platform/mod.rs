mod rename;

pub(crate) use rename::rename_replace;
