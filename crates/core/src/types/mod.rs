pub mod classpath;
pub mod target;

pub use classpath::{ClasspathEntry, ClasspathResolution, EntryKind, ExcludeMap};
pub use target::TargetAddressInfo;
