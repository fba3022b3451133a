mod registry;

pub use registry::{
    DEFAULT_ENTRY_EXTENSION, DEFAULT_HEADER_EXTENSIONS, DEFAULT_SOURCE_EXTENSIONS, FileKind,
    LanguageRegistry,
};
