mod index;

pub use index::{GitRepo, RepoFiles};

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
