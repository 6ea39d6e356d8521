// Every file holds one self-contained `pub mod` block that can be pasted
// into a single-file submission as is. The re-exports give the same paths
// here as in a pasted file.
mod base {
    pub mod error;
    pub mod monoid;
    pub mod precondition;
}

mod math {
    pub mod factorial;
    pub mod num_mod_static;
}

mod tree {
    pub mod segtree_lazy;
}

pub use base::{error::error, monoid::monoid, precondition::precondition};
pub use math::{factorial::factorial, num_mod_static::num_mod_static};
pub use tree::segtree_lazy::segtree_lazy;
