
/// Default modules to bring into scope within test modules.
pub mod prelude {
    pub use rstest::*;

    pub use crate::prelude::*;
    pub use crate::test::fixtures::*;
}
