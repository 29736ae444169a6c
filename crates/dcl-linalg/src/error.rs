/// Errors returned by the fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A rotation axis was requested by a name other than `x`, `y` or `z`.
    #[error("invalid rotation axis `{name}`; use \"x\", \"y\", or \"z\"")]
    InvalidAxis { name: String },
}
