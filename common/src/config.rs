pub struct Config {
    /// Suppresses headers and decorations.
    ///
    /// Each level hides one more layer of output, errors are always shown.
    pub quiet: u8,
    /// Prints the serialized records instead of the tree view.
    pub json: bool,
}
