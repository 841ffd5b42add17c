/// A piece of a query that is accumulated by a builder and later rendered.
pub trait Clause {
    /// An empty clause contributes nothing to the rendered SQL.
    fn is_empty(&self) -> bool;
}
