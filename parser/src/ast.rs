/// One entry of an ordering list, in the order it was written.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Sort {
        target: SortTarget,
        direction: SortDirection,
    },
    Random,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortTarget {
    /// A column, optionally qualified by its table: `users.name`
    Column { table: Option<String>, name: String },
    /// SQL written between backticks, passed through untouched
    Raw(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}
