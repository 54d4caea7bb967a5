/// Three-way change for a nullable field in a partial update.
///
/// `Option<Option<T>>` would work too, but reads badly at call sites; this
/// spells out the difference between "leave it alone" and "remove it".
///
/// ```
/// use taskboard_domain::FieldUpdate;
///
/// let mut due = Some("2024-05-01".to_string());
/// FieldUpdate::<String>::NoChange.apply_to(&mut due);
/// assert_eq!(due.as_deref(), Some("2024-05-01"));
///
/// FieldUpdate::Clear.apply_to(&mut due);
/// assert_eq!(due, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            Self::NoChange => {}
            Self::Set(value) => *field = Some(value),
            Self::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Builds an update from a "new value" argument and a "clear" switch, as
    /// command-line front ends collect them. Clearing wins when both are given.
    pub fn from_parts(value: Option<T>, clear: bool) -> Self {
        match (value, clear) {
            (_, true) => Self::Clear,
            (Some(value), false) => Self::Set(value),
            (None, false) => Self::NoChange,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Clear, Self::Set)
    }
}
