// Meaning:
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (only for nullable fields)
// - Value(v): replace with v

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PatchField<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Validates or converts the carried value, keeping Unset/Null as they are.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<PatchField<U>, E> {
        match self {
            PatchField::Unset => Ok(PatchField::Unset),
            PatchField::Null => Ok(PatchField::Null),
            PatchField::Value(v) => f(v).map(PatchField::Value),
        }
    }

    /// `None` when untouched, `Some(None)` when cleared.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            PatchField::Unset => None,
            PatchField::Null => Some(None),
            PatchField::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset() {
        let field: PatchField<String> = PatchField::default();
        assert!(field.is_unset());
        assert_eq!(field.into_change(), None);
    }

    #[test]
    fn null_clears_and_value_replaces() {
        assert_eq!(PatchField::<i32>::Null.into_change(), Some(None));
        assert_eq!(PatchField::Value(4).into_change(), Some(Some(4)));
    }

    #[test]
    fn try_map_only_touches_values() {
        let parsed: Result<PatchField<i32>, String> =
            PatchField::Value("3".to_string()).try_map(|s| s.parse().map_err(|_| s));
        assert_eq!(parsed, Ok(PatchField::Value(3)));

        let null: Result<PatchField<i32>, String> =
            PatchField::<String>::Null.try_map(|_| Err("never called".to_string()));
        assert_eq!(null, Ok(PatchField::Null));
    }
}
