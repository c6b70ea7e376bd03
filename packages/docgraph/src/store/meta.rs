use super::self_prelude::*;
use convert_case::{Case, Casing};

/// The case a name was declared in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NameCase {
    Pascal,
    Snake,
    Camel,
}

/// A model or field name. Stores declare names in their own case, GraphQL
/// exposes types in PascalCase and fields in camelCase.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Name {
    raw: String,
    case: NameCase,
}

impl From<NameCase> for Case {
    fn from(case: NameCase) -> Self {
        match case {
            NameCase::Pascal => Case::Pascal,
            NameCase::Snake => Case::Snake,
            NameCase::Camel => Case::Camel,
        }
    }
}

impl Name {
    pub fn new_pascal(name: impl Into<String>) -> Self {
        Self::new(name, NameCase::Pascal)
    }
    pub fn new_snake(name: impl Into<String>) -> Self {
        Self::new(name, NameCase::Snake)
    }
    pub fn new_camel(name: impl Into<String>) -> Self {
        Self::new(name, NameCase::Camel)
    }
    pub fn new(name: impl Into<String>, case: NameCase) -> Self {
        Self {
            raw: name.into(),
            case,
        }
    }

    /// The name exactly as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    fn to_case(&self, case: NameCase) -> String {
        if self.case == case {
            return self.raw.clone();
        }
        self.raw.from_case(self.case.into()).to_case(case.into())
    }
    pub fn to_pascal_string(&self) -> String {
        self.to_case(NameCase::Pascal)
    }
    pub fn to_snake_string(&self) -> String {
        self.to_case(NameCase::Snake)
    }
    pub fn to_camel_string(&self) -> String {
        self.to_case(NameCase::Camel)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_field_names_become_camel_case() {
        assert_eq!(Name::new_snake("first_name").to_camel_string(), "firstName");
        assert_eq!(Name::new_snake("email").to_camel_string(), "email");
        assert_eq!(Name::new_snake("id").to_camel_string(), "id");
        assert_eq!(Name::new_pascal("EditorNode").to_snake_string(), "editor_node");
    }

    #[test]
    fn test_declared_case_is_kept_verbatim() {
        let name = Name::new_pascal("Editor");
        assert_eq!(name.as_str(), "Editor");
        assert_eq!(name.to_pascal_string(), "Editor");
        assert_eq!(name.to_string(), "Editor");
    }
}
