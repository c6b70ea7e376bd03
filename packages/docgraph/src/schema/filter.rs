use super::converter::*;
use super::self_prelude::*;

/// Argument names reserved for pagination. They never become filters.
pub const PAGINATION_ARGUMENTS: [&str; 4] = ["first", "last", "before", "after"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterArgument {
    /// Store field the predicate applies to.
    pub field: ModelFieldId,
    pub scalar: ScalarKind,
}

/// The filter arguments an output type accepts, keyed by argument name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterArgumentTable(IndexMap<String, FilterArgument>);

impl FilterArgumentTable {
    /// Derive the table from converted fields. Only scalar and scalar list
    /// fields qualify; `whitelist`, when given, restricts the table to the
    /// named fields (by exposed or store name).
    pub fn derive(
        fields: &IndexMap<String, ConvertedField>,
        whitelist: Option<&[String]>,
    ) -> Self {
        let table = fields
            .values()
            .filter(|field| match whitelist {
                Some(names) => names
                    .iter()
                    .any(|name| name == &field.name || name == &field.source),
                None => true,
            })
            .filter(|field| {
                let reserved = PAGINATION_ARGUMENTS.contains(&field.name.as_str());
                if reserved {
                    debug!("Field {} cannot be used as a filter argument", field.name);
                }
                !reserved
            })
            .filter_map(|field| {
                let scalar = field.filter_scalar()?;
                Some((
                    field.name.clone(),
                    FilterArgument {
                        field: field.source.clone(),
                        scalar,
                    },
                ))
            })
            .collect();
        Self(table)
    }

    pub fn get(&self, name: &str) -> Option<&FilterArgument> {
        self.0.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterArgument)> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Argument types for schema introspection.
    pub fn type_refs(&self) -> impl Iterator<Item = (String, TypeRef)> + '_ {
        self.0.iter().map(|(name, argument)| {
            (name.clone(), TypeRef::named(scalar_type_name(argument.scalar)))
        })
    }

    /// Translate caller arguments into store predicates. Arguments outside
    /// the table and null arguments are ignored.
    pub fn to_filter(&self, args: &IndexMap<String, JsonValue>) -> Filter {
        args.iter()
            .filter(|(_, value)| !value.is_null())
            .filter_map(|(name, value)| {
                let argument = self.0.get(name)?;
                Some((argument.field.clone(), value.clone()))
            })
            .fold(Filter::new(), |filter, (field, value)| filter.with(field, value))
    }
}
